use serde::{Deserialize, Serialize};

/// Weather-by-city response body. The service reports "city not found"
/// in-band through `cod`, which arrives as a number on success and as a
/// string on error.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherBody {
    pub cod: serde_json::Value,
    #[serde(default)]
    pub main: Option<WeatherMain>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub rain: Option<Rainfall>,
    #[serde(default)]
    pub wind: Option<Wind>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Rainfall {
    #[serde(rename = "1h")]
    pub last_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub last_three_hours: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

impl WeatherBody {
    pub fn city_found(&self) -> bool {
        self.cod.as_u64() == Some(200) || self.cod.as_str() == Some("200")
    }

    /// Whole-snapshot view of a successful lookup; `None` when a required
    /// field is missing, in which case the previous snapshot stays on screen.
    pub fn to_snapshot(&self) -> Option<WeatherSnapshot> {
        let main = self.main.as_ref()?;
        let condition = self.weather.first()?.description.clone();
        let wind = self.wind.as_ref()?;
        let rainfall = self
            .rain
            .as_ref()
            .and_then(|r| r.last_hour.or(r.last_three_hours))
            .unwrap_or(0.0);
        Some(WeatherSnapshot {
            temperature: format!("{}°C", main.temp),
            condition,
            humidity: format!("{}%", main.humidity),
            rainfall: format!("{rainfall}mm"),
            wind: format!("{} km/h", wind.speed),
        })
    }
}

/// Display strings shown on the weather card, overwritten wholesale per
/// successful fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub rainfall: String,
    pub wind: String,
}

impl WeatherSnapshot {
    pub fn placeholder() -> Self {
        WeatherSnapshot {
            temperature: "--".into(),
            condition: "--".into(),
            humidity: "--".into(),
            rainfall: "--".into(),
            wind: "--".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewsBody {
    pub articles: Vec<Article>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub url: String,
}

/// Successful identity-service response; failures arrive as a nested
/// `error.message` and are surfaced verbatim before this is parsed.
#[derive(Clone, Debug, Deserialize)]
pub struct IdentityAccount {
    #[serde(rename = "localId")]
    pub local_id: String,
    #[serde(default)]
    pub email: String,
}

/// Profile record written to the record store under the new account's id.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileRecord {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_cod_both_recognized() {
        let ok: WeatherBody = serde_json::from_str(
            r#"{"cod": 200, "main": {"temp": 27.5, "humidity": 80},
                "weather": [{"description": "light rain"}],
                "rain": {"1h": 2.5}, "wind": {"speed": 12.0}}"#,
        )
        .expect("parse");
        assert!(ok.city_found());

        let missing: WeatherBody =
            serde_json::from_str(r#"{"cod": "404", "message": "city not found"}"#).expect("parse");
        assert!(!missing.city_found());
        assert!(missing.to_snapshot().is_none());
    }

    #[test]
    fn snapshot_formats_display_strings() {
        let body: WeatherBody = serde_json::from_str(
            r#"{"cod": 200, "main": {"temp": 27.5, "humidity": 80},
                "weather": [{"description": "light rain"}],
                "rain": {"3h": 6.0}, "wind": {"speed": 12.0}}"#,
        )
        .expect("parse");
        let snapshot = body.to_snapshot().expect("snapshot");
        assert_eq!(snapshot.temperature, "27.5°C");
        assert_eq!(snapshot.humidity, "80%");
        assert_eq!(snapshot.rainfall, "6mm");
        assert_eq!(snapshot.wind, "12 km/h");
        assert_eq!(snapshot.condition, "light rain");
    }

    #[test]
    fn missing_rain_reads_as_zero() {
        let body: WeatherBody = serde_json::from_str(
            r#"{"cod": 200, "main": {"temp": 31.0, "humidity": 40},
                "weather": [{"description": "clear sky"}], "wind": {"speed": 5.5}}"#,
        )
        .expect("parse");
        assert_eq!(body.to_snapshot().expect("snapshot").rainfall, "0mm");
    }

    #[test]
    fn news_body_maps_articles() {
        let body: NewsBody = serde_json::from_str(
            r#"{"articles": [
                {"title": "Embankment breach", "publishedAt": "2024-09-20T10:00:00Z",
                 "url": "https://example.com/a"}
            ]}"#,
        )
        .expect("parse");
        assert_eq!(body.articles.len(), 1);
        assert_eq!(body.articles[0].published_at, "2024-09-20T10:00:00Z");
    }
}
