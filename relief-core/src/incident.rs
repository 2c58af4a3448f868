use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Minor, Severity::Moderate, Severity::Severe];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    pub fn badge_color(self) -> &'static str {
        match self {
            Severity::Minor => "#28a745",
            Severity::Moderate => "#fd7e14",
            Severity::Severe => "#dc3545",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "Minor" => Ok(Severity::Minor),
            "Moderate" => Ok(Severity::Moderate),
            "Severe" => Ok(Severity::Severe),
            other => Err(format!("invalid severity '{other}'")),
        }
    }
}

/// A citizen-submitted incident report. Lives only in page state; reloading
/// the page discards it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: i64,
    pub location: String,
    pub coordinates: Option<(f64, f64)>,
    pub description: String,
    pub severity: Severity,
    pub image: Option<String>,
    pub created_at: String,
}

impl IncidentReport {
    /// Trims the description and rejects an empty one.
    pub fn new(
        id: i64,
        location: String,
        coordinates: Option<(f64, f64)>,
        description: &str,
        severity: Severity,
        image: Option<String>,
        created_at: String,
    ) -> Result<Self, String> {
        let description = description.trim();
        if description.is_empty() {
            return Err("description is required".into());
        }
        Ok(IncidentReport {
            id,
            location,
            coordinates,
            description: description.to_string(),
            severity,
            image,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Ok(severity));
        }
        assert!(Severity::parse("Critical").is_err());
    }

    #[test]
    fn rejects_blank_description() {
        let result = IncidentReport::new(
            1,
            "12.9716, 77.5946".into(),
            Some((12.9716, 77.5946)),
            "   ",
            Severity::Minor,
            None,
            "now".into(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn trims_description_on_construction() {
        let report = IncidentReport::new(
            2,
            "Location unavailable".into(),
            None,
            "  road flooded near the bridge  ",
            Severity::Severe,
            None,
            "now".into(),
        )
        .expect("valid report");
        assert_eq!(report.description, "road flooded near the bridge");
        assert_eq!(report.coordinates, None);
    }
}
