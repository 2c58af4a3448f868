use crate::bridge;
use crate::config;
use crate::dto::WeatherSnapshot;
use leptos::*;
use relief_core::risk;
use relief_registry::{AreaAlert, NewsItem, Shelter};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
      <div class="grid grid-2">
        <WeatherCard/>
        <RiskRing/>
      </div>
      <SheltersList/>
      <div class="grid grid-2">
        <AlertsList/>
        <NewsList/>
      </div>
    }
}

#[component]
fn WeatherCard() -> impl IntoView {
    let snapshot = create_rw_signal(WeatherSnapshot::placeholder());
    let city_input = create_rw_signal(String::new());

    // Overlapping searches carry no sequencing guard; whichever response
    // resolves last wins the signal.
    let look_up = move |city: String| {
        spawn_local(async move {
            match bridge::weather_by_city(&city).await {
                Ok(body) => {
                    if !body.city_found() {
                        bridge::alert("City not found!");
                        return;
                    }
                    match body.to_snapshot() {
                        Some(next) => snapshot.set(next),
                        None => bridge::log_error("weather lookup returned an incomplete body"),
                    }
                }
                // Keep whatever is on screen; the user can search again.
                Err(e) => bridge::log_error(&format!("weather lookup failed: {e}")),
            }
        });
    };

    look_up(config::DEFAULT_CITY.to_string());

    let search = move |_| {
        let city = city_input.get_untracked().trim().to_string();
        look_up(if city.is_empty() {
            config::DEFAULT_CITY.to_string()
        } else {
            city
        });
    };

    view! {
      <div class="card">
        <div class="card-header">
          <h2 class="card-title">"Weather Forecast"</h2>
        </div>
        <div class="search-box">
          <input
            type="text"
            prop:value=move || city_input.get()
            on:input=move |ev| city_input.set(event_target_value(&ev))
            placeholder="Enter city name"
          />
          <button on:click=search>"Search"</button>
        </div>
        <div class="weather-info">
          <div class="temperature">
            <div class="temperature-value">{move || snapshot.get().temperature}</div>
            <div class="weather-condition">{move || snapshot.get().condition}</div>
          </div>
          <div class="weather-details">
            <div class="weather-item">
              <span>"Humidity:"</span>
              <span>{move || snapshot.get().humidity}</span>
            </div>
            <div class="weather-item">
              <span>"Rainfall:"</span>
              <span>{move || snapshot.get().rainfall}</span>
            </div>
            <div class="weather-item">
              <span>"Wind:"</span>
              <span>{move || snapshot.get().wind}</span>
            </div>
          </div>
        </div>
      </div>
    }
}

#[component]
fn RiskRing() -> impl IntoView {
    // Static until a live risk model feeds it.
    let flood_risk: u8 = 0;
    let radius = 42.0;

    let level = risk::classify(flood_risk);
    let circumference = risk::circumference(radius);
    let offset = risk::dash_offset(flood_risk, radius);

    view! {
      <div class="card">
        <h2 class="card-title">"Flood Risk Indicator"</h2>
        <div class="risk-indicator">
          <div class="circular-progress">
            <svg viewBox="0 0 100 100">
              <circle class="progress-bg" cx="50" cy="50" r="42"></circle>
              <circle
                class="progress-bar"
                cx="50"
                cy="50"
                r="42"
                style=format!(
                    "stroke: {}; stroke-dasharray: {circumference}; stroke-dashoffset: {offset}",
                    level.color(),
                )
              ></circle>
            </svg>
            <div class="progress-text">
              <div class="progress-percentage" style=format!("color: {}", level.color())>
                {format!("{flood_risk}%")}
              </div>
              <div class="progress-label">{level.label()}</div>
            </div>
          </div>
          <div class="risk-level" style=format!("background-color: {}", level.bg_color())>
            <div style=format!("color: {}", level.color())>
              {format!("{} Risk Level", level.label())}
            </div>
            <div class="risk-level-text">"Based on current weather conditions"</div>
          </div>
        </div>
      </div>
    }
}

#[component]
fn SheltersList() -> impl IntoView {
    let shelters = relief_registry::nearest_shelters();

    view! {
      <div class="card">
        <h2 class="card-title">"Nearest Shelters"</h2>
        <div class="shelters-list">
          <For
            each=move || shelters.clone()
            key=|s: &Shelter| s.id
            children=move |shelter| view! {
              <div class="shelter-item">
                <div class="shelter-info">
                  <div class="shelter-icon">{shelter.icon.clone()}</div>
                  <div>
                    <div class="shelter-name">{shelter.name.clone()}</div>
                    <div class="shelter-type">{shelter.kind.clone()}</div>
                  </div>
                </div>
                <div class="shelter-distance">
                  <div class="distance-value">{format!("{} km", shelter.distance_km)}</div>
                  <div class="distance-label">"away"</div>
                </div>
              </div>
            }
          />
        </div>
      </div>
    }
}

#[component]
fn AlertsList() -> impl IntoView {
    let alerts = relief_registry::recent_alerts();

    view! {
      <div class="card">
        <h2 class="card-title">"Recent Alerts"</h2>
        <div class="alerts-list">
          <For
            each=move || alerts.clone()
            key=|a: &AreaAlert| a.id
            children=move |alert| {
              let indicator = if alert.is_new { "alert-indicator alert-new" } else { "alert-indicator alert-old" };
              view! {
                <div class="alert-item">
                  <div class=indicator></div>
                  <div class="alert-content">
                    <div class="alert-message">{alert.message.clone()}</div>
                    <div class="alert-time">{alert.time.clone()}</div>
                  </div>
                </div>
              }
            }
          />
        </div>
      </div>
    }
}

#[component]
fn NewsList() -> impl IntoView {
    let news = create_rw_signal(Vec::<NewsItem>::new());

    spawn_local(async move {
        match bridge::disaster_news().await {
            Ok(body) => {
                let items = body
                    .articles
                    .iter()
                    .enumerate()
                    .map(|(index, article)| NewsItem {
                        id: index as u32 + 1,
                        title: article.title.clone(),
                        time: bridge::locale_string(&article.published_at),
                        url: article.url.clone(),
                    })
                    .collect();
                news.set(items);
            }
            Err(e) => {
                bridge::log_error(&format!("news lookup failed: {e}"));
                news.set(relief_registry::fallback_news());
            }
        }
    });

    view! {
      <div class="card">
        <h2 class="card-title">"Recent News"</h2>
        <div class="news-list">
          <For
            each=move || news.get()
            key=|n: &NewsItem| n.id
            children=move |item| view! {
              <div class="news-item">
                <div class="news-header">
                  <h3 class="news-title">{item.title.clone()}</h3>
                  <a class="news-link" href=item.url.clone() target="_blank" rel="noopener noreferrer">
                    "Read"
                  </a>
                </div>
                <div class="news-time">{item.time.clone()}</div>
              </div>
            }
          />
        </div>
      </div>
    }
}
