use crate::bridge;
use leptos::*;
use relief_core::geo;
use relief_core::incident::{IncidentReport, Severity};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportsTab {
    Submit,
    View,
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let reports = create_rw_signal(Vec::<IncidentReport>::new());
    let tab = create_rw_signal(ReportsTab::Submit);

    let coordinates = create_rw_signal(None::<(f64, f64)>);
    let address = create_rw_signal(String::new());
    let locating = create_rw_signal(false);

    let description = create_rw_signal(String::new());
    let severity = create_rw_signal(Severity::Minor);
    let image = create_rw_signal(None::<String>);

    let detect_location = move || {
        locating.set(true);
        spawn_local(async move {
            match bridge::current_position().await {
                Ok((lat, lng)) => {
                    coordinates.set(Some((lat, lng)));
                    address.set(geo::format_coordinates(lat, lng));
                }
                Err(e) => {
                    coordinates.set(None);
                    if e == geo::GEOLOCATION_UNSUPPORTED {
                        address.set(e);
                    } else {
                        bridge::log_error(&format!("geolocation failed: {e}"));
                        address.set(geo::LOCATION_UNAVAILABLE.to_string());
                    }
                }
            }
            locating.set(false);
        });
    };

    detect_location();

    let on_severity = move |ev: ev::Event| {
        if let Ok(parsed) = Severity::parse(&event_target_value(&ev)) {
            severity.set(parsed);
        }
    };

    let on_image = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.item(0)) else {
            return;
        };
        spawn_local(async move {
            match bridge::read_data_url(file).await {
                Ok(data_url) => image.set(Some(data_url)),
                Err(e) => bridge::log_error(&format!("image upload failed: {e}")),
            }
        });
    };

    let submit = move |_| {
        let shown = address.get_untracked();
        let location = if shown.is_empty() {
            geo::LOCATION_UNAVAILABLE.to_string()
        } else {
            shown
        };
        let report = IncidentReport::new(
            js_sys::Date::now() as i64,
            location,
            coordinates.get_untracked(),
            &description.get_untracked(),
            severity.get_untracked(),
            image.get_untracked(),
            bridge::locale_now(),
        );
        match report {
            Ok(report) => {
                reports.update(|list| list.insert(0, report));
                description.set(String::new());
                severity.set(Severity::Minor);
                image.set(None);
                bridge::alert("Report submitted successfully!");
                tab.set(ReportsTab::View);
            }
            Err(_) => bridge::alert("Please enter a description"),
        }
    };

    let tab_class = move |this: ReportsTab| {
        if tab.get() == this {
            "tab-button tab-active"
        } else {
            "tab-button"
        }
    };

    view! {
      <div class="page">
        <div class="page-header">
          <h1>"Report Management System"</h1>
          <p>
            "Submit disaster reports and view community submissions to help \
             coordinate emergency response efforts."
          </p>
        </div>

        <div class="tab-row">
          <button class=move || tab_class(ReportsTab::Submit) on:click=move |_| tab.set(ReportsTab::Submit)>
            "📝 Submit Report"
          </button>
          <button class=move || tab_class(ReportsTab::View) on:click=move |_| tab.set(ReportsTab::View)>
            {move || format!("👁 View Reports ({})", reports.get().len())}
          </button>
        </div>

        <Show when=move || tab.get() == ReportsTab::Submit fallback=|| ()>
          <div class="card form-card">
            <h2>"Submit a New Report"</h2>
            <div class="stack">
              <div>
                <label class="field-label">
                  "📍 Location:"
                  <button
                    type="button"
                    on:click=move |_| detect_location()
                    disabled=move || locating.get()
                  >
                    {move || if locating.get() { "Detecting..." } else { "🔄 Refresh" }}
                  </button>
                </label>
                <div class="location-box">
                  {move || if locating.get() {
                      "🔍 Detecting location...".to_string()
                  } else {
                      format!("📍 {}", address.get())
                  }}
                </div>
              </div>

              <div>
                <label class="field-label">"📝 Description *"</label>
                <textarea
                  prop:value=move || description.get()
                  on:input=move |ev| description.set(event_target_value(&ev))
                  placeholder="Describe the issue you want to report in detail..."
                  required
                ></textarea>
              </div>

              <div>
                <label class="field-label">"⚠ Severity Level"</label>
                <select prop:value=move || severity.get().as_str() on:change=on_severity>
                  <option value="Minor">"🟢 Minor - Low impact issue"</option>
                  <option value="Moderate">"🟡 Moderate - Significant concern"</option>
                  <option value="Severe">"🔴 Severe - Critical emergency"</option>
                </select>
              </div>

              <div>
                <label class="field-label">"📸 Upload Image (Optional)"</label>
                <input type="file" accept="image/*" on:change=on_image/>
                <Show when=move || image.get().is_some() fallback=|| ()>
                  <div class="image-preview">
                    <img src=move || image.get().unwrap_or_default() alt="Preview"/>
                  </div>
                </Show>
              </div>

              <button class="submit-button" on:click=submit>"🚀 Submit Report"</button>
            </div>
          </div>
        </Show>

        <Show when=move || tab.get() == ReportsTab::View fallback=|| ()>
          <div class="card">
            <div class="card-banner">
              <h2>{move || format!("📋 Submitted Reports ({})", reports.get().len())}</h2>
            </div>
            <Show
              when=move || !reports.get().is_empty()
              fallback=|| view! {
                <div class="empty-state">
                  "📝 No reports submitted yet. Submit your first report to get started!"
                </div>
              }
            >
              <div class="grid grid-2">
                <For
                  each=move || reports.get()
                  key=|r: &IncidentReport| r.id
                  children=move |report| {
                    let severity = report.severity;
                    let has_image = report.image.is_some();
                    let image_src = report.image.clone().unwrap_or_default();
                    view! {
                      <div class="report-card">
                        <div class="report-head">
                          <span
                            class="severity-badge"
                            style=format!("background-color: {}", severity.badge_color())
                          >
                            {severity.as_str()}
                          </span>
                          <small class="meta">{format!("🕒 {}", report.created_at)}</small>
                        </div>
                        <p><b>"📍 Location: "</b>{report.location.clone()}</p>
                        <p><b>"📝 Description: "</b>{report.description.clone()}</p>
                        <Show when=move || has_image fallback=|| ()>
                          <div class="image-preview">
                            <img src=image_src.clone() alt="Report"/>
                          </div>
                        </Show>
                      </div>
                    }
                  }
                />
              </div>
            </Show>
          </div>
        </Show>
      </div>
    }
}
