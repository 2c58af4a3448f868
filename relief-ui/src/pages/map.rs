use crate::bridge;
use leptos::*;

/// Embedded map document; there is no data contract beyond it being
/// displayable in a frame.
#[component]
pub fn MapPage() -> impl IntoView {
    let fullscreen = create_rw_signal(false);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            fullscreen.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    // The document scrolls behind a fullscreen frame otherwise.
    create_effect(move |_| {
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if fullscreen.get() { "hidden" } else { "auto" };
        if body.style().set_property("overflow", overflow).is_err() {
            bridge::log_error("could not toggle body overflow");
        }
    });
    on_cleanup(move || {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "auto");
        }
    });

    let container_class = move || {
        if fullscreen.get() {
            "map-container map-fullscreen"
        } else {
            "map-container"
        }
    };

    let reload = move |_| {
        if let Err(e) = window().location().reload() {
            bridge::log_error(&format!("reload failed: {e:?}"));
        }
    };

    view! {
      <div class="page">
        <Show when=move || !fullscreen.get() fallback=|| ()>
          <div class="page-header">
            <h1>"Disaster Management Map"</h1>
            <p>"View real-time disaster information, shelters, and affected areas"</p>
          </div>
        </Show>

        <div class=container_class>
          <div class="map-controls">
            <button
              on:click=move |_| fullscreen.update(|v| *v = !*v)
              title=move || if fullscreen.get() {
                  "Exit Fullscreen (ESC)"
              } else {
                  "Enter Fullscreen"
              }
            >
              {move || if fullscreen.get() { "🗗" } else { "⛶" }}
            </button>
            <button on:click=reload title="Refresh Map">"⟳"</button>
          </div>

          <iframe title="Disaster Management Map" src="assets/map.html"></iframe>

          <Show when=move || fullscreen.get() fallback=|| ()>
            <div class="map-hint">
              "Press ESC or click the minimize button to exit fullscreen"
            </div>
          </Show>
        </div>
      </div>
    }
}
