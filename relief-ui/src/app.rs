use crate::bridge;
use crate::pages::auth::AuthPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::funds::FundsPage;
use crate::pages::help::HelpPage;
use crate::pages::map::MapPage;
use crate::pages::reports::ReportsPage;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsValue;

/// One active page at a time; no navigation stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Reports,
    Funds,
    Map,
    Help,
}

#[component]
pub fn App() -> impl IntoView {
    let dark_mode = create_rw_signal(false);
    let logged_in = create_rw_signal(false);
    let page = create_rw_signal(Page::Dashboard);

    // Mirror auth and theme state onto body classes so the stylesheet can
    // restyle the whole document.
    create_effect(move |_| set_body_class("auth-page", !logged_in.get()));
    create_effect(move |_| set_body_class("dark-mode", dark_mode.get()));

    let container_class = move || {
        if page.get() == Page::Dashboard {
            "container"
        } else {
            "container full-width"
        }
    };

    view! {
      <div class=container_class>
        <Show
          when=move || logged_in.get()
          fallback=move || view! { <AuthPage logged_in=logged_in/> }
        >
          <Header dark_mode=dark_mode page=page/>
          {move || match page.get() {
              Page::Dashboard => view! { <DashboardPage/> }.into_view(),
              Page::Reports => view! { <ReportsPage/> }.into_view(),
              Page::Funds => view! { <FundsPage/> }.into_view(),
              Page::Map => view! { <MapPage/> }.into_view(),
              Page::Help => view! { <HelpPage/> }.into_view(),
          }}
        </Show>
      </div>
    }
}

#[component]
fn Header(dark_mode: RwSignal<bool>, page: RwSignal<Page>) -> impl IntoView {
    let clock = create_rw_signal(current_time_line());
    if let Ok(handle) = set_interval_with_handle(
        move || clock.set(current_time_line()),
        Duration::from_secs(60),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
      <div class="header">
        <div class="header-left">
          <h1>"SURAKSHA"</h1>
          <p>{move || clock.get()}</p>
        </div>
        <div class="header-icons">
          <div class="icon-card" on:click=move |_| page.set(Page::Reports)>
            <span class="icon-glyph">"📝"</span>
            <span>"Reports"</span>
          </div>
          <div class="icon-card" on:click=move |_| page.set(Page::Funds)>
            <span class="icon-glyph">"💰"</span>
            <span>"Funds"</span>
          </div>
          <div class="icon-card" on:click=move |_| page.set(Page::Map)>
            <span class="icon-glyph">"📍"</span>
            <span>"Map"</span>
          </div>
          <div class="icon-card" on:click=move |_| page.set(Page::Help)>
            <span class="icon-glyph">"📞"</span>
            <span>"Contact"</span>
          </div>
          <Show when=move || page.get() != Page::Dashboard fallback=|| ()>
            <div class="icon-card" on:click=move |_| page.set(Page::Dashboard)>
              <span class="icon-glyph">"🏠"</span>
              <span>"Dashboard"</span>
            </div>
          </Show>
          <div class="icon-card" on:click=move |_| dark_mode.update(|v| *v = !*v)>
            <span class="icon-glyph">{move || if dark_mode.get() { "🌙" } else { "☀️" }}</span>
            <span>{move || if dark_mode.get() { "Dark" } else { "Light" }}</span>
          </div>
        </div>
      </div>
    }
}

fn current_time_line() -> String {
    let now = js_sys::Date::new_0();
    let date = String::from(now.to_locale_date_string("en-US", &JsValue::UNDEFINED));
    let time = String::from(now.to_locale_time_string("en-US"));
    format!("{date} · {time}")
}

fn set_body_class(name: &str, on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let result = if on {
        classes.add_1(name)
    } else {
        classes.remove_1(name)
    };
    if result.is_err() {
        bridge::log_error(&format!("could not toggle body class '{name}'"));
    }
}
