use crate::bridge;
use crate::dto::ProfileRecord;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

/// Login/signup gate. Both flows are delegated to the external identity
/// service; its error message strings are shown verbatim.
#[component]
pub fn AuthPage(logged_in: RwSignal<bool>) -> impl IntoView {
    let mode = create_rw_signal(AuthMode::Login);

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    let error = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let login = move |_| {
        error.set(String::new());
        busy.set(true);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        spawn_local(async move {
            match bridge::sign_in(&email_value, &password_value).await {
                Ok(_) => logged_in.set(true),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let signup = move |_| {
        error.set(String::new());
        busy.set(true);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let profile = ProfileRecord {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone: phone.get_untracked(),
            email: email_value.clone(),
            created_at: bridge::locale_now(),
        };
        spawn_local(async move {
            match bridge::sign_up(&email_value, &password_value).await {
                Ok(account) => {
                    match bridge::write_profile(&account.local_id, &profile).await {
                        Ok(()) => logged_in.set(true),
                        Err(message) => error.set(message),
                    }
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let switch_mode = move |next: AuthMode| {
        error.set(String::new());
        mode.set(next);
    };

    view! {
      <div class="login-container">
        <div class="card login-card">
          <h1>"SURAKSHA"</h1>
          <p>"Disaster preparedness starts with being informed"</p>

          <Show
            when=move || mode.get() == AuthMode::Login
            fallback=move || view! {
              <div class="stack">
                <input
                  type="text"
                  placeholder="First name"
                  prop:value=move || first_name.get()
                  on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                  type="text"
                  placeholder="Last name"
                  prop:value=move || last_name.get()
                  on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                <input
                  type="tel"
                  placeholder="Phone number"
                  prop:value=move || phone.get()
                  on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <input
                  type="email"
                  placeholder="Email address"
                  prop:value=move || email.get()
                  on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                  type="password"
                  placeholder="Password"
                  prop:value=move || password.get()
                  on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button disabled=move || busy.get() on:click=signup>
                  {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-switch">
                  "Already have an account? "
                  <a on:click=move |_| switch_mode(AuthMode::Login)>"Log in"</a>
                </p>
              </div>
            }
          >
            <div class="stack">
              <input
                type="email"
                placeholder="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
              />
              <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
              />
              <button disabled=move || busy.get() on:click=login>
                {move || if busy.get() { "Signing in..." } else { "Log In" }}
              </button>
              <p class="auth-switch">
                "New here? "
                <a on:click=move |_| switch_mode(AuthMode::Signup)>"Create an account"</a>
              </p>
            </div>
          </Show>

          <Show when=move || !error.get().is_empty() fallback=|| ()>
            <p class="auth-error">{move || error.get()}</p>
          </Show>
        </div>
      </div>
    }
}
