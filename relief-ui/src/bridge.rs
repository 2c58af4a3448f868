//! Adapters for the external collaborators: weather and news lookups, the
//! identity service and its record store, browser geolocation, file reading,
//! and the blocking prompt/console surfaces. All single-attempt, no retries.

use crate::config;
use crate::dto::{IdentityAccount, NewsBody, ProfileRecord, WeatherBody};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window not available".to_string())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = JsFuture::from(window()?.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-response value".to_string())?;
    parse_body(response).await
}

async fn send_json<B, T>(method: &str, url: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_body(&JsValue::from_str(&payload));
    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("bad request: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("set header: {e:?}"))?;
    let response = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-response value".to_string())?;
    parse_body(response).await
}

async fn parse_body<T: DeserializeOwned>(response: web_sys::Response) -> Result<T, String> {
    let body = JsFuture::from(response.json().map_err(|e| format!("read body: {e:?}"))?)
        .await
        .map_err(|e| format!("malformed body: {e:?}"))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

pub async fn weather_by_city(city: &str) -> Result<WeatherBody, String> {
    let url = format!(
        "{}?q={}&units=metric&appid={}",
        config::WEATHER_ENDPOINT,
        encode(city),
        config::WEATHER_API_KEY
    );
    get_json(&url).await
}

pub async fn disaster_news() -> Result<NewsBody, String> {
    let url = format!(
        "{}?q={}&sortBy=publishedAt&language=en&pageSize=5&apiKey={}",
        config::NEWS_ENDPOINT,
        encode(config::NEWS_QUERY),
        config::NEWS_API_KEY
    );
    get_json(&url).await
}

pub async fn sign_in(email: &str, password: &str) -> Result<IdentityAccount, String> {
    identity_call(config::SIGN_IN_ENDPOINT, email, password).await
}

pub async fn sign_up(email: &str, password: &str) -> Result<IdentityAccount, String> {
    identity_call(config::SIGN_UP_ENDPOINT, email, password).await
}

/// The identity service reports failures in-band; its message is surfaced
/// verbatim as the error.
async fn identity_call(
    endpoint: &str,
    email: &str,
    password: &str,
) -> Result<IdentityAccount, String> {
    let url = format!("{endpoint}?key={}", config::IDENTITY_API_KEY);
    let request = serde_json::json!({
        "email": email,
        "password": password,
        "returnSecureToken": true,
    });
    let value: serde_json::Value = send_json("POST", &url, &request).await?;
    if let Some(message) = value.pointer("/error/message").and_then(|m| m.as_str()) {
        return Err(message.to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

pub async fn write_profile(account_id: &str, profile: &ProfileRecord) -> Result<(), String> {
    let url = format!("{}/users/{account_id}.json", config::RECORD_STORE_URL);
    let _: serde_json::Value = send_json("PUT", &url, profile).await?;
    Ok(())
}

/// One-shot position fix. Unsupported runtimes yield the fixed sentinel as
/// the error; denial and timeout yield the browser's own message.
pub async fn current_position() -> Result<(f64, f64), String> {
    let geolocation = window()?
        .navigator()
        .geolocation()
        .map_err(|_| relief_core::geo::GEOLOCATION_UNSUPPORTED.to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let fail = reject.clone();
        let on_ok = Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            let pair = js_sys::Array::of2(&coords.latitude().into(), &coords.longitude().into());
            let _ = resolve.call1(&JsValue::NULL, &pair);
        });
        let on_err = Closure::once_into_js(move |error: web_sys::PositionError| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(&error.message()));
        });
        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_ok.unchecked_ref(),
            Some(on_err.unchecked_ref()),
        ) {
            let _ = fail.call1(&JsValue::NULL, &e);
        }
    });

    let value = JsFuture::from(promise).await.map_err(reject_message)?;
    let pair: js_sys::Array = value.unchecked_into();
    let lat = pair
        .get(0)
        .as_f64()
        .ok_or_else(|| "position without latitude".to_string())?;
    let lng = pair
        .get(1)
        .as_f64()
        .ok_or_else(|| "position without longitude".to_string())?;
    Ok((lat, lng))
}

/// Reads an uploaded file into a data URL for inline preview.
pub async fn read_data_url(file: web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("file reader: {e:?}"))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let on_load = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call1(&JsValue::NULL, &done.result().unwrap_or(JsValue::NULL));
        });
        let fail = reject.clone();
        let on_error = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("could not read file"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
        if let Err(e) = reader.read_as_data_url(&file) {
            let _ = fail.call1(&JsValue::NULL, &e);
        }
    });
    let value = JsFuture::from(promise).await.map_err(reject_message)?;
    value
        .as_string()
        .ok_or_else(|| "file reader returned no data".to_string())
}

fn reject_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Blocking prompt, the validation and confirmation surface of every form.
pub fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Localized rendering of an RFC 3339 timestamp.
pub fn locale_string(value: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(value));
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}

pub fn locale_now() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED))
}
