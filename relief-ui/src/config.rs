//! Endpoints and keys for the external collaborators. Keys are compile-time
//! environment values so a public build ships without them.

pub const WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const WEATHER_API_KEY: &str = match option_env!("WEATHER_API_KEY") {
    Some(key) => key,
    None => "",
};
pub const DEFAULT_CITY: &str = "Delhi";

pub const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const NEWS_API_KEY: &str = match option_env!("NEWS_API_KEY") {
    Some(key) => key,
    None => "",
};
pub const NEWS_QUERY: &str = "flood OR disaster AND India";

pub const SIGN_IN_ENDPOINT: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";
pub const SIGN_UP_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signUp";
pub const IDENTITY_API_KEY: &str = match option_env!("IDENTITY_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Base URL of the realtime record store holding profile records.
pub const RECORD_STORE_URL: &str = match option_env!("RECORD_STORE_URL") {
    Some(url) => url,
    None => "",
};
