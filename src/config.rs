use std::env;

pub const DEFAULT_UPSTREAM_URL: &str = "https://will-api-45901355656.us-south1.run.app/query";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SIGN_IN_URL: &str = "/sign-in";
const DEFAULT_SESSION_COOKIE: &str = "__session";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub upstream_url: String,
    pub host: String,
    pub port: u16,
    pub sign_in_url: String,
    pub session_cookie: String,
    pub templates: String,
    pub static_dir: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = get("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            upstream_url: get("CHAT_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            sign_in_url: get("SIGN_IN_URL").unwrap_or_else(|| DEFAULT_SIGN_IN_URL.to_string()),
            session_cookie: get("SESSION_COOKIE").unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            templates: "templates/**/*".to_string(),
            static_dir: "./static".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
