//! Backend endpoint configuration.
//!
//! The only configuration surface is one environment variable naming the
//! backend base URL.

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "JOBPILOT_BACKEND_URL";

/// Base URL used when the environment variable is unset or blank.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";

/// Resolve the backend base URL from the environment.
pub fn backend_url_from_env() -> String {
    normalize_base_url(std::env::var(BACKEND_URL_ENV).ok().as_deref())
}

/// Trim whitespace and trailing slashes; fall back to the default when
/// nothing usable remains.
pub(crate) fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return DEFAULT_BACKEND_URL.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}
