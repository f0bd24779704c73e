//! Application configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

/// Upper bound for `SESSION_MAX_AGE_SECS`: one year.
pub const MAX_SESSION_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;
/// Upper bound for `SESSION_SWEEP_INTERVAL_SECS`: one day.
pub const MAX_SESSION_SWEEP_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: String },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL of the identity service, without trailing slash.
    pub url: String,
    /// Public API key sent as the `apikey` header.
    pub anon_key: String,
    pub timeouts: IdentityTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub identity: IdentityConfig,
    pub session_max_age_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_URL`
    /// - `IDENTITY_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_REQUEST_TIMEOUT_SECS`: default 15
    /// - `IDENTITY_CONNECT_TIMEOUT_SECS`: default 5
    /// - `SESSION_MAX_AGE_SECS`: default 3600, between 1 and one year
    /// - `SESSION_SWEEP_INTERVAL_SECS`: default 60, between 1 and one day
    /// - `COOKIE_SECURE`: inferred from an `https://` identity URL when unset
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, `PORT` is not a
    /// valid port number, or a session duration is zero or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required("IDENTITY_URL")?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = required("IDENTITY_ANON_KEY")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT".into(), value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeouts = IdentityTimeouts {
            request_secs: env_parse("IDENTITY_REQUEST_TIMEOUT_SECS", DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("IDENTITY_CONNECT_TIMEOUT_SECS", DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS),
        };
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or_else(|| url.starts_with("https://"));

        Ok(Self {
            port,
            identity: IdentityConfig { url, anon_key, timeouts },
            session_max_age_secs: env_secs("SESSION_MAX_AGE_SECS", DEFAULT_SESSION_MAX_AGE_SECS, MAX_SESSION_MAX_AGE_SECS)?,
            session_sweep_interval_secs: env_secs(
                "SESSION_SWEEP_INTERVAL_SECS",
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
                MAX_SESSION_SWEEP_INTERVAL_SECS,
            )?,
            cookie_secure,
        })
    }
}

fn required(key: &str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing { var: key.into() })
}

/// Read a duration in whole seconds that must lie in `1..=max`.
fn env_secs(key: &str, default: u64, max: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if (1..=max).contains(&secs) => Ok(secs),
        _ => Err(ConfigError::Invalid { var: key.into(), value: raw }),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
