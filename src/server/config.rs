use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Marks the session cookie `Secure`, enable when served over HTTPS.
    pub session_secure: bool,

    /// Credentials of the administrator created at startup when none exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,

    /// Fills an empty forum with demo accounts and posts at startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_secure: parse_bool("SESSION_SECURE", std::env::var("SESSION_SECURE").ok())?,
            admin_email: non_empty(std::env::var("ADMIN_EMAIL").ok()),
            admin_password: non_empty(std::env::var("ADMIN_PASSWORD").ok()),
            seed_demo_data: parse_bool("SEED_DEMO_DATA", std::env::var("SEED_DEMO_DATA").ok())?,
        })
    }
}

/// Parses an optional boolean flag, accepting `true`/`false`/`1`/`0` and defaulting to false.
fn parse_bool(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: v.to_string(),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
