use std::env;

const DEFAULT_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Called once at startup; the resolved values are never mutated
    /// afterward. Every value has a default, so resolution cannot fail.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            api_base_url: resolve_base_url(
                env::var("WAREHOUSE_API_URL").ok(),
                &env::var("WAREHOUSE_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            ),
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        }
    }
}

/// Resolve the effective API base address.
///
/// An explicit address wins; otherwise the process origin is suffixed with
/// `/api`, mirroring a same-origin deployment.
pub fn resolve_base_url(explicit: Option<String>, origin: &str) -> String {
    match explicit {
        Some(url) if !url.is_empty() => url,
        _ => format!("{}/api", origin.trim_end_matches('/')),
    }
}
