use std::net::{IpAddr, SocketAddr};

use regex::Regex;

use crate::error::AppError;

const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [r"^http://localhost:\d+$", r"^http://127\.0\.0\.1:\d+$"];

/// Service configuration loaded from environment variables.
///
/// Oracle settings live in `seo_common::textrazor::TextRazorConfig`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind, e.g. "0.0.0.0"
    pub host: IpAddr,
    pub port: u16,
    /// Reported by the info endpoints, e.g. "production"
    pub environment: String,
    /// Anchored regex patterns matched against the request `Origin` header.
    pub allowed_origins: Vec<Regex>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address (default `0.0.0.0`)
    /// - `PORT`: listen port (default `3001`)
    /// - `APP_ENV`: environment name (default `development`)
    /// - `ALLOWED_ORIGINS`: comma-separated CORS origin patterns
    ///   (default: any localhost / 127.0.0.1 port)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| AppError::Config(format!("invalid HOST {raw:?}: {e}")))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => 3001,
        };

        let environment = lookup("APP_ENV")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "development".to_string());

        let patterns: Vec<String> = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|p| p.to_string()).collect(),
        };

        let allowed_origins = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    AppError::Config(format!("invalid ALLOWED_ORIGINS pattern {p:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            environment,
            allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|re| re.is_match(origin))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.environment, "development");
        assert!(config.origin_allowed("http://localhost:3000"));
        assert!(config.origin_allowed("http://127.0.0.1:5173"));
        assert!(!config.origin_allowed("https://evil.example.com"));
        assert!(!config.origin_allowed("http://localhost:3000.evil.com"));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("APP_ENV", "production"),
            ("ALLOWED_ORIGINS", r"^https://seo-analyzer-[a-z0-9-]+\.vercel\.app$, "),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.environment, "production");
        assert_eq!(config.allowed_origins.len(), 1);
        assert!(config.origin_allowed("https://seo-analyzer-abc123.vercel.app"));
        assert!(!config.origin_allowed("http://localhost:3000"));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(load(&[("PORT", "http")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("HOST", "nowhere")]), Err(AppError::Config(_))));
        assert!(matches!(
            load(&[("ALLOWED_ORIGINS", "^(unclosed$")]),
            Err(AppError::Config(_))
        ));
    }
}
