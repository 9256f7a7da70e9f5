use std::net::{Ipv4Addr, SocketAddr};

use crate::error::StartupError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;
// Room for the non-logo fields of a record that embeds an uploaded data URL
const RECORD_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` keeps the server up but every league request fails with a 500.
    pub database_url: Option<String>,
    pub host: Ipv4Addr,
    pub port: u16,
    pub upload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Config {
            database_url,
            host: parse_var(&lookup, "HOST", Ipv4Addr::UNSPECIFIED)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            upload_limit_bytes: parse_var(&lookup, "UPLOAD_LIMIT_BYTES", DEFAULT_UPLOAD_LIMIT)?,
        })
    }

    /// Body limit for league writes. A data URL returned by `/upload` is no
    /// larger than the upload body that produced it, so any accepted logo fits.
    pub fn record_body_limit(&self) -> usize {
        self.upload_limit_bytes.saturating_add(RECORD_OVERHEAD)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, StartupError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| StartupError::InvalidEnv { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, StartupError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.upload_limit_bytes, 10 * 1024 * 1024);
        assert!(config.record_body_limit() > config.upload_limit_bytes);
    }

    #[test]
    fn reads_upload_limit() {
        let config = config_from(&[("UPLOAD_LIMIT_BYTES", "4096")]).unwrap();
        assert_eq!(config.upload_limit_bytes, 4096);
        assert_eq!(config.record_body_limit(), 4096 + 64 * 1024);
    }

    #[test]
    fn blank_database_url_counts_as_missing() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn reads_explicit_values() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite://league.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("sqlite://league.db"));
        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, StartupError::InvalidEnv { name: "PORT", .. }));
    }
}
