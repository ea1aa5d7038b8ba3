use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:9090";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP listener binds to.
    pub server_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `SERVER_ADDR` unparsable
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_addr = var("SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SERVER_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            server_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn applies_default_server_addr() {
        let config = Config::from_vars(vars(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.server_addr.port(), 9090);
    }

    #[test]
    fn requires_database_url() {
        let result = Config::from_vars(vars(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_unparsable_server_addr() {
        let result = Config::from_vars(vars(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_ADDR", "not an address"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) if name == "SERVER_ADDR"
        ));
    }
}
