//! Load [`Settings`] from environment variables (optionally seeded from a `.env` file).

use crate::config::types::*;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

impl Settings {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build settings from an explicit variable map; missing keys fall back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|s| s.trim()).filter(|s| !s.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or(DEFAULT_DATABASE_URL).to_string();
        let bind_addr = parse_or(get("BIND_ADDR"), "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let body_limit_bytes = parse_or(
            get("BODY_LIMIT_BYTES"),
            "BODY_LIMIT_BYTES",
            &DEFAULT_BODY_LIMIT_BYTES.to_string(),
        )?;
        let log_filter = get("LOG_FILTER").unwrap_or(DEFAULT_LOG_FILTER).to_string();

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
            log_filter,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, key: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = raw.unwrap_or(default);
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = Settings::from_vars(&HashMap::new()).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr.port(), 3000);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let s = Settings::from_vars(&vars(&[
            ("DATABASE_URL", "postgres://db:5432/records"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(s.database_url, "postgres://db:5432/records");
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(s.max_connections, 12);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = Settings::from_vars(&vars(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));
        let err = Settings::from_vars(&vars(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = Settings::from_vars(&vars(&[("BIND_ADDR", "  ")])).unwrap();
        assert_eq!(s.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }
}
