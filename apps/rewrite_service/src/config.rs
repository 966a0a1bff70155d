use std::env;

use crate::error::ConfigError;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const APP_ENVIRONMENT_ENV: &str = "APP_ENVIRONMENT";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    /// Anything other than `dev` (including an unset variable's default) is
    /// treated as a deployed environment.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "dev" {
            Environment::Dev
        } else {
            Environment::Prod
        }
    }

    pub fn current() -> Self {
        Self::parse(&env::var(APP_ENVIRONMENT_ENV).unwrap_or("dev".to_string()))
    }
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub environment: Environment,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup(GEMINI_API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(GEMINI_API_KEY_ENV))?;

        let environment = Environment::parse(
            &lookup(APP_ENVIRONMENT_ENV).unwrap_or("dev".to_string()),
        );

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a port number, got {:?}", PORT_ENV, raw))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            environment,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_key_with_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc123")])).unwrap();

        assert_eq!(config.gemini_api_key, "abc123");
        assert_eq!(config.environment, Environment::Dev);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        let missing = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(missing, Err(ConfigError::Missing("GEMINI_API_KEY"))));

        let blank = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")]));
        assert!(matches!(blank, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn port_and_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc123"),
            ("APP_ENVIRONMENT", "production"),
            ("PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Prod);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc123"),
            ("PORT", "eighty"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
