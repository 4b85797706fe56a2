use std::str::FromStr;

use appforge_core::labels::Locale;

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration.
///
/// Unset variables take local development defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated `CORS_ORIGINS`; blank entries are skipped.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Upper bound on closing the pool after the server stops.
    pub shutdown_timeout_secs: u64,
    /// Locale of the labels rendered apps fall back to when their content
    /// leaves a field empty.
    pub default_locale: Locale,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `DEFAULT_LOCALE`        | `en` (`pt`, `pt-BR`)    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "PORT", "port number", 3000)?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                "number of seconds",
                30,
            )?,
            shutdown_timeout_secs: parse_var(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                "number of seconds",
                30,
            )?,
            default_locale: lookup("DEFAULT_LOCALE")
                .map(|code| Locale::from_code(&code))
                .unwrap_or_default(),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, ["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.app, ,https://b.app"),
            ("DEFAULT_LOCALE", "pt-BR"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, ["https://a.app", "https://b.app"]);
        assert_eq!(config.default_locale, Locale::Pt);
    }

    #[test]
    fn malformed_number_names_the_variable() {
        let err = load(&[("REQUEST_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(err.var, "REQUEST_TIMEOUT_SECS");
        assert_eq!(
            err.to_string(),
            "REQUEST_TIMEOUT_SECS must be a valid number of seconds, got \"soon\""
        );
    }
}
