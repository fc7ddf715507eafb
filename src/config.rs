use std::env::{self, VarError};

use crate::songs::errors::{Error, Result};

/// Pretty-print switch (`true/false/1/0/yes/no/on/off`).
pub const PRETTY_VAR: &str = "QUIZ_SONGS_PRETTY";
/// Title of the API document.
pub const API_TITLE_VAR: &str = "QUIZ_SONGS_API_TITLE";
/// Version of the API document.
pub const API_VERSION_VAR: &str = "QUIZ_SONGS_API_VERSION";

const DEFAULT_API_TITLE: &str = "Quiz songs API";

/// Settings shared by the JSON output and the API document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// `info.title` of the API document.
    pub api_title: String,
    /// `info.version` of the API document.
    pub api_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pretty: true,
            api_title: DEFAULT_API_TITLE.to_string(),
            api_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Builds a [`Config`], filling anything not set explicitly from the
/// environment and then from defaults.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    pretty: Option<bool>,
    api_title: Option<String>,
    api_version: Option<String>,
}

impl ConfigBuilder {
    /// Builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the pretty-print switch.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Override the API title.
    #[must_use]
    pub fn api_title(mut self, title: impl Into<String>) -> Self {
        self.api_title = Some(title.into());
        self
    }

    /// Override the API version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Build the config, reading unset values from the process environment.
    pub fn build(self) -> Result<Config> {
        self.build_with(read_var)
    }

    // `lookup` returns `Ok(None)` for unset variables
    fn build_with<F>(self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let defaults = Config::default();
        let pretty = match self.pretty {
            Some(p) => p,
            None => match lookup(PRETTY_VAR)? {
                Some(raw) => parse_bool(PRETTY_VAR, &raw)?,
                None => defaults.pretty,
            },
        };
        let api_title = match self.api_title {
            Some(t) => t,
            None => lookup(API_TITLE_VAR)?.unwrap_or(defaults.api_title),
        };
        let api_version = match self.api_version {
            Some(v) => v,
            None => lookup(API_VERSION_VAR)?.unwrap_or(defaults.api_version),
        };
        Ok(Config {
            pretty,
            api_title,
            api_version,
        })
    }
}

// Unset variables are not an error, non-unicode ones are
fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::ConfigurationError(format!(
            "{name} must be a boolean, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<Option<String>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| Ok(vars.get(name).cloned())
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let config = ConfigBuilder::new().build_with(env_of(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_fills_unset_values() {
        let env = env_of(&[
            (PRETTY_VAR, "no"),
            (API_TITLE_VAR, "Canciones"),
            (API_VERSION_VAR, "3.1.0"),
        ]);
        let config = ConfigBuilder::new().build_with(env).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.api_title, "Canciones");
        assert_eq!(config.api_version, "3.1.0");
    }

    #[test]
    fn explicit_value_beats_environment() {
        let env = env_of(&[(PRETTY_VAR, "garbage"), (API_TITLE_VAR, "Env")]);
        let config = ConfigBuilder::new()
            .pretty(true)
            .api_title("Explicit")
            .build_with(env)
            .unwrap();
        assert!(config.pretty);
        assert_eq!(config.api_title, "Explicit");
    }

    #[test]
    fn bad_pretty_variable_is_a_configuration_error() {
        let err = ConfigBuilder::new()
            .build_with(env_of(&[(PRETTY_VAR, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(msg) if msg.contains(PRETTY_VAR)));
    }

    #[test]
    fn lookup_failure_is_propagated() {
        let err = ConfigBuilder::new()
            .build_with(|_: &str| Err(Error::ConfigurationError("not unicode".into())))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn explicit_values_win() {
        let config = ConfigBuilder::new()
            .pretty(false)
            .api_title("Songs")
            .api_version("2.0.0")
            .build()
            .unwrap();
        assert_eq!(
            config,
            Config {
                pretty: false,
                api_title: "Songs".into(),
                api_version: "2.0.0".into(),
            }
        );
    }

    #[test]
    fn parses_common_booleans() {
        for raw in ["1", "true", "YES", " on "] {
            assert!(parse_bool(PRETTY_VAR, raw).unwrap());
        }
        for raw in ["0", "false", "No", "off"] {
            assert!(!parse_bool(PRETTY_VAR, raw).unwrap());
        }
    }

    #[test]
    fn rejects_garbage_boolean() {
        let err = parse_bool(PRETTY_VAR, "maybe").unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(msg) if msg.contains(PRETTY_VAR)));
    }

    #[test]
    fn default_is_pretty_with_crate_version() {
        let config = Config::default();
        assert!(config.pretty);
        assert_eq!(config.api_version, env!("CARGO_PKG_VERSION"));
    }
}
