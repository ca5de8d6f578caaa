pub mod server;
pub mod tracing;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

/// Prefix for environment overrides, e.g. `APP__LISTEN__PORT=9000` maps to `listen.port`.
pub const ENV_PREFIX: &str = "APP__";

/// Environment variable naming the YAML file to load.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// YAML file used when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Application environment (dev = local/kind, prod = full k8s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Name and version of the running binary, reported by `/health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Helper to load environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Path of the YAML configuration file (`CONFIG_PATH`, falling back to `config.yml`).
pub fn config_path() -> String {
    env_or_default(CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH)
}

/// Load configuration in layers: `T::default()` → YAML file → `APP__*` environment variables.
///
/// A missing YAML file is not an error; the defaults and environment still apply.
pub fn load_layered<T, P>(path: P) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
    P: AsRef<Path>,
{
    Figment::new()
        .merge(Serialized::defaults(T::default()))
        .merge(Yaml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::Load(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        nested: Nested,
    }

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Nested {
        port: u16,
        enabled: bool,
    }

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("MISSING_VAR", || {
            assert_eq!(env_or_default("MISSING_VAR", "default_value"), "default_value");
        });
    }

    #[test]
    fn test_config_path_default() {
        temp_env::with_var_unset(CONFIG_PATH_VAR, || {
            assert_eq!(config_path(), "config.yml");
        });
    }

    #[test]
    fn test_app_info_macro() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }

    #[test]
    fn test_load_layered_missing_file_uses_defaults() {
        figment::Jail::expect_with(|_jail| {
            let sample: Sample = load_layered("does-not-exist.yml").unwrap();
            assert_eq!(sample, Sample::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_layered_yaml_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yml",
                r#"
name: from-yaml
nested:
  port: 8080
  enabled: true
"#,
            )?;
            jail.set_env("APP__NESTED__PORT", "9090");

            let sample: Sample = load_layered("config.yml").unwrap();
            assert_eq!(sample.name, "from-yaml");
            assert_eq!(sample.nested.port, 9090);
            assert!(sample.nested.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_load_layered_invalid_value() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yml", "nested:\n  port: not-a-port\n")?;
            let result: Result<Sample, _> = load_layered("config.yml");
            assert!(matches!(result, Err(ConfigError::Load(_))));
            Ok(())
        });
    }
}
