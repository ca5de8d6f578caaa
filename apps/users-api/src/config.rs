use core_config::{ConfigError, config_path, load_layered, server::ServerConfig};
use serde::{Deserialize, Serialize};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
///
/// Layered as defaults → `config.yml` (or `$CONFIG_PATH`) → `APP__*` env vars,
/// e.g. `APP__MONGODB__HOST=db APP__LISTEN__TYPE=sock`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub is_debug: bool,
    pub listen: ServerConfig,
    pub mongodb: MongoConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        load_layered(config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::server::ListenType;
    use figment::Jail;

    #[test]
    fn test_load_from_yaml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yml",
                r#"
is_debug: true
listen:
  type: sock
  port: 9000
mongodb:
  host: mongo
  database: service
  collection: accounts
"#,
            )?;
            jail.set_env("APP__MONGODB__HOST", "override");
            jail.set_env("APP__LISTEN__PORT", "9100");

            let config = Config::load().map_err(|e| e.to_string())?;

            assert!(config.is_debug);
            assert_eq!(config.listen.listen_type, ListenType::Sock);
            assert_eq!(config.listen.port, 9100);
            assert_eq!(config.mongodb.host, "override");
            assert_eq!(config.mongodb.database(), "service");
            assert_eq!(config.mongodb.collection(), "accounts");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("CONFIG_PATH", "absent.yml");

            let config = Config::load().map_err(|e| e.to_string())?;

            assert_eq!(config, Config::default());
            assert_eq!(config.listen.address(), "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn test_shipped_config_parses() {
        let yaml = include_str!("../config.yml");
        Jail::expect_with(|jail| {
            jail.create_file("config.yml", yaml)?;

            let config = Config::load().map_err(|e| e.to_string())?;

            assert_eq!(config.listen.listen_type, ListenType::Port);
            assert_eq!(config.mongodb.collection(), "users");
            assert!(config.mongodb.credentials().is_none());
            Ok(())
        });
    }
}
