use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// MongoDB database configuration
///
/// Deserializable so it can sit inside a layered application config
/// (`mongodb:` section of the YAML file, `APP__MONGODB__*` overrides).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("localhost", 27017, "mydb")
///     .with_credentials("admin", "secret")
///     .with_auth_db("admin");
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MongoConfig {
    /// Server host name or IP
    pub host: String,

    /// Server port
    pub port: u16,

    /// Database holding the application collections
    pub database: String,

    /// Database to authenticate against (defaults to `database`)
    pub auth_db: Option<String>,

    /// Username; credentials are only sent when username or password is set
    pub username: Option<String>,

    /// Password
    pub password: Option<String>,

    /// Collection used by the repository
    pub collection: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds, also bounds the startup ping
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config for `host:port` using the default database and collection
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Create a config with a specific database name
    pub fn with_database(host: impl Into<String>, port: u16, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(host, port)
        }
    }

    /// Set username and password
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the authentication database
    pub fn with_auth_db(mut self, auth_db: impl Into<String>) -> Self {
        self.auth_db = Some(auth_db.into());
        self
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Connection string without credentials, safe to log
    pub fn url(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the collection name
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Username and password, or `None` when both are absent or empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().unwrap_or_default();
        let password = self.password.as_deref().unwrap_or_default();

        if username.is_empty() && password.is_empty() {
            None
        } else {
            Some((username, password))
        }
    }

    /// Authentication source, falling back to the target database
    pub fn auth_source(&self) -> &str {
        match self.auth_db.as_deref() {
            Some(auth_db) if !auth_db.is_empty() => auth_db,
            _ => &self.database,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "default".to_string(),
            auth_db: None,
            username: None,
            password: None,
            collection: "users".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("auth_db", &self.auth_db)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("collection", &self.collection)
            .field("app_name", &self.app_name)
            .field("max_pool_size", &self.max_pool_size)
            .field("min_pool_size", &self.min_pool_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field(
                "server_selection_timeout_secs",
                &self.server_selection_timeout_secs,
            )
            .finish()
    }
}
