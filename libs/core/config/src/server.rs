use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the Unix domain socket created next to the executable.
pub const SOCKET_FILE_NAME: &str = "app.sock";

/// How the HTTP server accepts connections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenType {
    /// TCP socket bound to `bind_ip:port`
    #[default]
    Port,
    /// Unix domain socket at `<executable dir>/app.sock`
    Sock,
}

/// Server configuration for HTTP APIs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(rename = "type")]
    pub listen_type: ListenType,
    pub bind_ip: String,
    pub port: u16,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(bind_ip: impl Into<String>, port: u16) -> Self {
        Self {
            bind_ip: bind_ip.into(),
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_ip, self.port)
    }

    /// Deadline applied to a single request's store operations.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs.max(self.write_timeout_secs))
    }

    /// Socket path for [`ListenType::Sock`], placed in the directory of `executable`.
    pub fn socket_path(executable: &Path) -> PathBuf {
        executable
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(SOCKET_FILE_NAME)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_type: ListenType::Port,
            bind_ip: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            read_timeout_secs: 10,
            write_timeout_secs: 10,
        }
    }
}
