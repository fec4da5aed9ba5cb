use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ServerResult;

/// Runtime settings for the devkit HTTP server.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Largest accepted request body; larger bodies get `413`.
    pub max_body_bytes: usize,
    /// Attach a permissive CORS layer so browser front ends can call the tools.
    pub enable_cors: bool,
    /// Requests running longer than this get `408`.
    pub request_timeout_secs: u64,
    /// Largest LCS table a diff request may allocate, in cells.
    pub max_table_cells: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8787)),
            max_body_bytes: 1024 * 1024,
            enable_cors: true,
            request_timeout_secs: 30,
            max_table_cells: 10_000_000,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(input: &str) -> ServerResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
