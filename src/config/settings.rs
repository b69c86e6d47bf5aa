//! Connection settings for a WHM/cPanel server.
//!
//! Settings are persisted as JSON, by default to
//! `~/.config/cpanel-mail/settings.json` (or the platform equivalent).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::providers::{CpanelError, CpanelResult};

const HTTPS_PORT: u16 = 2087;
const HTTP_PORT: u16 = 2086;

/// Top-level client settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// WHM server connection.
    pub server: ServerSettings,
    /// cPanel account the email calls act on.
    pub api_username: String,
}

impl Settings {
    pub fn new(server: ServerSettings, api_username: impl Into<String>) -> Self {
        Self {
            server,
            api_username: api_username.into(),
        }
    }

    /// Platform config location for the settings file.
    pub fn default_path() -> CpanelResult<PathBuf> {
        directories::ProjectDirs::from("", "", "cpanel-mail")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| CpanelError::Config("no home directory available".to_string()))
    }

    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> CpanelResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CpanelError::Config(format!("read {}: {}", path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| CpanelError::Config(format!("parse {}: {}", path.display(), e)))
    }

    /// Writes settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> CpanelResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CpanelError::Config(format!("create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CpanelError::Config(format!("serialize settings: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| CpanelError::Config(format!("write {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }
}

/// WHM server connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server host name or address.
    pub host: String,
    /// WHM user that owns the access hash.
    pub user: String,
    /// WHM remote access hash.
    pub hash: String,
    /// Whether to connect over https.
    pub ssl: bool,
    /// Explicit port. Defaults to 2087 with ssl, 2086 without.
    pub port: Option<u16>,
    /// Whether to reject invalid TLS certificates.
    pub verify_ssl: bool,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// cPanel API version used unless a call pins its own.
    pub api_version: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            hash: String::new(),
            ssl: true,
            port: None,
            verify_ssl: true,
            timeout_seconds: 30,
            api_version: 2,
        }
    }
}

impl ServerSettings {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Port to connect to, falling back to the WHM default for the scheme.
    pub fn port(&self) -> u16 {
        self.port
            .unwrap_or(if self.ssl { HTTPS_PORT } else { HTTP_PORT })
    }

    /// Root URL of the WHM server, e.g. `https://host:2087/`.
    pub fn base_url(&self) -> CpanelResult<Url> {
        let scheme = if self.ssl { "https" } else { "http" };
        Url::parse(&format!("{}://{}:{}/", scheme, self.host, self.port()))
            .map_err(|e| CpanelError::Config(format!("invalid host {:?}: {}", self.host, e)))
    }
}
