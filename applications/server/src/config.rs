/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_library")]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Directory served under `/static`; holds `songs/` and `thumbnails/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl LibrarySettings {
    pub fn songs_dir(&self) -> PathBuf {
        self.static_dir.join("songs")
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from `path` (if present) and environment
    ///
    /// Nested keys are joined with a double underscore, so
    /// `JUKEBOX_SERVER__PORT` sets `server.port` and
    /// `JUKEBOX_LIBRARY__STATIC_DIR` sets `library.static_dir`.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load from `path` with `env` standing in for the process environment
    ///
    /// `None` reads the real environment.
    pub fn load_with_env(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with JUKEBOX_)
        settings = settings.add_source(
            config::Environment::with_prefix("JUKEBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid host address {:?} (set JUKEBOX_SERVER__HOST)",
                self.server.host
            )));
        }

        let songs_dir = self.library.songs_dir();
        if !songs_dir.is_dir() {
            return Err(ServerError::Config(format!(
                "Songs directory not found at {:?}",
                songs_dir
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_library() -> LibrarySettings {
    LibrarySettings {
        static_dir: default_static_dir(),
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            library: default_library(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn default_listen_address() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.library.songs_dir(), PathBuf::from("static").join("songs"));
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jukebox.toml");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = ServerConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jukebox.toml");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = ServerConfig::load_with_env(
            &path,
            env(&[
                ("JUKEBOX_LIBRARY__STATIC_DIR", "/srv/music"),
                ("JUKEBOX_SERVER__PORT", "7001"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 7001);
        assert_eq!(config.library.static_dir, PathBuf::from("/srv/music"));
        assert_eq!(config.library.songs_dir(), PathBuf::from("/srv/music/songs"));
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::load_with_env(
            &dir.path().join("missing.toml"),
            env(&[("JUKEBOX_CONFIG", "elsewhere.toml"), ("PATH", "/usr/bin")]),
        )
        .unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.library.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn validate_requires_songs_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = ServerConfig::default();
        config.library.static_dir = dir.path().to_path_buf();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));

        std::fs::create_dir(dir.path().join("songs")).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_host() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("songs")).unwrap();

        let mut config = ServerConfig::default();
        config.library.static_dir = dir.path().to_path_buf();
        config.server.host = "not a host".to_string();
        assert!(config.validate().is_err());
    }
}
