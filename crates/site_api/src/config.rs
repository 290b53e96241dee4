//! Typed configuration for the proxy service.
//!
//! Defaults are compiled in. An optional TOML file (path in `SITE_API_CONFIG`) may override any
//! subset of keys, and individual environment variables override the file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "SITE_API_CONFIG";
/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "SITE_API_BIND";
/// Environment variable overriding the blog list upstream.
pub const BLOGS_URL_ENV: &str = "SITE_API_BLOGS_URL";
/// Environment variable overriding the project list upstream.
pub const PROJECTS_URL_ENV: &str = "SITE_API_PROJECTS_URL";
/// Environment variable overriding the chat RPC upstream.
pub const CHAT_URL_ENV: &str = "SITE_API_CHAT_URL";
/// Environment variable naming a directory of built site assets to serve.
pub const STATIC_DIR_ENV: &str = "SITE_API_STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
const DEFAULT_BLOGS_URL: &str = "https://blog-api.portfolio.example/posts";
const DEFAULT_PROJECTS_URL: &str = "https://projects-api.portfolio.example/projects";
const DEFAULT_CHAT_RPC_URL: &str = "https://assistant.portfolio.example/rpc/query_enhanced";

#[derive(Debug, Error)]
/// Configuration loading failures.
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`ApiConfig`].
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Upstream endpoints the proxy routes forward to.
pub struct UpstreamConfig {
    /// Blog list endpoint (`GET`).
    pub blogs_url: String,
    /// Project list endpoint (`GET`).
    pub projects_url: String,
    /// Assistant `query_enhanced` RPC endpoint (`POST`).
    pub chat_rpc_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            blogs_url: DEFAULT_BLOGS_URL.to_string(),
            projects_url: DEFAULT_PROJECTS_URL.to_string(),
            chat_rpc_url: DEFAULT_CHAT_RPC_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Top-level service configuration.
pub struct ApiConfig {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Optional directory of built site assets served as a fallback.
    pub static_dir: Option<PathBuf>,
    /// Upstream endpoints.
    pub upstream: UpstreamConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: None,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` for environment values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match lookup(CONFIG_PATH_ENV).filter(|path| !path.trim().is_empty()) {
            Some(path) => Self::load_file(Path::new(&path))?,
            None => Self::default(),
        };
        Ok(base.with_overrides(lookup))
    }

    /// Reads and parses a TOML config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies non-empty environment overrides on top of `self`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(bind) = value(BIND_ENV) {
            self.bind_addr = bind;
        }
        if let Some(dir) = value(STATIC_DIR_ENV) {
            self.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(url) = value(BLOGS_URL_ENV) {
            self.upstream.blogs_url = url;
        }
        if let Some(url) = value(PROJECTS_URL_ENV) {
            self.upstream.projects_url = url;
        }
        if let Some(url) = value(CHAT_URL_ENV) {
            self.upstream.chat_rpc_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        time::{SystemTime, UNIX_EPOCH},
    };

    use pretty_assertions::assert_eq;

    use super::*;

    fn unique_test_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "site-api-config-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let config = ApiConfig::from_lookup(|_| None).expect("default config");
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.upstream.blogs_url, DEFAULT_BLOGS_URL);
    }

    #[test]
    fn file_values_merge_with_defaults_and_env_wins() {
        let dir = unique_test_dir();
        let path = dir.join("site_api.toml");
        fs::write(
            &path,
            "bind_addr = \"0.0.0.0:9000\"\n[upstream]\nblogs_url = \"http://file/blogs\"\n",
        )
        .expect("write config");

        let env: HashMap<&str, String> = [
            (CONFIG_PATH_ENV, path.display().to_string()),
            (BLOGS_URL_ENV, "http://env/blogs".to_string()),
            (PROJECTS_URL_ENV, "  ".to_string()),
        ]
        .into_iter()
        .collect();
        let config =
            ApiConfig::from_lookup(|key| env.get(key).cloned()).expect("load merged config");

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.upstream.blogs_url, "http://env/blogs");
        assert_eq!(config.upstream.projects_url, DEFAULT_PROJECTS_URL);
        assert_eq!(config.upstream.chat_rpc_url, DEFAULT_CHAT_RPC_URL);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ApiConfig::load_file(Path::new("/definitely/missing/site_api.toml"))
            .expect_err("missing config should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("site_api.toml"));
    }
}
