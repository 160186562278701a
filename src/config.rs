use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources, walked recursively.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into `public_dir`.
    pub static_dir: PathBuf,
    /// Output root. Cleared before every build.
    pub public_dir: PathBuf,
    /// Page template. The built-in template is used when unset.
    pub template: Option<PathBuf>,
    /// Prefix substituted for root-relative `href="/` and `src="/` links.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            template: None,
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "public_dir = \"docs\"\nbase_path = \"/blog/\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.public_dir, PathBuf::from("docs"));
        assert_eq!(config.base_path, "/blog/");
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.template, None);
    }

    #[test]
    fn template_path() {
        let config: Config = toml::from_str("template = \"layout.html\"").unwrap();
        assert_eq!(config.template, Some(PathBuf::from("layout.html")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "public_dir = [").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
