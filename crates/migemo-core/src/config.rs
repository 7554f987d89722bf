//! Configuration types for migemo-search.
//!
//! [`Config::load`] reads `~/.config/migemo-search/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[engine]
executable = "cmigemo"
dictionary = "/usr/share/cmigemo/utf-8/migemo-dict"
timeout_ms = 2000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/migemo-search/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
}

/// `[engine]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Engine binary. A bare name is resolved through `PATH`.
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
    /// Dictionary passed as `-d <dictionary>`.
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    /// Upper bound on waiting for one response line.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_executable() -> PathBuf { PathBuf::from("cmigemo") }
fn default_dictionary() -> PathBuf { PathBuf::from("/usr/share/cmigemo/utf-8/migemo-dict") }
fn default_timeout_ms() -> u64 { 2000 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            dictionary: default_dictionary(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl EngineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/migemo-search/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file on top of the defaults. The file must exist and
    /// is read as TOML whatever its extension.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("migemo-search")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
