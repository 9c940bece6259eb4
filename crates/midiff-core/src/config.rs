//! Configuration types for midiff.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! `~/.config/midiff/config.toml` (optional), an explicit `--config` file
//! (required when given) and `MIDIFF__SECTION__KEY` environment variables.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[compare]
metadata_prefix = "Meta"
track_separator = "------"

[decoder]
program = "python3"
args    = ["trusted_parser.py", "{input}"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub decoder: DecoderConfig,
}

/// `[compare]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareConfig {
    /// Reference lines starting with this prefix are never compared.
    #[serde(default = "default_metadata_prefix")]
    pub metadata_prefix: String,
    /// Line the trusted decoder prints between tracks.
    #[serde(default = "default_track_separator")]
    pub track_separator: String,
}

fn default_metadata_prefix() -> String { crate::comparator::DEFAULT_METADATA_PREFIX.to_string() }
fn default_track_separator() -> String { crate::summary::DEFAULT_TRACK_SEPARATOR.to_string() }

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            metadata_prefix: default_metadata_prefix(),
            track_separator: default_track_separator(),
        }
    }
}

/// `[decoder]` section: how to run the trusted decoder.
///
/// `{input}` in `args` is replaced with the path of the file being decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_program() -> String { "python3".to_string() }
fn default_args() -> Vec<String> { vec!["trusted_parser.py".to_string(), "{input}".to_string()] }

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `explicit` must exist if given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                });
            }
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("MIDIFF")
                    .prefix_separator("__")
                    .separator("__"),
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
        .join("midiff")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
