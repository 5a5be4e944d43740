//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable overriding the notes directory.
pub const NOTES_PATH_ENV: &str = "NOTES_PATH";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Editor command for editing notes
    pub editor: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes")
            .join("config.toml")
    }

    /// Resolve the notes directory.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. `NOTES_PATH` environment variable, if non-empty
    /// 3. Config file `dir` setting
    /// 4. Platform default (see [`default_notes_dir`])
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        let env_dir = std::env::var_os(NOTES_PATH_ENV).map(PathBuf::from);
        self.resolve_notes_dir(cli_dir, env_dir)
    }

    fn resolve_notes_dir(&self, cli_dir: Option<&PathBuf>, env_dir: Option<PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| env_dir.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| self.dir.clone())
            .unwrap_or_else(default_notes_dir)
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}

/// Returns the platform-conventional notes directory.
///
/// `~/Documents/Notes` on macOS and Windows, `~/Notes` elsewhere, and
/// `./notes` when the home directory is unknown.
pub fn default_notes_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) if cfg!(any(target_os = "macos", target_os = "windows")) => {
            home.join("Documents").join("Notes")
        }
        Some(home) => home.join("Notes"),
        None => PathBuf::from("./notes"),
    }
}
