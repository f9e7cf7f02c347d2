//! Configuration loading for RestReveal.
//!
//! Reads `~/.restreveal/config.toml`. Every field is optional; a missing file
//! means defaults. Environment variables override the file:
//!
//! - `RESTREVEAL_EDITION`: `standard` or `quick`
//! - `RESTREVEAL_REDUCED_MOTION`: `1`/`true` to disable animation
//!
//! ```toml
//! [app]
//! edition = "quick"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! transition_ms = 300
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use restreveal_types::Edition;
use restreveal_types::ui::UiOptions;

const DEFAULT_TRANSITION_MS: u64 = 300;

/// Upper bound on the cosmetic delay; anything longer feels like a hang.
const MAX_TRANSITION_MS: u64 = 2_000;

const fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

#[derive(Debug, Default, Deserialize)]
pub struct RestRevealConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Question bank size.
    #[serde(default)]
    pub edition: Edition,
    /// Use ASCII-only glyphs for radios, badges, and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable transition animations; navigation applies instantly.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Cosmetic delay before a navigation takes effect, in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl RestRevealConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".restreveal").join("config.toml"))
}

/// Effective settings after applying environment overrides to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub edition: Edition,
    pub ui: UiOptions,
    pub transition: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve_with(None, |_| None)
    }
}

impl Settings {
    #[must_use]
    pub fn resolve(config: Option<&RestRevealConfig>) -> Self {
        Self::resolve_with(config, |key| env::var(key).ok())
    }

    /// `lookup` stands in for the process environment.
    pub fn resolve_with(
        config: Option<&RestRevealConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let defaults = AppConfig::default();
        let app = config.and_then(|cfg| cfg.app.as_ref()).unwrap_or(&defaults);

        let edition = match lookup("RESTREVEAL_EDITION") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("Ignoring RESTREVEAL_EDITION: {err}");
                app.edition
            }),
            None => app.edition,
        };

        let reduced_motion = lookup("RESTREVEAL_REDUCED_MOTION")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(app.reduced_motion);

        let transition_ms = if app.transition_ms > MAX_TRANSITION_MS {
            tracing::warn!(
                requested = app.transition_ms,
                max = MAX_TRANSITION_MS,
                "transition_ms clamped"
            );
            MAX_TRANSITION_MS
        } else {
            app.transition_ms
        };

        Self {
            edition,
            ui: UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion,
            },
            transition: Duration::from_millis(transition_ms),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
