//! Configuration file.
//!
//! Optional TOML file at `<config dir>/bldiff/config.toml`. Every field has a
//! default, so an absent file or a partial one is fine. Command-line flags
//! override whatever the file says.
//!
//! ```toml
//! width_ratio = 0.45
//! tab_width = 4
//! color = "auto"      # auto | always | never
//! summary = false
//!
//! [colors]
//! match = "green"
//! similar = "yellow"
//! differ = "red"
//! placeholder = "red"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::DEFAULT_WIDTH_RATIO;
use crate::theme::ColorNames;
use crate::types::ColorMode;

/// Default tab stop distance.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Share of the terminal width given to each column, in (0, 1].
    pub width_ratio: f64,
    /// Tab stop distance; 0 leaves tabs unexpanded.
    pub tab_width: usize,
    pub color: ColorMode,
    /// Print a verdict tally after the comparison.
    pub summary: bool,
    pub colors: ColorNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width_ratio: DEFAULT_WIDTH_RATIO,
            tab_width: DEFAULT_TAB_WIDTH,
            color: ColorMode::Auto,
            summary: false,
            colors: ColorNames::default(),
        }
    }
}

impl Config {
    /// `<config dir>/bldiff/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bldiff").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An `explicit` path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::info!("loading config from {}", path.display());
        let text = fs::read_to_string(&path).map_err(|err| config_error(&path, &err))?;
        Self::from_toml(&text, &path)
    }

    /// Parse and validate config text. `path` is only used in errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if !(self.width_ratio > 0.0 && self.width_ratio <= 1.0) {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!("width_ratio must be in (0, 1], got {}", self.width_ratio),
            });
        }
        Ok(())
    }
}

fn config_error(path: &Path, err: &io::Error) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config> {
        Config::from_toml(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file() {
        let config = parse("tab_width = 8\ncolor = \"never\"\n[colors]\nmatch = \"Blue\"\n").unwrap();
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.colors.matched, "Blue");
        assert_eq!(config.colors.differ, "red");
        assert_eq!(config.width_ratio, DEFAULT_WIDTH_RATIO);
    }

    #[test]
    fn rejects_bad_ratio() {
        let err = parse("width_ratio = 1.5").unwrap_err();
        assert!(err.to_string().contains("width_ratio"));
        assert!(parse("width_ratio = 0.0").is_err());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_syntax() {
        assert!(parse("colour = \"always\"").is_err());
        assert!(parse("tab_width = ").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "summary = true\n").unwrap();
        assert!(Config::load(Some(&path)).unwrap().summary);
    }
}
