//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::config::Config;
use crate::types::ColorMode;

/// bldiff - compare two text files side by side
#[derive(Parser, Debug)]
#[command(name = "bldiff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Left-hand file
    pub file1: Option<PathBuf>,

    /// Right-hand file
    pub file2: Option<PathBuf>,

    /// Treat the terminal as COLUMNS wide instead of querying it
    #[arg(long, value_name = "COLUMNS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// When to use color
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Expand tabs to this many columns (0 keeps tabs)
    #[arg(long, value_name = "N")]
    pub tab_width: Option<usize>,

    /// Print a count of matching, similar and differing rows
    #[arg(long)]
    pub summary: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Both input paths, or `None` when either is missing.
    pub fn files(&self) -> Option<(&Path, &Path)> {
        Some((self.file1.as_deref()?, self.file2.as_deref()?))
    }

    /// One-line usage message.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Overlay command-line flags onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(tab_width) = self.tab_width {
            config.tab_width = tab_width;
        }
        config.summary |= self.summary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_files() {
        let cli = Cli::try_parse_from(["bldiff", "a.txt", "b.txt"]).unwrap();
        let (a, b) = cli.files().unwrap();
        assert_eq!(a, Path::new("a.txt"));
        assert_eq!(b, Path::new("b.txt"));
    }

    #[test]
    fn missing_files() {
        assert!(Cli::try_parse_from(["bldiff"]).unwrap().files().is_none());
        assert!(Cli::try_parse_from(["bldiff", "a.txt"]).unwrap().files().is_none());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "bldiff", "--color", "always", "--tab-width", "2", "--summary", "a", "b",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.tab_width, 2);
        assert!(config.summary);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["bldiff", "a", "b"]).unwrap();
        let mut config = Config {
            tab_width: 8,
            summary: true,
            ..Config::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.color, ColorMode::Auto);
        assert!(config.summary);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["bldiff", "--width", "0", "a", "b"]).is_err());
        let cli = Cli::try_parse_from(["bldiff", "--width", "1", "a", "b"]).unwrap();
        assert_eq!(cli.width, Some(1));
    }

    #[test]
    fn usage_mentions_files() {
        let usage = Cli::usage();
        assert!(usage.contains("bldiff"));
        assert!(usage.contains("FILE1"));
    }
}
