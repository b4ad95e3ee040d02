//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{fonts, output};
use crate::error::{Error, Result};
use crate::layout::{LayoutConfig, LayoutMode};
use crate::pptx::TextStyle;
use crate::services::slides::SlideAspect;

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the corpus dataset, if one was configured or found
    pub corpus_path: Option<PathBuf>,
    /// Directory generated decks are written to
    pub output_dir: PathBuf,
    /// Title font size in points
    pub title_pt: f64,
    /// Body font size in points
    pub body_pt: f64,
    /// Line spacing multiplier
    pub line_spacing: f64,
    /// One verse per slide instead of packing
    pub one_per_slide: bool,
    /// 16:9 slides instead of 4:3
    pub wide: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            output_dir: PathBuf::from("."),
            title_pt: fonts::DEFAULT_TITLE_PT,
            body_pt: fonts::DEFAULT_BODY_PT,
            line_spacing: fonts::DEFAULT_LINE_SPACING,
            one_per_slide: true,
            wide: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::from_vars(|key| env::var(key).ok())?;
        if config.corpus_path.is_none() {
            config.corpus_path = detect_corpus_path();
        }
        Ok(config)
    }

    /// Build configuration from a variable lookup, without touching the filesystem.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = var("VERSEDECK_CORPUS") {
            config.corpus_path = Some(expand(&path));
        }
        if let Some(dir) = var("VERSEDECK_OUTPUT_DIR") {
            config.output_dir = expand(&dir);
        }

        if let Some(pt) = parse_var(&var, "VERSEDECK_TITLE_PT", "Set VERSEDECK_TITLE_PT to a font size in points, e.g. 42")? {
            config.title_pt = pt;
        }
        if let Some(pt) = parse_var(&var, "VERSEDECK_BODY_PT", "Set VERSEDECK_BODY_PT to a font size in points, e.g. 38")? {
            config.body_pt = pt;
        }
        if let Some(spacing) =
            parse_var(&var, "VERSEDECK_LINE_SPACING", "Set VERSEDECK_LINE_SPACING to a multiplier, e.g. 1.4")?
        {
            config.line_spacing = spacing;
        }
        if let Some(flag) = parse_bool(&var, "VERSEDECK_ONE_PER_SLIDE")? {
            config.one_per_slide = flag;
        }
        if let Some(flag) = parse_bool(&var, "VERSEDECK_WIDE")? {
            config.wide = flag;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject sizes the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("title font size", self.title_pt),
            ("body font size", self.body_pt),
            ("line spacing", self.line_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::config(
                    format!("{name} must be a positive number, got {value}"),
                    "Use values such as 42 (title), 38 (body) and 1.4 (spacing)",
                ));
            }
        }
        Ok(())
    }

    /// Pagination settings derived from the font configuration.
    pub fn layout(&self) -> LayoutConfig {
        let mode = if self.one_per_slide { LayoutMode::OnePerPage } else { LayoutMode::GreedyPack };
        LayoutConfig::from_fonts(self.body_pt, self.line_spacing).with_mode(mode)
    }

    /// Slide aspect ratio.
    pub const fn aspect(&self) -> SlideAspect {
        if self.wide {
            SlideAspect::Wide
        } else {
            SlideAspect::Standard
        }
    }

    /// Slide text style with the configured font sizes.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            title_pt: self.title_pt,
            body_pt: self.body_pt,
            line_spacing: self.line_spacing,
            ..TextStyle::default()
        }
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn parse_var<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    hint: &'static str,
) -> Result<Option<T>> {
    var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| Error::config(format!("{key}='{raw}' is not a valid number"), hint))
        })
        .transpose()
}

fn parse_bool(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>> {
    var(key)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(Error::config(
                format!("{key}='{raw}' is not a boolean"),
                "Use true or false",
            )),
        })
        .transpose()
}

/// Look for the dataset in the working directory, then the user data directory
fn detect_corpus_path() -> Option<PathBuf> {
    let local = PathBuf::from(output::CORPUS_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::data_dir()
        .map(|d| d.join("versedeck").join(output::CORPUS_FILE))
        .filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.aspect(), SlideAspect::Wide);
        assert_eq!(config.layout().mode, LayoutMode::OnePerPage);
        assert_eq!(config.text_style().title_pt, 42.0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("VERSEDECK_BODY_PT", "30"),
            ("VERSEDECK_LINE_SPACING", "1.2"),
            ("VERSEDECK_ONE_PER_SLIDE", "false"),
            ("VERSEDECK_WIDE", "0"),
            ("VERSEDECK_CORPUS", "/data/KorRV.json"),
        ]))
        .unwrap();
        assert_eq!(config.body_pt, 30.0);
        assert_eq!(config.aspect(), SlideAspect::Standard);
        assert_eq!(config.layout().mode, LayoutMode::GreedyPack);
        assert_eq!(config.corpus_path, Some(PathBuf::from("/data/KorRV.json")));
        assert!((config.layout().line_height - 30.0 * 1.2 * 0.035_277_8).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = Config::from_vars(vars(&[("VERSEDECK_BODY_PT", "big")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("VERSEDECK_BODY_PT"));

        let err = Config::from_vars(vars(&[("VERSEDECK_WIDE", "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = Config::from_vars(vars(&[("VERSEDECK_LINE_SPACING", "0")])).unwrap_err();
        assert!(err.to_string().contains("line spacing"));
    }
}
