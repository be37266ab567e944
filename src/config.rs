//! Styler Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ApplyFlags;

const CONFIG_FILE: &str = "lexstyle.toml";

/// Styler configuration loaded from lexstyle.toml
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StylerConfig {
    /// Theme document to load; `None` means style from defaults only
    #[serde(default)]
    pub theme_file: Option<PathBuf>,

    /// Apply the "Global override" entry
    #[serde(default = "default_true")]
    pub use_global_override: bool,

    /// Let the theme change the default font
    #[serde(default = "default_true")]
    pub apply_font: bool,

    /// Apply "Selected text colour"
    #[serde(default = "default_true")]
    pub use_selection_colors: bool,

    /// Apply "Fold margin"
    #[serde(default = "default_true")]
    pub use_margin_colors: bool,

    /// Apply "White space symbol"
    #[serde(default = "default_true")]
    pub use_whitespace: bool,
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self {
            theme_file: None,
            use_global_override: true,
            apply_font: true,
            use_selection_colors: true,
            use_margin_colors: true,
            use_whitespace: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl StylerConfig {
    /// Find lexstyle.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("lexstyle").join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the standard locations, returning defaults if
    /// nothing is found or the found file does not parse.
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: StylerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// The resolver flag set this configuration describes.
    pub fn flags(&self) -> ApplyFlags {
        ApplyFlags {
            use_global_override: self.use_global_override,
            apply_font: self.apply_font,
            use_selection_colors: self.use_selection_colors,
            use_margin_colors: self.use_margin_colors,
            use_whitespace: self.use_whitespace,
        }
    }
}

/// Styler configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StylerConfig::default();
        assert!(config.theme_file.is_none());
        assert!(config.use_global_override);
        assert!(config.flags().use_whitespace);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme_file = \"themes/dark.xml\"\nuse_global_override = false"
        )
        .unwrap();

        let config = StylerConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.theme_file, Some(PathBuf::from("themes/dark.xml")));
        assert!(!config.use_global_override);
        // Unset keys keep their defaults
        assert!(config.apply_font);
        assert!(!config.flags().use_global_override);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme_file = [not toml").unwrap();

        assert!(matches!(
            StylerConfig::load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            StylerConfig::load_from_path(Path::new("/no/such/lexstyle.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
