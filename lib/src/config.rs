//! Runtime configuration.
//!
//! Loaded once by the process entry point and passed by reference into
//! the orchestrator; there is no module-global configuration state.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlanceError, Result};

/// Configuration for one glance run.
///
/// Deserialized from a TOML file:
///
/// ```toml
/// honor_ansi_color = false
/// use_unicode = true
/// not_detected = "Not detected"
///
/// [entries]
/// disk = false
/// ```
///
/// Every field has a default, so a partial file (or no file at all) is
/// valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlanceConfig {
    /// Use the host-advertised accent color (`ANSI_COLOR` in
    /// os-release) instead of the logo's built-in palette.
    pub honor_ansi_color: bool,
    /// Render Unicode logo glyphs; disable for terminals limited to
    /// plain ASCII.
    pub use_unicode: bool,
    /// Placeholder printed for facts a probe could not determine.
    pub not_detected: String,
    /// Per-entry toggles, keyed by entry name (e.g. `"cpu"`); entries
    /// absent from the map run by default.
    pub entries: HashMap<String, bool>,
}

impl Default for GlanceConfig {
    fn default() -> Self {
        GlanceConfig {
            honor_ansi_color: false,
            use_unicode: true,
            not_detected: "Not detected".to_string(),
            entries: HashMap::new(),
        }
    }
}

impl GlanceConfig {
    /// Loads configuration.
    ///
    /// With an explicit `path` the file must exist and parse. Without
    /// one, the default location is used when present
    /// (`$XDG_CONFIG_HOME/glance/config.toml` or the platform
    /// equivalent) and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(GlanceError::ConfigNotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config file location, if a config directory exists for
    /// this platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glance").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GlanceConfig =
            toml::from_str(&content).map_err(|err| GlanceError::Config {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Whether the named entry should run.
    pub fn entry_enabled(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = GlanceConfig::default();
        assert!(!config.honor_ansi_color);
        assert!(config.use_unicode);
        assert_eq!(config.not_detected, "Not detected");
        assert!(config.entry_enabled("cpu"));
    }

    #[test]
    fn test_load_partial_file() {
        let (_dir, path) = write_config("honor_ansi_color = true\n");
        let config = GlanceConfig::load(Some(&path)).unwrap();
        assert!(config.honor_ansi_color);
        assert!(config.use_unicode);
    }

    #[test]
    fn test_load_entry_toggles() {
        let (_dir, path) = write_config("[entries]\ndisk = false\ncpu = true\n");
        let config = GlanceConfig::load(Some(&path)).unwrap();
        assert!(!config.entry_enabled("disk"));
        assert!(config.entry_enabled("cpu"));
        assert!(config.entry_enabled("memory"));
    }

    #[test]
    fn test_load_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = GlanceConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, GlanceError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let (_dir, path) = write_config("honor_ansi_color = \"maybe\"\n");
        let err = GlanceConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, GlanceError::Config { .. }));
    }
}
