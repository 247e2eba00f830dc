//! Walk configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Configuration for a course walk.
///
/// Controls which files are enumerated at all; validation semantics are
/// fixed and not configurable. Loadable from TOML, with defaults matching
/// the documented course layout (housekeeping files like `.gitkeep` and
/// `README.md` are not course content and are skipped silently).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkConfig {
    /// Exact file names skipped during enumeration
    #[serde(default = "default_skip_names")]
    pub skip_names: Vec<String>,
    /// Skip hidden files and directories (names starting with '.')
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
    /// Validate candidates in parallel; report order is unaffected
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_skip_names() -> Vec<String> {
    vec![".gitkeep".to_string(), "README.md".to_string()]
}

fn default_skip_hidden() -> bool {
    true
}

fn default_parallel() -> bool {
    true
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            skip_names: default_skip_names(),
            skip_hidden: default_skip_hidden(),
            parallel: default_parallel(),
        }
    }
}

impl WalkConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Whether an entry with this name is excluded from enumeration
    pub fn should_skip(&self, entry_name: &str) -> bool {
        if self.skip_hidden && entry_name.starts_with('.') {
            return true;
        }
        self.skip_names.iter().any(|name| name == entry_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_skips_housekeeping_files() {
        let config = WalkConfig::default();
        assert!(config.should_skip(".gitkeep"));
        assert!(config.should_skip("README.md"));
        assert!(config.should_skip(".git"));
        assert!(!config.should_skip("lecture01.pptx"));
        assert!(!config.should_skip("lectures"));
    }

    #[test]
    fn test_hidden_skip_can_be_disabled() {
        let config = WalkConfig {
            skip_hidden: false,
            ..WalkConfig::default()
        };
        assert!(!config.should_skip(".hidden.pdf"));
        assert!(config.should_skip(".gitkeep")); // still in skip_names
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skip_names = [\"Thumbs.db\"]\nparallel = false").unwrap();

        let config = WalkConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.skip_names, vec!["Thumbs.db".to_string()]);
        assert!(!config.parallel);
        assert!(config.skip_hidden); // serde default
    }
}
