use crate::error::{OstapError, Result};
use crate::store::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "data.json";
const DEFAULT_NOTES_FILE: &str = "notebook.json";
const DEFAULT_SUGGESTION_THRESHOLD: u8 = 60;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "OSTAP_HOME";

/// Settings stored in `<data dir>/config.json`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Records shown per page by `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Minimum similarity (0-100) for a "did you mean" suggestion
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: u8,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_suggestion_threshold() -> u8 {
    DEFAULT_SUGGESTION_THRESHOLD
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            page_size: default_page_size(),
            suggestion_threshold: default_suggestion_threshold(),
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OstapError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(OstapError::Serialization)?;
        Ok(config)
    }
}

/// Where contacts, notes and config live: `$OSTAP_HOME`, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "ostap", "ostap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OstapError::Store("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.contacts_file, "data.json");
        assert_eq!(config.notes_file, "notebook.json");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.suggestion_threshold, 60);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 5}"#).unwrap();

        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.contacts_file, "data.json");
    }
}
