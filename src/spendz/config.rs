use crate::error::{Result, SpendzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILENAME: &str = "expenses.json";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Configuration for spendz, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendzConfig {
    /// Backing data file. Relative paths are resolved against the spendz home.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Category used when an expense is added without one
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for SpendzConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_category: default_category(),
        }
    }
}

impl SpendzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SpendzError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            SpendzError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SpendzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SpendzError::Serialization)?;
        fs::write(config_path, content).map_err(SpendzError::Io)?;
        Ok(())
    }

    /// The data file this config points at, relative to `home`.
    pub fn resolve_data_file(&self, home: &Path) -> PathBuf {
        match &self.data_file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => home.join(p),
            None => home.join(DEFAULT_DATA_FILENAME),
        }
    }

    /// Value of a user-facing key (`data-file`, `default-category`).
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_DATA_FILENAME.to_string()),
            ),
            "default-category" => Some(self.default_category.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SpendzError::invalid("data-file", "path cannot be empty"));
                }
                self.data_file = Some(PathBuf::from(trimmed));
                Ok(())
            }
            "default-category" => self.set_default_category(value),
            other => Err(SpendzError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set_default_category(&mut self, category: &str) -> Result<()> {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            return Err(SpendzError::invalid(
                "default-category",
                "category cannot be empty",
            ));
        }
        self.default_category = trimmed.to_string();
        Ok(())
    }
}

/// Picks the data file: explicit override (flag or env) first, then config.
pub fn resolve_data_file(
    override_path: Option<&Path>,
    config: &SpendzConfig,
    home: &Path,
) -> PathBuf {
    match override_path {
        Some(p) => p.to_path_buf(),
        None => config.resolve_data_file(home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SpendzConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.default_category, "Uncategorized");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = SpendzConfig::load(dir.path()).unwrap();
        assert_eq!(config, SpendzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("nested");

        let mut config = SpendzConfig::default();
        config.data_file = Some(PathBuf::from("books/2024.json"));
        config.set_default_category("misc").unwrap();
        config.save(&home).unwrap();

        let loaded = SpendzConfig::load(&home).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"data_file": "x.json"}"#).unwrap();

        let config = SpendzConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("x.json")));
        assert_eq!(config.default_category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_bad_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            SpendzConfig::load(dir.path()),
            Err(SpendzError::Config(_))
        ));
    }

    #[test]
    fn test_empty_default_category_rejected() {
        let mut config = SpendzConfig::default();
        assert!(config.set_default_category("  ").is_err());
        assert_eq!(config.default_category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = SpendzConfig::default();
        assert_eq!(config.get("data-file").as_deref(), Some("expenses.json"));

        config.set("data-file", "2024.json").unwrap();
        config.set("default-category", "misc").unwrap();
        assert_eq!(config.get("data-file").as_deref(), Some("2024.json"));
        assert_eq!(config.get("default-category").as_deref(), Some("misc"));

        assert!(config.get("colour").is_none());
        assert!(matches!(
            config.set("colour", "red"),
            Err(SpendzError::Config(_))
        ));
    }

    #[test]
    fn test_data_file_precedence() {
        let home = Path::new("/home/u/.spendz");
        let mut config = SpendzConfig::default();

        assert_eq!(
            resolve_data_file(None, &config, home),
            home.join("expenses.json")
        );

        config.data_file = Some(PathBuf::from("other.json"));
        assert_eq!(
            resolve_data_file(None, &config, home),
            home.join("other.json")
        );

        config.data_file = Some(PathBuf::from("/abs/data.json"));
        assert_eq!(
            resolve_data_file(None, &config, home),
            PathBuf::from("/abs/data.json")
        );

        assert_eq!(
            resolve_data_file(Some(Path::new("cli.json")), &config, home),
            PathBuf::from("cli.json")
        );
    }
}
