use anyhow::{Context, Result};
use seedsql_core::ConversionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source file holding the array literal
    pub input: Option<PathBuf>,
    /// Where `convert` writes the seed script; stdout when unset
    pub output: Option<PathBuf>,
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            conversion: ConversionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::load_default()?
        };

        config
            .conversion
            .validate()
            .with_context(|| "Invalid conversion settings")?;

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(&content).with_context(|| "Failed to parse TOML config")?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).with_context(|| "Failed to parse YAML config")?
            }
            Some("json") => {
                serde_json::from_str(&content).with_context(|| "Failed to parse JSON config")?
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unsupported config file format: {}",
                    path.display()
                ))
            }
        };

        Ok(config)
    }

    fn load_default() -> Result<Self> {
        match Self::default_candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Search order: `seedsql.*` then `.seedsql.*` in the working directory,
    /// then `seedsql/config.*` under the user config dir
    fn default_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for stem in ["seedsql", ".seedsql"] {
            for ext in CONFIG_EXTENSIONS {
                candidates.push(PathBuf::from(format!("{stem}.{ext}")));
            }
        }
        if let Some(user_dir) = dirs::config_dir() {
            let dir = user_dir.join("seedsql");
            for ext in CONFIG_EXTENSIONS {
                candidates.push(dir.join(format!("config.{ext}")));
            }
        }
        candidates
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => self.to_toml()?,
            Some("yaml") | Some("yml") => {
                serde_yaml::to_string(self).with_context(|| "Failed to serialize config to YAML")?
            }
            Some("json") => serde_json::to_string_pretty(self)
                .with_context(|| "Failed to serialize config to JSON")?,
            _ => {
                return Err(anyhow::anyhow!(
                    "Unsupported config file format: {}",
                    path.display()
                ))
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
