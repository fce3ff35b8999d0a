use crate::error::{Result, SchemaQaError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// スキーマ取得のタイムアウト秒
    pub timeout_seconds: u64,
    /// 既定のレポート出力形式 (csv/excel)
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            default_format: "excel".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SchemaQaError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("schema-qa").join("config.json"))
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        self.timeout_seconds = seconds;
        self.save()
    }

    pub fn set_format(&mut self, format: String) -> Result<()> {
        self.default_format = format;
        self.save()
    }
}
