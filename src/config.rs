use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub ollama_url: String,
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "mistral".into(),
            ollama_url: "http://localhost:11434".into(),
            port: 5000,
            data_dir: None,
            static_dir: None,
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // 環境変数を優先
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            if !host.trim().is_empty() {
                config.ollama_url = normalize_host(&host);
            }
        }

        Ok(config)
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
            .ok_or_else(|| JournalError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("memory-journal").join("config.json"))
    }

    /// エントリと日記ファイルの保存先
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| JournalError::Config("data directory not found".into()))?;
        Ok(base.join("memory-journal"))
    }
}

/// `OLLAMA_HOST` は `127.0.0.1:11434` のようにスキーム無しでも指定される
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "mistral");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"model": "llama3"}"#).expect("パース失敗");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("127.0.0.1:11434"), "http://127.0.0.1:11434");
        assert_eq!(normalize_host("https://ollama.local/"), "https://ollama.local");
    }

    #[test]
    fn test_explicit_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/journal")),
            ..Default::default()
        };
        assert_eq!(config.resolve_data_dir().expect("解決失敗"), PathBuf::from("/tmp/journal"));
    }
}
