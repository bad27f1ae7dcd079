use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::GraphResult;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub algorithm: AlgorithmConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphkit".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 算法配置
///
/// `validate_input` 打开时，最短路径会拒绝负权边，最小生成森林会拒绝不对称的边集；
/// `dense_vertex_limit` 限制全源最短路径的矩阵规模
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub validate_input: bool,
    pub dense_vertex_limit: usize,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            dense_vertex_limit: 2048,
        }
    }
}

impl AlgorithmConfig {
    /// 关闭前置条件检查
    pub fn unchecked() -> Self {
        Self {
            validate_input: false,
            ..Self::default()
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_files, 5);
        assert!(config.algorithm.validate_input);
        assert_eq!(config.algorithm.dense_vertex_limit, 2048);
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.algorithm.validate_input = false;
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temporary dir");
        let path = dir.path().join("graphkit.toml");

        let mut config = Config::default();
        config.log.level = "debug".to_string();
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load(&path).expect("Failed to load config");
        assert_eq!(loaded.log.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [algorithm]
            dense_vertex_limit = 16
            "#,
        )
        .expect("Partial config should parse");

        assert_eq!(config.algorithm.dense_vertex_limit, 16);
        assert!(config.algorithm.validate_input);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_malformed_config() {
        let result = Config::from_toml_str("[algorithm\nvalidate_input = true");
        assert!(matches!(result, Err(crate::core::GraphError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load("/nonexistent/graphkit.toml");
        assert!(matches!(result, Err(crate::core::GraphError::Io(_))));
    }
}
