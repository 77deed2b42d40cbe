//! 配置管理模块

use crate::registry::id_generator::DEFAULT_NUMERIC_UPPER_BOUND;
use crate::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 注册表配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl RegistryConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RegistryError::ConfigError(format!("Failed to read registry config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            RegistryError::ConfigError(format!("Failed to parse registry config file: {}", e))
        })
    }
}

/// ID生成器配置
///
/// 默认ID类型固定为 UUID，不可配置。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// 数字ID上限（不含）
    #[serde(default = "default_numeric_upper_bound")]
    pub numeric_upper_bound: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            numeric_upper_bound: DEFAULT_NUMERIC_UPPER_BOUND,
        }
    }
}

// 默认值函数
fn default_numeric_upper_bound() -> u32 {
    DEFAULT_NUMERIC_UPPER_BOUND
}
