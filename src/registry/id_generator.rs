//! 账户ID生成器
//!
//! 支持两种ID类型：
//! 1. UUID - 随机 v4 UUID，标准带连字符的 36 位小写十六进制字符串
//! 2. 数字ID - `[0, 上限)` 内随机整数的十进制字符串（默认上限 100）
//!
//! 生成器不做碰撞检测，数字ID存在重复的可能。

use crate::utils::config::GeneratorConfig;
use crate::{RegistryError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 数字ID默认上限（不含）
pub const DEFAULT_NUMERIC_UPPER_BOUND: u32 = 100;

/// ID类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// 随机 UUID
    #[default]
    Uuid,
    /// 小范围随机数字
    Numeric,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Uuid => "uuid",
            IdType::Numeric => "numeric",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdType::Uuid),
            "numeric" => Ok(IdType::Numeric),
            _ => Err(RegistryError::InvalidIdType(s.to_string())),
        }
    }
}

/// ID生成能力
///
/// 注册表通过该 trait 取得新ID，测试中可替换为确定性实现。
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// 按默认类型 (UUID) 生成ID
    fn generate(&self) -> String;

    /// 按指定类型生成ID
    fn generate_with_type(&self, id_type: IdType) -> String;
}

/// 基于线程本地随机源的ID生成器
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    /// 数字ID上限（不含），恒大于 0
    numeric_upper_bound: u32,
}

impl RandomIdGenerator {
    /// 创建默认生成器 (UUID, 数字上限 100)
    pub fn new() -> Self {
        Self {
            numeric_upper_bound: DEFAULT_NUMERIC_UPPER_BOUND,
        }
    }

    /// 从配置创建生成器
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        if config.numeric_upper_bound == 0 {
            return Err(RegistryError::ConfigError(
                "numeric_upper_bound must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            numeric_upper_bound: config.numeric_upper_bound,
        })
    }

    pub fn numeric_upper_bound(&self) -> u32 {
        self.numeric_upper_bound
    }

    fn generate_uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn generate_numeric(&self) -> String {
        rand::thread_rng()
            .gen_range(0..self.numeric_upper_bound)
            .to_string()
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        self.generate_with_type(IdType::default())
    }

    fn generate_with_type(&self, id_type: IdType) -> String {
        let id = match id_type {
            IdType::Uuid => self.generate_uuid(),
            IdType::Numeric => self.generate_numeric(),
        };
        log::debug!("Generated {} id: {}", id_type, id);
        id
    }
}
