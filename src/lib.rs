//! # QAACCOUNT-REGISTRY
//!
//! 内存账户注册表 - 按账户ID存取账户记录
//!
//! ## 核心能力
//!
//! - **账户创建**: 指定ID开户，重复ID拒绝
//! - **账户生成**: 由ID生成器生成ID后开户 (UUID / 数字ID)
//! - **账户查询**: 按ID查询账户记录
//!
//! ## 架构设计
//!
//! ```text
//! 调用方
//!     ↓
//! AccountRegistry (registry/)
//!     ↓                ↓
//! IdGenerator      Account (account/)
//! ```
//!
//! 注册表为单线程同步结构，不做持久化；多线程共享时由调用方自行加锁。

// ============================================================================
// 外部依赖
// ============================================================================

// 日志
pub use log;

// 错误处理
pub use thiserror;

// UUID
pub use uuid;

// ============================================================================
// 内部模块
// ============================================================================

/// 账户记录
pub mod account;

/// 账户注册表与ID生成器
pub mod registry;

/// 工具模块（配置）
pub mod utils;

// ============================================================================
// 重导出常用类型
// ============================================================================

pub use account::Account;
pub use registry::{AccountRegistry, IdGenerator, IdType, RandomIdGenerator};
pub use utils::config::{GeneratorConfig, RegistryConfig};

// ============================================================================
// 全局错误类型
// ============================================================================

/// 注册表错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid id type: {0}")]
    InvalidIdType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

// ============================================================================
// 测试模块
// ============================================================================
