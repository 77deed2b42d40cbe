//! 账户注册表模块
//!
//! 负责账户ID生成与账户的创建、查询

/// 账户ID生成器
pub mod id_generator;

/// 账户注册表
pub mod account_registry;

// 重导出核心类型
pub use account_registry::AccountRegistry;
pub use id_generator::{IdGenerator, IdType, RandomIdGenerator};

#[cfg(test)]
pub use id_generator::MockIdGenerator;
