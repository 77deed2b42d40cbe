//! 账户记录
//!
//! 账户只持有一个ID字段，创建后不可修改

use serde::{Deserialize, Serialize};
use std::fmt;

/// 账户记录
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// 账户ID
    id: String,
}

impl Account {
    /// 创建账户记录
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 账户ID
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self.id)
    }
}
