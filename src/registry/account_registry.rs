//! 账户注册表
//!
//! 维护 账户ID -> 账户记录 的映射，负责开户与查询。
//! 注册表只增不减，不提供销户。

use super::id_generator::{IdGenerator, IdType, RandomIdGenerator};
use crate::account::Account;
use crate::utils::config::RegistryConfig;
use crate::{RegistryError, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// 账户注册表
///
/// 单线程结构：写操作需要 `&mut self`，跨线程共享时由调用方加锁。
pub struct AccountRegistry<G: IdGenerator = RandomIdGenerator> {
    /// ID生成器
    generator: G,

    /// 账户映射 (account_id -> Account)
    accounts: HashMap<String, Account>,
}

impl AccountRegistry<RandomIdGenerator> {
    /// 从配置创建注册表
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let generator = RandomIdGenerator::from_config(&config.generator)?;
        Ok(Self::new(generator))
    }
}

impl Default for AccountRegistry<RandomIdGenerator> {
    fn default() -> Self {
        Self::new(RandomIdGenerator::new())
    }
}

impl<G: IdGenerator> AccountRegistry<G> {
    /// 使用给定的ID生成器创建空注册表
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            accounts: HashMap::new(),
        }
    }

    /// 以指定ID开户
    ///
    /// ID已存在时返回 `DuplicateAccount`，原有账户不受影响。
    pub fn create_account(&mut self, id: impl Into<String>) -> Result<&Account> {
        match self.accounts.entry(id.into()) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                log::info!("Account created: {}", entry.key());
                let account = Account::new(entry.key().clone());
                Ok(&*entry.insert(account))
            }
        }
    }

    /// 以默认类型生成ID并开户
    pub fn generate_account(&mut self) -> &Account {
        let id = self.generator.generate();
        self.insert_generated(id)
    }

    /// 以指定类型生成ID并开户
    pub fn generate_account_with_type(&mut self, id_type: IdType) -> &Account {
        let id = self.generator.generate_with_type(id_type);
        self.insert_generated(id)
    }

    /// 查询账户
    pub fn get_account(&self, id: &str) -> Result<&Account> {
        self.accounts.get(id).ok_or_else(|| {
            log::debug!("Account lookup missed: {}", id);
            RegistryError::AccountNotFound(id.to_string())
        })
    }

    /// 账户是否存在
    pub fn contains_account(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// 获取账户数量
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// 遍历所有账户（无序）
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    // 生成的ID不做重复检查，碰撞时覆盖原记录
    fn insert_generated(&mut self, id: String) -> &Account {
        match self.accounts.entry(id) {
            Entry::Occupied(mut entry) => {
                log::warn!("Generated id collides with existing account: {}", entry.key());
                let account = Account::new(entry.key().clone());
                entry.insert(account);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                log::info!("Account generated: {}", entry.key());
                let account = Account::new(entry.key().clone());
                entry.insert(account)
            }
        }
    }
}
