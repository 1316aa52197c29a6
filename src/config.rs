//! 运行时配置
//!
//! 所有常量集中在 `StorageConfig` 中，由组合根 (composition root) 显式传入，
//! 不存在全局查找。默认值即浏览器端约定的存储格式。

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::serde_helper;

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_COOKIE_NAME: &str = "localStorage";
pub const DEFAULT_COOKIE_EXPIRY_DAYS: i64 = 365;
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_FIELD_KEY_PREFIX: &str = "stored_field_";
pub const DEFAULT_SCOPE_ATTRIBUTE: &str = "data-stored-field";

/// 后备存储的持久化语义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// 写入单个 cookie，跨会话保留
    #[default]
    Local,
    /// 写入 `window.name`，仅在当前标签页内保留
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub cookie_name: String,
    pub cookie_expiry_days: i64,
    pub cookie_path: String,
    pub field_key_prefix: String,
    pub scope_attribute: String,
    pub fallback_mode: FallbackMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_expiry_days: DEFAULT_COOKIE_EXPIRY_DAYS,
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            field_key_prefix: DEFAULT_FIELD_KEY_PREFIX.to_string(),
            scope_attribute: DEFAULT_SCOPE_ATTRIBUTE.to_string(),
            fallback_mode: FallbackMode::Local,
        }
    }
}

impl StorageConfig {
    /// 从页面提供的 JSON 覆盖项构建配置，缺失的字段使用默认值
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        serde_helper::from_json_string(raw)
    }
}
