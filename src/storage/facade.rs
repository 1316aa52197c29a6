use serde::{Serialize, de::DeserializeOwned};

use super::raw::RawStorage;
use crate::error::StoreResult;
use crate::serde_helper;


/// 初始化时选定的底层实现
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// 浏览器原生 `localStorage`
    Native,
    /// 基于 cookie / `window.name` 的后备存储
    Fallback,
}

/// 统一的存储服务
///
/// 底层实现在构造时确定，之后不会重新探测。值在边界处编码为 JSON 文本，
/// 读取时解析回来；对外接口从不返回错误，失败时记录日志并退回默认值。
pub struct Storage {
    backend: Box<dyn RawStorage>,
    kind: BackendKind,
}

impl Storage {
    pub fn new(backend: Box<dyn RawStorage>, kind: BackendKind) -> Self {
        tracing::debug!(?kind, "storage backend selected");
        Self { backend, kind }
    }

    pub fn native(backend: impl RawStorage + 'static) -> Self {
        Self::new(Box::new(backend), BackendKind::Native)
    }

    pub fn fallback(backend: impl RawStorage + 'static) -> Self {
        Self::new(Box::new(backend), BackendKind::Fallback)
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    // =========================================================
    // 读取
    // =========================================================

    /// 读取并解析；不存在、读取失败或内容无法解析时返回 `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_get(key).unwrap_or_else(|e| {
            tracing::warn!(key, code = e.error_code(), "storage get failed: {}", e);
            None
        })
    }

    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        self.read(key, false)
    }

    /// 跳过本地缓存读取，获取其他浏览上下文可能已经写入的最新值
    ///
    /// 后备存储会重新解析整个槽位；原生存储没有独立缓存层，行为与 `get` 相同。
    pub fn get_from_real_storage<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.read(key, true).unwrap_or_else(|e| {
            tracing::warn!(key, code = e.error_code(), "storage live read failed: {}", e);
            None
        })
    }

    fn read<T: DeserializeOwned>(&self, key: &str, bypass_cache: bool) -> StoreResult<Option<T>> {
        match self.backend.get_item(key, bypass_cache)? {
            // 空字符串不是合法的 JSON 编码值，视为不存在
            Some(raw) if !raw.is_empty() => Ok(Some(serde_helper::from_json_string(&raw)?)),
            _ => Ok(None),
        }
    }

    // =========================================================
    // 写入
    // =========================================================

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!(key, code = e.error_code(), "storage set failed: {}", e);
        }
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = serde_helper::to_json_string(value)?;
        self.backend.set_item(key, &encoded)
    }

    pub fn delete(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            tracing::warn!(key, code = e.error_code(), "storage delete failed: {}", e);
        }
    }

    /// 删除所有以 `prefix` 开头的键
    ///
    /// 逐字符、区分大小写比较，不假设分隔符：前缀 `"abc"` 会匹配 `"abcfoo"`。
    pub fn delete_by_namespace(&self, prefix: &str) {
        // 先取快照，避免边遍历边删除导致下标错位
        let matching: Vec<String> = self
            .backend
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect();

        tracing::debug!(prefix, count = matching.len(), "deleting namespace");
        for key in matching {
            self.delete(&key);
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.backend.keys()
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            tracing::warn!(code = e.error_code(), "storage clear failed: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage {
    /// 探测原生存储，不可用时按配置构造后备存储
    ///
    /// 每个页面只应调用一次；探测中的异常被视为“原生不可用”。
    pub fn detect(config: &crate::config::StorageConfig) -> Self {
        use super::fallback::FallbackStore;
        use crate::config::FallbackMode;
        use crate::web::{DocumentCookie, NativeStorage, WindowName};

        match NativeStorage::probe() {
            Ok(native) => Self::native(native),
            Err(e) => {
                tracing::debug!("native storage unavailable, using fallback: {}", e);
                match config.fallback_mode {
                    FallbackMode::Local => {
                        Self::fallback(FallbackStore::new(DocumentCookie::new(config)))
                    }
                    FallbackMode::Session => Self::fallback(FallbackStore::new(WindowName)),
                }
            }
        }
    }
}
