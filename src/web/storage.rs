//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现 `RawStorage`。原生存储没有独立的缓存层，
//! 因此忽略 `bypass_cache`。

use crate::error::{StoreError, StoreResult};
use crate::storage::RawStorage;

/// 浏览器原生 `localStorage`
pub struct NativeStorage(web_sys::Storage);

impl NativeStorage {
    /// 探测 `window.localStorage`
    ///
    /// 部分浏览器在禁用存储时访问该属性会直接抛出异常，这里统一转为 `Unavailable`。
    pub fn probe() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::unavailable("no window"))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            Ok(None) => Err(StoreError::unavailable("window.localStorage is null")),
            Err(e) => Err(StoreError::unavailable(format!("{:?}", e))),
        }
    }
}

impl RawStorage for NativeStorage {
    fn length(&self) -> usize {
        self.0.length().unwrap_or(0) as usize
    }

    fn clear(&self) -> StoreResult<()> {
        Ok(self.0.clear()?)
    }

    fn get_item(&self, key: &str, _bypass_cache: bool) -> StoreResult<Option<String>> {
        Ok(self.0.get_item(key)?)
    }

    fn key(&self, index: usize) -> Option<String> {
        self.0.key(index as u32).ok()?
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        Ok(self.0.remove_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.0.set_item(key, value)?)
    }
}
