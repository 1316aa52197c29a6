use std::cell::RefCell;
use std::collections::BTreeMap;

use super::medium::Medium;
use super::raw::RawStorage;
use crate::error::StoreResult;
use crate::serde_helper;

#[cfg(test)]
mod tests;

type Entries = BTreeMap<String, String>;

/// 在单个字符串槽位上模拟的持久键值表
///
/// 只在原生存储不可用时使用。内存中的映射表是默认读路径的唯一数据来源：
/// 构造时从槽位加载一次，之后每次写入都把整张表重新序列化回槽位。
/// 每次写入的代价与总数据量成正比，适用于表单字段和偏好设置这类小数据。
///
/// 键按字典序存放，`key(index)` 的顺序只会因为键集合变化而变化。
pub struct FallbackStore<M: Medium> {
    medium: M,
    data: RefCell<Entries>,
}

impl<M: Medium> FallbackStore<M> {
    /// 从槽位加载已有数据
    pub fn new(medium: M) -> Self {
        let data = Self::load(&medium);
        Self {
            medium,
            data: RefCell::new(data),
        }
    }

    /// 读取并解析整个槽位；空槽位或无法解析的内容视为空表
    fn load(medium: &M) -> Entries {
        let raw = match medium.read() {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Entries::new(),
            Err(e) => {
                tracing::warn!(code = e.error_code(), "failed to read fallback medium: {}", e);
                return Entries::new();
            }
        };

        serde_helper::from_json_string(&raw).unwrap_or_else(|e| {
            tracing::warn!(code = e.error_code(), "discarding malformed fallback data: {}", e);
            Entries::new()
        })
    }

    fn persist(&self) -> StoreResult<()> {
        let encoded = serde_helper::to_json_string(&*self.data.borrow())?;
        self.medium.write(&encoded)
    }
}

impl<M: Medium> RawStorage for FallbackStore<M> {
    /// 由映射表实际大小得出，不单独计数
    fn length(&self) -> usize {
        self.data.borrow().len()
    }

    fn clear(&self) -> StoreResult<()> {
        self.data.borrow_mut().clear();
        self.medium.write("")
    }

    fn get_item(&self, key: &str, bypass_cache: bool) -> StoreResult<Option<String>> {
        if bypass_cache {
            // 其他标签页可能已经改写了同一个 cookie
            return Ok(Self::load(&self.medium).remove(key));
        }
        Ok(self.data.borrow().get(key).cloned())
    }

    fn key(&self, index: usize) -> Option<String> {
        self.data.borrow().keys().nth(index).cloned()
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.data.borrow_mut().remove(key);
        self.persist()
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn keys(&self) -> Vec<String> {
        self.data.borrow().keys().cloned().collect()
    }
}
