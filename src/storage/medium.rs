//! 后备存储的单一字符串槽位
//!
//! 后备存储把整张映射表序列化后写进一个字符串槽位：
//! - 本地语义：名为 `localStorage` 的 cookie
//! - 会话语义：`window.name`
//!
//! 浏览器实现位于 `web` 模块；这里放与平台无关的部分。

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::StoreResult;

/// 单个字符串槽位
pub trait Medium {
    /// 读取槽位内容；槽位不存在时返回 `None`
    fn read(&self) -> StoreResult<Option<String>>;

    /// 整体覆盖槽位内容
    fn write(&self, data: &str) -> StoreResult<()>;
}

// =========================================================
// 内存槽位
// =========================================================

/// 纯内存槽位
///
/// 克隆后共享同一个槽位，因此可以在外部直接改写内容，
/// 模拟另一个浏览上下文写入了同一个 cookie。
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(content.into()))),
        }
    }

    /// 当前槽位内容
    pub fn content(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// 绕过存储直接改写槽位
    pub fn overwrite(&self, content: impl Into<String>) {
        *self.slot.borrow_mut() = Some(content.into());
    }
}

impl Medium for MemoryMedium {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.content())
    }

    fn write(&self, data: &str) -> StoreResult<()> {
        self.overwrite(data);
        Ok(())
    }
}

// =========================================================
// Cookie 字符串处理
// =========================================================

/// 在 `document.cookie` 形式的字符串中查找名为 `name` 的 cookie 值
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(|c| c.trim_start_matches(' '))
        .find_map(|c| c.strip_prefix(name)?.strip_prefix('='))
}

/// 浏览器接受的 cookie 最长有效期 (RFC 6265bis)，更长的期限会被浏览器截断
pub const MAX_COOKIE_EXPIRY_DAYS: i64 = 400;

/// 过期时间的 cookie 日期格式 (RFC 1123, GMT)
///
/// 天数超过 `MAX_COOKIE_EXPIRY_DAYS` 时按上限计算；日期无法表示时返回 `None`。
pub fn cookie_expiry(now: DateTime<Utc>, days: i64) -> Option<String> {
    let delta = TimeDelta::try_days(days.min(MAX_COOKIE_EXPIRY_DAYS))?;
    let expires = now.checked_add_signed(delta)?;
    Some(expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

/// 拼出赋给 `document.cookie` 的字符串
///
/// `days <= 0` 或过期日期无法表示时不写 `expires`，即会话 cookie。
pub fn format_cookie(name: &str, value: &str, days: i64, path: &str, now: DateTime<Utc>) -> String {
    let expires = match cookie_expiry(now, days) {
        Some(date) if days > 0 => format!("; expires={}", date),
        _ => String::new(),
    };
    format!("{}={}{}; path={}", name, value, expires, path)
}
