//! 后备存储的浏览器槽位：`document.cookie` 与 `window.name`

use chrono::Utc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use crate::config::StorageConfig;
use crate::error::{StoreError, StoreResult};
use crate::storage::Medium;
use crate::storage::medium::{find_cookie, format_cookie};

/// 单个 cookie 槽位
///
/// 值经过 `encodeURIComponent` 编码，防止 JSON 中的 `;` 截断 cookie。
/// 不设置 domain / secure / httpOnly，页面脚本可读写。
pub struct DocumentCookie {
    name: String,
    expiry_days: i64,
    path: String,
}

impl DocumentCookie {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            expiry_days: config.cookie_expiry_days,
            path: config.cookie_path.clone(),
        }
    }

    fn document() -> StoreResult<HtmlDocument> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| StoreError::medium("no document"))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| StoreError::medium("document is not an HTML document"))
    }
}

impl Medium for DocumentCookie {
    fn read(&self) -> StoreResult<Option<String>> {
        let cookies = Self::document()?.cookie()?;
        match find_cookie(&cookies, &self.name) {
            Some(raw) => {
                let decoded = js_sys::decode_uri_component(raw)
                    .map_err(|e| StoreError::from(JsValue::from(e)))?;
                Ok(Some(decoded.into()))
            }
            None => Ok(None),
        }
    }

    fn write(&self, data: &str) -> StoreResult<()> {
        let encoded: String = js_sys::encode_uri_component(data).into();
        let cookie = format_cookie(&self.name, &encoded, self.expiry_days, &self.path, Utc::now());
        Self::document()?.set_cookie(&cookie)?;
        Ok(())
    }
}

/// `window.name` 槽位，生命周期与标签页相同
pub struct WindowName;

impl WindowName {
    fn window() -> StoreResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| StoreError::medium("no window"))
    }
}

impl Medium for WindowName {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(Some(Self::window()?.name()?))
    }

    fn write(&self, data: &str) -> StoreResult<()> {
        Self::window()?.set_name(data)?;
        Ok(())
    }
}
