//! 暴露给页面脚本的接口
//!
//! ```js
//! const stash = new FormStash();            // 或 new FormStash({ cookie_name: "prefs" })
//! stash.set("filters", { page: 2 });
//! stash.saveChosenFields(document.querySelectorAll("form"));
//! if (stash.restoreChosenFields([form])) { refresh(); }
//! ```

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::DomField;
use crate::config::StorageConfig;
use crate::fields::FieldSynchronizer;
use crate::serde_helper;
use crate::storage::{BackendKind, Storage};

/// Installs the panic hook and the console logger when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // tracing 事件经 `log` 转发到浏览器控制台
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"formstash: logger already initialised".into());
    }
}

/// 存储服务的 JS 句柄，由页面的组合根创建一次
#[wasm_bindgen]
pub struct FormStash {
    storage: Storage,
    config: StorageConfig,
}

#[wasm_bindgen]
impl FormStash {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> FormStash {
        let config = if config.is_undefined() || config.is_null() {
            StorageConfig::default()
        } else {
            serde_helper::from_value(config).unwrap_or_else(|e| {
                tracing::warn!("invalid storage config, using defaults: {}", e);
                StorageConfig::default()
            })
        };
        let storage = Storage::detect(&config);
        FormStash { storage, config }
    }

    /// 不存在时返回 `undefined`
    pub fn get(&self, key: &str) -> JsValue {
        to_js(self.storage.get::<serde_json::Value>(key))
    }

    pub fn set(&self, key: &str, value: JsValue) {
        match serde_helper::from_value::<serde_json::Value>(value) {
            Ok(value) => self.storage.set(key, &value),
            Err(e) => tracing::warn!(key, "value is not JSON serializable: {}", e),
        }
    }

    pub fn delete(&self, key: &str) {
        self.storage.delete(key);
    }

    #[wasm_bindgen(js_name = deleteByNamespace)]
    pub fn delete_by_namespace(&self, prefix: &str) {
        self.storage.delete_by_namespace(prefix);
    }

    #[wasm_bindgen(js_name = getFromRealStorage)]
    pub fn get_from_real_storage(&self, key: &str) -> JsValue {
        to_js(self.storage.get_from_real_storage::<serde_json::Value>(key))
    }

    /// 接受单个元素，或 NodeList / 数组等类数组对象
    #[wasm_bindgen(js_name = saveChosenFields)]
    pub fn save_chosen_fields(&self, elements: JsValue) {
        let fields = collect_fields(&elements);
        FieldSynchronizer::new(&self.storage, &self.config).save_chosen_fields(&fields);
    }

    #[wasm_bindgen(js_name = restoreChosenFields)]
    pub fn restore_chosen_fields(&self, elements: JsValue) -> bool {
        let fields = collect_fields(&elements);
        FieldSynchronizer::new(&self.storage, &self.config).restore_chosen_fields(&fields)
    }

    #[wasm_bindgen(getter, js_name = usesFallback)]
    pub fn uses_fallback(&self) -> bool {
        self.storage.backend_kind() == BackendKind::Fallback
    }
}

fn to_js(value: Option<serde_json::Value>) -> JsValue {
    let Some(value) = value else {
        return JsValue::UNDEFINED;
    };
    serde_helper::to_value(&value).unwrap_or_else(|e| {
        tracing::warn!("failed to convert stored value: {}", e);
        JsValue::UNDEFINED
    })
}

pub(super) fn collect_fields(elements: &JsValue) -> Vec<DomField> {
    if let Some(element) = elements.dyn_ref::<Element>() {
        return vec![DomField::new(element.clone())];
    }
    js_sys::Array::from(elements)
        .iter()
        .filter_map(|value| value.dyn_into::<Element>().ok())
        .map(DomField::new)
        .collect()
}
