//! 存储边界上的序列化辅助
//!
//! 存储值一律以 JSON 文本形式写入底层介质，读取时再解析回结构化值。

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StoreResult;

/// Convert a Rust value into its JSON transport string
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> StoreResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse a JSON transport string back into a Rust value
pub fn from_json_string<T: DeserializeOwned>(s: &str) -> StoreResult<T> {
    Ok(serde_json::from_str(s)?)
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{from_value, to_value};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use serde::{Serialize, de::DeserializeOwned};
    use wasm_bindgen::JsValue;

    use crate::error::{StoreError, StoreResult};

    /// Serialize a Rust data structure into a JsValue
    pub fn to_value<T: Serialize + ?Sized>(value: &T) -> StoreResult<JsValue> {
        // 大整数按普通 JS number 输出；对象输出为普通 Object 而不是 Map
        let serializer = serde_wasm_bindgen::Serializer::new()
            .serialize_large_number_types_as_bigints(false)
            .serialize_maps_as_objects(true);
        value
            .serialize(&serializer)
            .map_err(|e| StoreError::Js(e.to_string()))
    }

    /// Deserialize a JsValue into a Rust data structure
    pub fn from_value<T: DeserializeOwned>(value: JsValue) -> StoreResult<T> {
        serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Js(e.to_string()))
    }
}
