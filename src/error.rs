use thiserror::Error;

// =========================================================
// 核心错误类型
// =========================================================

/// 存储层内部错误
///
/// 对外的 `get`/`set`/`restore` 等接口从不向调用方抛出这些错误，
/// 只在内部通过 `StoreResult` 传递，并在边界处记录日志后吞掉。
#[derive(Debug, Error)]
pub enum StoreError {
    /// 原生持久存储不可用（探测失败或不存在）
    #[error("native storage unavailable: {0}")]
    Unavailable(String),
    /// 底层介质 (cookie / window.name / localStorage) 读写失败
    #[error("storage medium error: {0}")]
    Medium(String),
    /// JSON 编解码失败
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// JS 侧抛出的异常
    #[error("js error: {0}")]
    Js(String),
}

impl StoreError {
    pub fn medium(message: impl Into<String>) -> Self {
        StoreError::Medium(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    /// 机器可读的错误代码，用于日志字段
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "STORAGE_UNAVAILABLE",
            StoreError::Medium(_) => "MEDIUM_ERROR",
            StoreError::Serialization(_) => "JSON_PARSE_ERROR",
            StoreError::Js(_) => "JS_ERROR",
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StoreError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        let msg = e.as_string().unwrap_or_else(|| format!("{:?}", e));
        StoreError::Js(msg)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
