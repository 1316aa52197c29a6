//! 浏览器端键值持久化与表单字段自动保存/恢复
//!
//! - `storage`: 统一存储服务；原生 `localStorage` 不可用时退回到 cookie 或 `window.name`
//! - `fields`: 带 `data-stored-field` 标记的表单控件的保存与恢复
//! - `web`: 浏览器 API 实现与导出给页面脚本的接口 (仅 `wasm32`)
//!
//! ```
//! use formstash::config::StorageConfig;
//! use formstash::fields::FieldSynchronizer;
//! use formstash::storage::{FallbackStore, MemoryMedium, Storage};
//!
//! let config = StorageConfig::default();
//! let storage = Storage::fallback(FallbackStore::new(MemoryMedium::new()));
//! storage.set("ns.a", &1);
//! assert_eq!(storage.get::<i32>("ns.a"), Some(1));
//!
//! let sync = FieldSynchronizer::new(&storage, &config);
//! # let _ = sync;
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod serde_helper;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::StorageConfig;
pub use error::{StoreError, StoreResult};
pub use fields::{FieldSynchronizer, create_key};
pub use storage::{BackendKind, Storage};
