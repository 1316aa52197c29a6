//! 键值持久化层
//!
//! - `raw`: 浏览器 `Storage` 形状的原始字符串契约
//! - `medium`: 后备存储使用的单一字符串槽位
//! - `fallback`: 在槽位上模拟的持久键值表
//! - `facade`: 对外的统一存储服务 (JSON 编解码、命名空间删除、绕过缓存读取)

mod facade;
mod fallback;
pub mod medium;
mod raw;

pub use facade::{BackendKind, Storage};
pub use fallback::FallbackStore;
pub use medium::{Medium, MemoryMedium};
pub use raw::RawStorage;
