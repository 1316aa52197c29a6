//! 表单字段持久化
//!
//! - `key`: 字段存储键的命名约定
//! - `control`: 控件分类与 DOM 能力抽象
//! - `sync`: 保存/恢复算法

mod control;
mod key;
mod sync;

pub use control::{ControlKind, FieldElement, StoredValue};
pub use key::{FieldKey, create_key};
pub use sync::FieldSynchronizer;
