//! 原生 Web API 封装模块
//!
//! 只在 `wasm32` 目标上编译。核心逻辑通过 `RawStorage` / `Medium` /
//! `FieldElement` 三个 trait 与这里解耦，因此可以在宿主机上测试。

mod bindings;
mod dom;
mod medium;
mod storage;

#[cfg(test)]
mod tests;

pub use bindings::FormStash;
pub use dom::DomField;
pub use medium::{DocumentCookie, WindowName};
pub use storage::NativeStorage;
