use crate::error::StoreResult;

// =========================================================
// 抽象接口定义
// =========================================================

/// 最小持久化键值表契约
///
/// 与浏览器 `Storage` 接口一致：键和值都是字符串。值在进入这一层之前
/// 已经由上层编码为 JSON 文本，所以这里存放的原始值永远是字符串。
///
/// 所有方法都接收 `&self`：实现方依赖内部可变性（浏览器句柄本身如此，
/// 内存实现使用 `RefCell`），执行模型为单线程。
pub trait RawStorage {
    /// 当前条目数
    fn length(&self) -> usize;

    fn clear(&self) -> StoreResult<()>;

    /// 读取原始值
    ///
    /// `bypass_cache` 为 `true` 时跳过本地缓存，直接重新读取底层介质。
    /// 没有独立缓存层的实现可以忽略该参数。
    fn get_item(&self, key: &str, bypass_cache: bool) -> StoreResult<Option<String>>;

    /// 第 `index` 个键；越界返回 `None`。顺序由实现决定，不保证跨写入稳定。
    fn key(&self, index: usize) -> Option<String>;

    fn remove_item(&self, key: &str) -> StoreResult<()>;

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// 当前所有键的快照
    fn keys(&self) -> Vec<String> {
        (0..self.length()).filter_map(|i| self.key(i)).collect()
    }
}
