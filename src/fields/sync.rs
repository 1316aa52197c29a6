//! 表单字段的保存与恢复
//!
//! 带有作用域标记属性 (默认 `data-stored-field`) 的控件会被自动保存到存储服务，
//! 并在之后的页面加载中恢复。属性值即作用域，可以为空。
//!
//! 传入的元素本身如果是带标记的表单控件，就直接处理；否则在其后代中查找带标记的控件。

use super::control::{ControlKind, FieldElement, StoredValue};
use super::key::FieldKey;
use crate::config::StorageConfig;
use crate::storage::Storage;


/// 字段同步器
///
/// 不持有任何状态，所有数据都委托给注入的 `Storage`。
pub struct FieldSynchronizer<'a> {
    storage: &'a Storage,
    config: &'a StorageConfig,
}

impl<'a> FieldSynchronizer<'a> {
    pub fn new(storage: &'a Storage, config: &'a StorageConfig) -> Self {
        Self { storage, config }
    }

    // =========================================================
    // 公开接口
    // =========================================================

    /// 保存所有指定字段的当前值
    pub fn save_chosen_fields<E: FieldElement>(&self, elements: &[E]) {
        self.for_each_field(elements, |field| self.save_field(field));
    }

    /// 把保存的值恢复到指定字段
    ///
    /// 返回是否有任何字段的显示状态发生了变化。总会处理完所有字段。
    pub fn restore_chosen_fields<E: FieldElement>(&self, elements: &[E]) -> bool {
        let mut changed = false;
        self.for_each_field(elements, |field| {
            changed |= self.restore_field(field);
        });
        changed
    }

    // =========================================================
    // 遍历与键解析
    // =========================================================

    fn for_each_field<E: FieldElement>(&self, elements: &[E], mut visit: impl FnMut(&E)) {
        let marker = &self.config.scope_attribute;
        for element in elements {
            if element.has_attribute(marker) && element.is_form_control() {
                visit(element);
            } else {
                for field in element.descendants_with_attribute(marker) {
                    visit(&field);
                }
            }
        }
    }

    fn storage_key<E: FieldElement>(&self, field: &E) -> Option<String> {
        let Some(property) = field.attribute("name") else {
            tracing::debug!("skipping stored field without name attribute");
            return None;
        };
        let scope = field
            .attribute(&self.config.scope_attribute)
            .unwrap_or_default();

        FieldKey::new(&property, &scope).map(|key| key.storage_key(&self.config.field_key_prefix))
    }

    // =========================================================
    // 保存
    // =========================================================

    fn save_field<E: FieldElement>(&self, field: &E) {
        let Some(key) = self.storage_key(field) else {
            return;
        };
        if let Some(value) = Self::current_value(field) {
            self.storage.set(&key, &value);
        }
    }

    /// 单选框只有被选中时才保存：整组共用一个键，未选中的单选框写入会覆盖组的值
    fn current_value<E: FieldElement>(field: &E) -> Option<StoredValue> {
        match ControlKind::classify(field) {
            Some(ControlKind::Checkbox) => Some(StoredValue::Flag(field.is_checked())),
            Some(ControlKind::Radio) => field.is_checked().then(|| StoredValue::Text(field.value())),
            Some(ControlKind::MultiSelect) => Some(StoredValue::List(field.selected_values())),
            Some(ControlKind::SingleSelect | ControlKind::Text) => {
                Some(StoredValue::Text(field.value()))
            }
            // 其他 input 类型 (email, number, hidden ...) 只保存不恢复
            None if field.is_form_control() => Some(StoredValue::Text(field.value())),
            None => None,
        }
    }

    // =========================================================
    // 恢复
    // =========================================================

    fn restore_field<E: FieldElement>(&self, field: &E) -> bool {
        let Some(key) = self.storage_key(field) else {
            return false;
        };
        let Some(stored) = self.storage.get::<StoredValue>(&key) else {
            return false;
        };
        let Some(kind) = ControlKind::classify(field) else {
            return false;
        };

        let changed = match (kind, &stored) {
            (ControlKind::Radio, StoredValue::Text(value)) => restore_radio(field, value),
            (ControlKind::Checkbox, StoredValue::Flag(checked)) => restore_checkbox(field, *checked),
            (ControlKind::SingleSelect, StoredValue::Text(value)) => {
                restore_single_select(field, value)
            }
            (ControlKind::MultiSelect, StoredValue::List(values)) => {
                restore_multi_select(field, values)
            }
            (ControlKind::Text, StoredValue::Text(value)) => restore_text(field, value),
            _ => {
                tracing::debug!(key = %key, ?kind, "stored value shape does not fit control");
                false
            }
        };

        if changed {
            tracing::debug!(key = %key, ?kind, "restored field");
        }
        changed
    }
}

fn restore_radio<E: FieldElement>(field: &E, stored: &str) -> bool {
    let should_check = field.value() == stored;
    if field.is_checked() == should_check {
        return false;
    }
    field.set_checked(should_check);
    true
}

fn restore_checkbox<E: FieldElement>(field: &E, stored: bool) -> bool {
    if field.is_checked() == stored {
        return false;
    }
    field.set_checked(stored);
    true
}

/// 只选择当前确实存在的选项
fn restore_single_select<E: FieldElement>(field: &E, stored: &str) -> bool {
    let exists = field.option_values().iter().any(|option| option == stored);
    if !exists || field.value() == stored {
        return false;
    }
    field.set_value(stored);
    field.notify_change();
    true
}

/// 取保存值与当前选项的交集，与当前选中集合做与顺序无关的比较
fn restore_multi_select<E: FieldElement>(field: &E, stored: &[String]) -> bool {
    let options = field.option_values();
    let mut existing: Vec<String> = stored
        .iter()
        .filter(|value| options.contains(value))
        .cloned()
        .collect();
    let mut current = field.selected_values();

    existing.sort();
    current.sort();
    if existing == current {
        return false;
    }

    field.set_selected_values(&existing);
    field.notify_change();
    true
}

fn restore_text<E: FieldElement>(field: &E, stored: &str) -> bool {
    if field.value() == stored {
        return false;
    }
    field.set_value(stored);
    true
}
