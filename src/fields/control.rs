use serde::{Deserialize, Serialize};

// =========================================================
// DOM 能力抽象
// =========================================================

/// 表单控件所需的最小 DOM 能力
///
/// 浏览器实现见 `web::DomField`；测试中使用内存实现。
/// DOM 句柄本身具有内部可变性，所以写操作同样接收 `&self`。
pub trait FieldElement: Sized {
    /// 小写标签名，如 `input`、`select`
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    /// 控件类型，取元素规范化后的 `type` DOM property：
    /// `<input>` 缺省或非法的类型为 `text`，`<select>` 为 `select-one` / `select-multiple`，
    /// `<textarea>` 为 `textarea`；非表单控件退回 `type` HTML attribute
    fn control_type(&self) -> Option<String>;

    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);

    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    /// 当前所有 `<option>` 的值
    fn option_values(&self) -> Vec<String>;
    /// 当前被选中的 `<option>` 的值
    fn selected_values(&self) -> Vec<String>;
    fn set_selected_values(&self, values: &[String]);

    /// 触发 `change` 事件，让页面上的依赖逻辑重新运行
    fn notify_change(&self);

    /// 带有指定属性的所有后代元素
    fn descendants_with_attribute(&self, name: &str) -> Vec<Self>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// 可以直接作为字段处理的元素
    fn is_form_control(&self) -> bool {
        matches!(self.tag_name().as_str(), "input" | "select" | "textarea")
    }
}

// =========================================================
// 控件分类
// =========================================================

/// 受支持的控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Checkbox,
    Radio,
    SingleSelect,
    MultiSelect,
    /// `<input type="text">` 与 `<textarea>`
    Text,
}

impl ControlKind {
    pub fn from_type(control_type: &str) -> Option<Self> {
        match control_type {
            "checkbox" => Some(ControlKind::Checkbox),
            "radio" => Some(ControlKind::Radio),
            "select-one" => Some(ControlKind::SingleSelect),
            "select-multiple" => Some(ControlKind::MultiSelect),
            "text" | "textarea" => Some(ControlKind::Text),
            _ => None,
        }
    }

    pub fn classify<E: FieldElement>(field: &E) -> Option<Self> {
        field.control_type().as_deref().and_then(Self::from_type)
    }
}

// =========================================================
// 存储值
// =========================================================

/// 一个字段被保存的值
///
/// JSON 形态分别为字符串、布尔值、字符串数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl StoredValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StoredValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StoredValue::List(items) => Some(items),
            _ => None,
        }
    }
}
