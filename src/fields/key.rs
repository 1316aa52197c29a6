use crate::config::DEFAULT_FIELD_KEY_PREFIX;

/// 字段的逻辑键：字段名 + 可选作用域
///
/// 同名字段可以通过不同的作用域分别保存。所有字段键共享同一个前缀，
/// 因此可以用 `Storage::delete_by_namespace` 一次性清除。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    property: String,
    scope: Option<String>,
}

impl FieldKey {
    /// 字段名为空时无法构成键，返回 `None`；空作用域视为没有作用域
    pub fn new(property: &str, scope: &str) -> Option<Self> {
        if property.is_empty() {
            return None;
        }
        Some(Self {
            property: property.to_string(),
            scope: (!scope.is_empty()).then(|| scope.to_string()),
        })
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// `<prefix><property>` 或 `<prefix><property>_<scope>`
    pub fn storage_key(&self, prefix: &str) -> String {
        match &self.scope {
            Some(scope) => format!("{}{}_{}", prefix, self.property, scope),
            None => format!("{}{}", prefix, self.property),
        }
    }
}

/// 使用默认前缀生成存储键
pub fn create_key(property: &str, scope: &str) -> Option<String> {
    FieldKey::new(property, scope).map(|key| key.storage_key(DEFAULT_FIELD_KEY_PREFIX))
}
