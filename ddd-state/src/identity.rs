//! 标识对象（Identity）
//!
//! 包装实体的不透明标识值。作为单字段值对象，在原始值转换中折叠为裸字符串。
//!
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::value_object;

/// 实体标识
#[value_object(display = false)]
#[derive(PartialOrd, Ord)]
pub struct Identity {
    value: String,
}

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// 生成随机标识（UUID v4）
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Eq for Identity {}

// 与结构化相等保持一致：只有 value 参与
impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
