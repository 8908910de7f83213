//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象。相等性是结构化的：同一具体类型且字段表深度相等。
//!
use crate::error::StateResult;
use crate::parser::ValueParser;
use crate::state::{StateExtraction, extract_fields, same_state};
use crate::value::{FieldMap, Value};

/// 值对象抽象，通常由 `#[value_object]` 宏实现
pub trait ValueObject: StateExtraction {
    /// 结构化相等：`other` 必须与 `self` 为同一具体类型
    fn equal_to(&self, other: &dyn ValueObject) -> bool {
        same_state(self, other)
    }

    /// 归约值：仅有一个字段时返回该字段的原始值，否则返回整个字段表
    fn value(&self) -> StateResult<Value<'_>> {
        let mut fields = extract_fields(self)?;

        if fields.len() == 1 {
            if let Some((_, value)) = fields.pop() {
                return Ok(value);
            }
        }

        Ok(Value::Map(fields))
    }

    /// 原始字段表（不做原始值转换）
    fn to_array(&self) -> StateResult<FieldMap<'_>> {
        extract_fields(self)
    }

    /// 字段表转换为原始值树
    fn to_primitives(&self) -> StateResult<serde_json::Value> {
        let fields = Value::Map(extract_fields(self)?);
        ValueParser::new(&fields).to_primitives()
    }
}
