//! 实体（Entity）基础抽象
//!
//! 实体拥有独立标识；本层不定义结构化相等，基于标识的比较由调用方负责。
//!
use crate::error::StateResult;
use crate::identity::Identity;
use crate::parser::ValueParser;
use crate::state::{StateExtraction, extract_fields};
use crate::value::{FieldMap, Value};

/// 具备唯一标识与状态的实体，通常由 `#[entity]` 宏实现
pub trait Entity: StateExtraction {
    /// 获取实体标识
    fn identity(&self) -> &Identity;

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
