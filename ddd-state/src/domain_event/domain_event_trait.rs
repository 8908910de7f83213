use crate::error::StateResult;
use crate::identity::Identity;
use crate::parser::ValueParser;
use crate::state::{StateExtraction, extract_fields};
use crate::value::{FieldMap, Value};

use super::event::Event;
use super::serialized_event::SerializedEvent;

/// 领域事件
///
/// 字段应只包含原始值、日期时间、值对象或实体，以保证 [`DomainEvent::to_primitives`]
/// 总能成功；该约束不做额外校验，违反时转换返回错误。
pub trait DomainEvent: Event + StateExtraction {
    /// 事件所属聚合的标识
    fn aggregate_id(&self) -> &Identity;

    /// 聚合类型标签
    fn aggregate_label() -> &'static str
    where
        Self: Sized;

    /// 原始字段表（不做原始值转换）
    fn to_array(&self) -> StateResult<FieldMap<'_>> {
        extract_fields(self)
    }

    /// 字段表转换为原始值树
    fn to_primitives(&self) -> StateResult<serde_json::Value> {
        let fields = Value::Map(extract_fields(self)?);
        ValueParser::new(&fields).to_primitives()
    }

    /// 转换为持久化形态
    fn to_serialized(&self) -> StateResult<SerializedEvent>
    where
        Self: Sized,
    {
        Ok(SerializedEvent::builder()
            .aggregate_label(Self::aggregate_label().to_string())
            .aggregate_id(self.aggregate_id().to_string())
            .label(Self::label().to_string())
            .occurred_on(self.occurred_on())
            .payload(self.to_primitives()?)
            .build())
    }
}
