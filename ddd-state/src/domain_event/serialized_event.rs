//! 事件持久化模型（SerializedEvent）
//!
//! 领域事件转换为原始值后的标准形态，可直接序列化为 JSON 落库或传输。
//!
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StateResult;

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct SerializedEvent {
    /// 聚合类型标签
    aggregate_label: String,
    /// 聚合标识
    aggregate_id: String,
    /// 事件标签
    label: String,
    /// 事件发生时间
    occurred_on: DateTime<Utc>,
    /// 事件全部状态的原始值形态
    payload: Value,
}

impl SerializedEvent {
    pub fn aggregate_label(&self) -> &str {
        &self.aggregate_label
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn to_json(&self) -> StateResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> StateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> SerializedEvent {
        SerializedEvent::builder()
            .aggregate_label("order".to_string())
            .aggregate_id("o-1".to_string())
            .label("order.placed".to_string())
            .occurred_on(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .payload(json!({ "aggregate_id": "o-1", "total": 10 }))
            .build()
    }

    #[test]
    fn test_accessors() {
        let event = sample();
        assert_eq!(event.aggregate_label(), "order");
        assert_eq!(event.aggregate_id(), "o-1");
        assert_eq!(event.label(), "order.placed");
        assert_eq!(event.payload()["total"], 10);
    }

    #[test]
    fn test_json_roundtrip() {
        let event = sample();
        let json = event.to_json().unwrap();
        assert!(json.contains(r#""label":"order.placed""#));

        let back = SerializedEvent::from_json(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_invalid_json() {
        assert!(SerializedEvent::from_json("{").is_err());
    }
}
