//! 值解析器（ValueParser）
//!
//! - 分类：判断任意 [`Value`] 属于原始值、日期时间、实体、值对象或不透明对象；
//! - 转换：递归地把有状态对象图折叠为只含映射、列表与标量的原始值树（`serde_json::Value`），
//!   便于比较、调试与持久化（例如领域事件落库）。
//!
//! 折叠规则：嵌套位置上的有状态对象若只有一个字段，则替换为该字段转换后的值；
//! 否则替换为其完整字段表的转换结果。实体与值对象按字段数一视同仁。
//!
use serde_json::Value as JsonValue;

use crate::config::ParserConfig;
use crate::error::{StateError, StateResult};
use crate::state::extract_fields;
use crate::value::{FieldMap, Value};

/// 值的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Primitive,
    DateTime,
    Entity,
    ValueObject,
    Opaque,
}

/// 针对单个值的分类器与原始值转换器
#[derive(Debug, Clone, Copy)]
pub struct ValueParser<'p, 'a> {
    value: &'p Value<'a>,
    config: ParserConfig,
}

impl<'p, 'a> ValueParser<'p, 'a> {
    pub fn new(value: &'p Value<'a>) -> Self {
        Self::with_config(value, ParserConfig::default())
    }

    pub fn with_config(value: &'p Value<'a>, config: ParserConfig) -> Self {
        Self { value, config }
    }

    /// 标量、列表与映射
    pub fn is_primitive(&self) -> bool {
        matches!(
            self.value,
            Value::Null
                | Value::Bool(_)
                | Value::Number(_)
                | Value::NonFinite(_)
                | Value::String(_)
                | Value::List(_)
                | Value::Map(_)
        )
    }

    /// 任意对象（日期时间、有状态对象与不透明对象），与是否有状态无关
    pub fn is_object(&self) -> bool {
        matches!(
            self.value,
            Value::DateTime(_) | Value::Object(_) | Value::Opaque(_)
        )
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self.value, Value::DateTime(_))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.value, Value::Object(obj) if obj.as_entity().is_some())
    }

    pub fn is_value_object(&self) -> bool {
        matches!(self.value, Value::Object(obj) if obj.as_value_object().is_some())
    }

    pub fn has_state(&self) -> bool {
        self.is_entity() || self.is_value_object()
    }

    /// 分类；同时具备两种能力时实体优先
    pub fn kind(&self) -> ValueKind {
        if self.is_primitive() {
            ValueKind::Primitive
        } else if self.is_datetime() {
            ValueKind::DateTime
        } else if self.is_entity() {
            ValueKind::Entity
        } else if self.is_value_object() {
            ValueKind::ValueObject
        } else {
            ValueKind::Opaque
        }
    }

    /// 以当前值为根转换为原始值树
    ///
    /// 根节点为有状态对象时返回其字段表的转换结果（根节点不折叠）。
    pub fn to_primitives(&self) -> StateResult<JsonValue> {
        let kind = self.kind();
        tracing::trace!(?kind, type_name = %self.value.type_name(), "converting root value");

        match (kind, self.value) {
            (ValueKind::Entity | ValueKind::ValueObject, Value::Object(obj)) => {
                let fields = extract_fields(*obj)?;
                self.convert_fields(&fields, 1)
            }
            (ValueKind::Opaque, other) => Err(unsupported(other)),
            (_, other) => self.convert(other, 0),
        }
    }

    /// 以嵌套位置的规则转换当前值（单字段有状态对象折叠为其字段值）
    pub fn to_primitive_value(&self) -> StateResult<JsonValue> {
        self.convert(self.value, 0)
    }

    fn convert(&self, value: &Value<'_>, depth: usize) -> StateResult<JsonValue> {
        if depth > self.config.max_depth() {
            tracing::debug!(
                max_depth = self.config.max_depth(),
                "conversion depth limit exceeded"
            );
            return Err(StateError::DepthExceeded {
                max_depth: self.config.max_depth(),
            });
        }

        match value {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => Ok(JsonValue::Number(n.clone())),
            Value::NonFinite(x) => {
                tracing::debug!(value = %x, "non-finite number cannot be converted");
                Err(StateError::NonFiniteNumber { value: *x })
            }
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::List(items) => items
                .iter()
                .map(|item| self.convert(item, depth + 1))
                .collect::<StateResult<Vec<_>>>()
                .map(JsonValue::Array),
            Value::Map(map) => self.convert_fields(map, depth + 1),
            Value::DateTime(dt) => Ok(JsonValue::String(dt.format())),
            Value::Object(obj) => {
                if !ValueParser::with_config(value, self.config).has_state() {
                    return Err(unsupported(value));
                }

                let mut fields = extract_fields(*obj)?;
                if fields.len() == 1 {
                    if let Some((name, single)) = fields.pop() {
                        tracing::trace!(
                            type_name = obj.type_name(),
                            field = %name,
                            "collapsing single-field object"
                        );
                        return self.convert(&single, depth + 1);
                    }
                }

                self.convert_fields(&fields, depth + 1)
            }
            Value::Opaque(_) => Err(unsupported(value)),
        }
    }

    fn convert_fields(&self, fields: &FieldMap<'_>, depth: usize) -> StateResult<JsonValue> {
        let mut out = serde_json::Map::with_capacity(fields.len());
        for (name, value) in fields {
            out.insert(name.clone(), self.convert(value, depth)?);
        }
        Ok(JsonValue::Object(out))
    }
}

fn unsupported(value: &Value<'_>) -> StateError {
    let type_name = value.type_name();
    tracing::debug!(%type_name, "value cannot be converted to primitives");
    StateError::UnsupportedValue { type_name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::identity::Identity;
    use crate::state::StateExtraction;
    use crate::value::ToValue;
    use crate::value_object::ValueObject;
    use crate::{entity, stateful, value_object};
    use chrono::Utc;
    use serde_json::json;

    #[value_object]
    struct DummyValue {
        my_value: String,
    }

    #[entity]
    struct DummyEntity {
        identity: Identity,
        my_value: String,
    }

    #[stateful]
    struct Plain {
        name: String,
    }

    struct Handle;

    // 同时具备实体与值对象能力的类型，用于验证分类优先级
    struct Hybrid {
        identity: Identity,
        name: String,
    }

    impl StateExtraction for Hybrid {
        fn type_name(&self) -> &'static str {
            "Hybrid"
        }

        fn constructor_params(&self) -> Option<&'static [&'static str]> {
            Some(&["identity", "name"])
        }

        fn state_values(&self) -> Vec<Value<'_>> {
            vec![self.identity.to_value(), self.name.to_value()]
        }

        fn as_entity(&self) -> Option<&dyn Entity> {
            Some(self)
        }

        fn as_value_object(&self) -> Option<&dyn ValueObject> {
            Some(self)
        }
    }

    impl Entity for Hybrid {
        fn identity(&self) -> &Identity {
            &self.identity
        }
    }

    impl ValueObject for Hybrid {}

    fn primitives() -> Vec<serde_json::Value> {
        vec![
            json!("teste"),
            json!(12345),
            json!(1),
            json!(0),
            json!(123.45),
            json!(1.0),
            json!(0.0),
            json!([1, 2, 3]),
            json!([]),
            json!(true),
            json!(false),
        ]
    }

    fn objects() -> Vec<Value<'static>> {
        vec![Value::opaque::<Handle>(), Value::opaque::<std::sync::Mutex<u8>>()]
    }

    #[test]
    fn test_primitives_classification() {
        for raw in primitives() {
            let value = raw.to_value();
            let parser = ValueParser::new(&value);
            assert!(parser.is_primitive(), "{value:?}");
            assert!(!parser.is_object(), "{value:?}");
            assert!(!parser.is_entity(), "{value:?}");
            assert!(!parser.is_value_object(), "{value:?}");
            assert_eq!(parser.kind(), ValueKind::Primitive);
        }
    }

    #[test]
    fn test_objects_classification() {
        for value in objects() {
            let parser = ValueParser::new(&value);
            assert!(parser.is_object());
            assert!(!parser.is_primitive());
            assert!(!parser.has_state());
            assert_eq!(parser.kind(), ValueKind::Opaque);
        }
    }

    #[test]
    fn test_value_object_classification() {
        let vo = DummyValue {
            my_value: "ricardo".to_string(),
        };
        let value = vo.to_value();
        let parser = ValueParser::new(&value);

        assert!(parser.is_value_object());
        assert!(!parser.is_entity());
        assert!(!parser.is_primitive());
        assert!(parser.is_object());
        assert!(parser.has_state());
        assert_eq!(parser.kind(), ValueKind::ValueObject);
    }

    #[test]
    fn test_entity_classification() {
        let entity = DummyEntity {
            identity: Identity::new("abc"),
            my_value: "ricardo".to_string(),
        };
        let value = entity.to_value();
        let parser = ValueParser::new(&value);

        assert!(parser.is_entity());
        assert!(!parser.is_value_object());
        assert!(parser.has_state());
        assert_eq!(parser.kind(), ValueKind::Entity);
    }

    // 测试同时暴露 identity() 与 value() 时实体优先
    #[test]
    fn test_entity_takes_precedence() {
        let hybrid = Hybrid {
            identity: Identity::new("abc"),
            name: "ricardo".to_string(),
        };
        let value = Value::Object(&hybrid);
        let parser = ValueParser::new(&value);

        assert!(parser.is_entity());
        assert!(parser.is_value_object());
        assert_eq!(parser.kind(), ValueKind::Entity);
    }

    #[test]
    fn test_datetime_classification() {
        let now = Utc::now();
        let value = now.to_value();
        let parser = ValueParser::new(&value);

        assert!(parser.is_datetime());
        assert!(parser.is_object());
        assert!(!parser.has_state());
        assert_eq!(parser.kind(), ValueKind::DateTime);
    }

    // 测试无能力的有状态对象按不透明对象处理
    #[test]
    fn test_plain_stateful_is_opaque() {
        let plain = Plain {
            name: "x".to_string(),
        };
        let value = plain.to_value();
        let parser = ValueParser::new(&value);

        assert!(!parser.has_state());
        assert_eq!(parser.kind(), ValueKind::Opaque);
        assert!(matches!(
            parser.to_primitives(),
            Err(StateError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_opaque_root_fails() {
        for value in objects() {
            let err = ValueParser::new(&value).to_primitives().unwrap_err();
            assert_eq!(
                err.to_string(),
                "only stateful or date/time values can be converted to primitives"
            );
        }
    }

    // 测试嵌套的不透明字段同样转换失败
    #[test]
    fn test_nested_opaque_fails() {
        let mut map = FieldMap::new();
        map.insert("handle".to_string(), Value::opaque::<Handle>());
        let value = Value::Map(map);

        assert!(matches!(
            ValueParser::new(&value).to_primitives(),
            Err(StateError::UnsupportedValue { .. })
        ));
    }

    // 测试非有限浮点数归为原始值，但转换时报错
    #[test]
    fn test_non_finite_number() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let value = raw.to_value();
            let parser = ValueParser::new(&value);

            assert_eq!(parser.kind(), ValueKind::Primitive);
            assert!(matches!(
                parser.to_primitives(),
                Err(StateError::NonFiniteNumber { .. })
            ));
        }
    }

    #[test]
    fn test_scalar_root_unchanged() {
        for raw in primitives() {
            let value = raw.to_value();
            let json = ValueParser::new(&value).to_primitives().unwrap();
            assert_eq!(json, raw);
        }
    }

    // 测试递归层级上限
    #[test]
    fn test_depth_limit() {
        let mut value = Value::from(1);
        for _ in 0..5 {
            value = Value::List(vec![value]);
        }

        let shallow = ParserConfig::builder().max_depth(3).build();
        assert!(matches!(
            ValueParser::with_config(&value, shallow).to_primitives(),
            Err(StateError::DepthExceeded { max_depth: 3 })
        ));

        let deep = ParserConfig::builder().max_depth(5).build();
        assert_eq!(
            ValueParser::with_config(&value, deep).to_primitives().unwrap(),
            json!([[[[[1]]]]])
        );
    }
}
