//! 值模型（Value）
//!
//! 用封闭的标签联合体描述有状态对象中可能出现的任意字段值，
//! 供分类器与原始值转换器统一处理。
//!
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde_json::Number;

use crate::state::{StateExtraction, same_state};

/// 日期时间的统一格式（等价于 `Y-m-d H:i:s.u`，6 位小数秒，24 小时制，不含时区）
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// 有序字段表：字段名 -> 原始值，保持构造参数声明顺序
pub type FieldMap<'a> = IndexMap<String, Value<'a>>;

/// 任意字段值
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Number(Number),
    /// NaN 与正负无穷：无法表示为数字，按位比较，转换时报错
    NonFinite(f64),
    String(String),
    List(Vec<Value<'a>>),
    Map(FieldMap<'a>),
    DateTime(DateTimeValue),
    /// 有状态对象，其能力（实体/值对象）由分类器探测
    Object(&'a dyn StateExtraction),
    /// 既无状态、也非日期时间的对象，仅记录类型名
    Opaque(&'static str),
}

impl<'a> Value<'a> {
    /// 以类型名构造不透明值
    pub fn opaque<T: ?Sized>() -> Self {
        Value::Opaque(std::any::type_name::<T>())
    }

    /// 是否为标量（null/bool/number/string，含非有限浮点数）
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Bool(_)
                | Value::Number(_)
                | Value::NonFinite(_)
                | Value::String(_)
        )
    }

    /// 运行时类型名，用于错误信息与调试输出
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Number(_) | Value::NonFinite(_) => "number".to_string(),
            Value::String(_) => "string".to_string(),
            Value::List(_) => "list".to_string(),
            Value::Map(_) => "map".to_string(),
            Value::DateTime(dt) => dt.type_name().to_string(),
            Value::Object(obj) => obj.type_name().to_string(),
            Value::Opaque(name) => (*name).to_string(),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::NonFinite(x) => f.debug_tuple("NonFinite").field(x).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Value::Object(obj) => write!(f, "Object({})", obj.type_name()),
            Value::Opaque(name) => write!(f, "Opaque({name})"),
        }
    }
}

// 深度相等：对象按具体类型与字段表递归比较；映射与键顺序无关
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::NonFinite(a), Value::NonFinite(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => same_state(*a, *b),
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

/// 日期时间值：保留运行时类型名、时区名与本地时间
#[derive(Debug, Clone)]
pub struct DateTimeValue {
    type_name: &'static str,
    timezone: String,
    local: NaiveDateTime,
    instant: DateTime<Utc>,
}

impl DateTimeValue {
    pub fn from_utc(dt: &DateTime<Utc>) -> Self {
        Self {
            type_name: "DateTime<Utc>",
            timezone: "UTC".to_string(),
            local: dt.naive_utc(),
            instant: *dt,
        }
    }

    pub fn from_fixed_offset(dt: &DateTime<FixedOffset>) -> Self {
        Self::from_zoned("DateTime<FixedOffset>", dt)
    }

    pub fn from_local(dt: &DateTime<Local>) -> Self {
        Self::from_zoned("DateTime<Local>", dt)
    }

    /// 任意时区：时区名取偏移量的显示形式（如 `+02:00`）
    pub fn from_zoned<Tz>(type_name: &'static str, dt: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            type_name,
            timezone: dt.offset().to_string(),
            local: dt.naive_local(),
            instant: dt.with_timezone(&Utc),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// 按 [`DATETIME_FORMAT`] 格式化本地时间
    pub fn format(&self) -> String {
        self.local.format(DATETIME_FORMAT).to_string()
    }
}

// 同一时刻即相等，与时区表示无关
impl PartialEq for DateTimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.type_name, self.timezone, self.format())
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value<'_> {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// 将字段转换为 [`Value`]
///
/// 有状态类型的实现由 `#[value_object]`、`#[entity]` 等宏生成。
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

impl<'v> ToValue for Value<'v> {
    fn to_value(&self) -> Value<'_> {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! impl_to_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

impl_to_value_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn float_value(value: f64) -> Value<'static> {
    Number::from_f64(value).map_or(Value::NonFinite(value), Value::Number)
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        float_value(value)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value<'_> {
        float_value(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value<'_> {
        float_value(f64::from(*self))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::String(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::String(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl<T: ToValue> ToValue for IndexMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(DateTimeValue::from_utc(self))
    }
}

impl ToValue for DateTime<FixedOffset> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(DateTimeValue::from_fixed_offset(self))
    }
}

impl ToValue for DateTime<Local> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(DateTimeValue::from_local(self))
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.clone()),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(ToValue::to_value).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}
