//! 状态提取（State Extraction）
//!
//! 每个有状态对象都必须以“完整状态”构造：构造参数的名称与顺序即其字段表。
//! 由于 Rust 没有运行时反射，参数名由 `#[value_object]`、`#[entity]`、
//! `#[domain_event]`、`#[stateful]` 等宏在编译期登记；也可手动实现 [`StateExtraction`]。
//!
use std::any::{Any, TypeId};

use crate::entity::Entity;
use crate::error::{StateError, StateResult};
use crate::value::{FieldMap, Value};
use crate::value_object::ValueObject;

/// 可提取状态的对象
pub trait StateExtraction: Any {
    /// 具体类型名（用于展示）
    fn type_name(&self) -> &'static str;

    /// 登记的构造参数名（声明顺序）；`None` 表示没有接收完整状态的构造函数
    fn constructor_params(&self) -> Option<&'static [&'static str]>;

    /// 与构造参数一一对应的字段值
    fn state_values(&self) -> Vec<Value<'_>>;

    /// 实体能力探测
    fn as_entity(&self) -> Option<&dyn Entity> {
        None
    }

    /// 值对象能力探测
    fn as_value_object(&self) -> Option<&dyn ValueObject> {
        None
    }

    /// 具体类型标识，用于同类型判断
    fn state_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

/// 提取字段表：字段名 -> 原始值（按构造参数声明顺序）
pub fn extract_fields<S>(object: &S) -> StateResult<FieldMap<'_>>
where
    S: StateExtraction + ?Sized,
{
    let contract_error = || {
        tracing::debug!(
            type_name = object.type_name(),
            "object does not register its complete state"
        );
        StateError::ConstructionContract {
            type_name: object.type_name(),
        }
    };

    let params = object.constructor_params().ok_or_else(contract_error)?;
    let values = object.state_values();

    if params.len() != values.len() {
        return Err(contract_error());
    }

    Ok(params
        .iter()
        .map(|name| (*name).to_string())
        .zip(values)
        .collect())
}

/// 生成调试字符串：
///
/// ```text
/// TypeName [
///     name = value
/// ]
/// ```
pub fn extract_display_string<S>(object: &S) -> StateResult<String>
where
    S: StateExtraction + ?Sized,
{
    let fields = extract_fields(object)?;

    let lines: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("    {} = {}\n", name, render_value(value)))
        .collect();

    Ok(format!("{} [\n{}]", object.type_name(), lines.concat()))
}

/// 判断两个对象是否为同一具体类型且字段表深度相等
pub fn same_state<A, B>(a: &A, b: &B) -> bool
where
    A: StateExtraction + ?Sized,
    B: StateExtraction + ?Sized,
{
    if a.state_type_id() != b.state_type_id() {
        return false;
    }

    match (extract_fields(a), extract_fields(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

/// 单个值的展示形式；实体与多字段值对象不展开
pub(crate) fn render_value(value: &Value<'_>) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::NonFinite(x) => x.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Map(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, render_value(v)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        Value::DateTime(dt) => dt.to_string(),
        Value::Object(obj) => render_object(*obj),
        Value::Opaque(name) => format!("{name} [...]"),
    }
}

fn render_object(object: &dyn StateExtraction) -> String {
    let collapsed = if object.as_entity().is_some() {
        None
    } else {
        object
            .as_value_object()
            .and_then(|vo| vo.value().ok())
            .filter(Value::is_scalar)
            .map(|scalar| render_value(&scalar))
    };

    match collapsed {
        Some(scalar) => format!("{} [{}]", object.type_name(), scalar),
        None => format!("{} [...]", object.type_name()),
    }
}
