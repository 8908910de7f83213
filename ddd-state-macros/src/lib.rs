//! ddd-state 的过程宏
//!
//! Rust 没有运行时反射，无法在运行期取得构造参数名。这里的属性宏在编译期把
//! 具名字段（即“完整状态构造函数”的参数）按声明顺序登记到 `StateExtraction` 实现中，
//! 并按宏的种类附加值对象、实体或领域事件能力。
//!
//! 字段辅助属性：`#[state(opaque)]` 将字段登记为不透明值（不可转换为原始值）。
use proc_macro::TokenStream;

mod attr;
mod codegen;
mod derive_utils;
mod domain_event;
mod entity;
mod field_utils;
mod stateful;
mod value_object;

/// 值对象宏
/// - 仅支持具名字段结构体
/// - 合并/追加派生：Debug（可关闭）, Clone, Serialize, Deserialize
/// - 实现 `StateExtraction`、`ValueObject`、`ToValue`、`PartialEq`（结构化相等）与 `Display`
/// - 参数：`#[value_object(debug = true|false, display = true|false)]`，默认均为 true
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体宏
/// - 仅支持具名字段结构体；若缺失标识字段则在最前追加 `identity: Identity`
/// - 实现 `StateExtraction`、`Entity`、`ToValue` 与 `Display`
/// - 参数：`#[entity(identity = field, debug = true|false)]`，标识字段默认 `identity`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 领域事件宏
/// - 仅支持具名字段结构体；若缺失则在最前追加 `aggregate_id: Identity`、`occurred_on: DateTime<Utc>`
/// - 实现 `StateExtraction`、`Event`、`DomainEvent` 与 `ToValue`
/// - 参数：`#[domain_event(aggregate = "...", label = "...", debug = true|false)]`
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}

/// 普通有状态类型宏（不具备实体/值对象能力）
/// - 具名字段结构体登记全部字段；单元结构体不登记构造参数，提取时报错
#[proc_macro_attribute]
pub fn stateful(attr: TokenStream, item: TokenStream) -> TokenStream {
    stateful::expand(attr, item)
}
