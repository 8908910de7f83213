//! DDD 建模基础库（ddd-state）
//!
//! 提供领域驱动设计中最基础的构件：
//! - 值对象（`value_object`）、实体（`entity`）与标识（`identity`）
//! - 领域事件（`domain_event`）及其持久化形态
//! - 状态提取（`state`）：按“完整状态构造”契约取得对象的字段表与调试字符串
//! - 值解析（`parser`）：对任意值分类，并把有状态对象图递归折叠为原始值树
//!
//! 典型用法：
//! 1. 使用 `#[value_object]`、`#[entity]`、`#[domain_event]` 声明领域类型；
//! 2. 通过 `equal_to`、`value`、`to_array` 比较与读取状态；
//! 3. 通过 `to_primitives` 将事件等对象转换为可序列化的原始值。
//!
//! ```
//! use ddd_state::value_object::ValueObject;
//! use ddd_state::value_object;
//!
//! #[value_object]
//! struct Email {
//!     address: String,
//! }
//!
//! let a = Email { address: "a@b.c".to_string() };
//! let b = Email { address: "a@b.c".to_string() };
//! assert!(a.equal_to(&b));
//! assert_eq!(a.to_primitives().unwrap(), serde_json::json!({ "address": "a@b.c" }));
//! ```
//!
pub mod config;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod identity;
pub mod parser;
pub mod state;
pub mod value;
pub mod value_object;

pub use ddd_state_macros::{domain_event, entity, stateful, value_object};

// 宏生成的代码引用 `::ddd_state::chrono` 与 `::ddd_state::serde`，用户无需直接依赖
pub use chrono;
#[doc(hidden)]
pub use serde;

// 允许在本 crate 内部通过 ::ddd_state 进行自引用，
// 以便过程宏在本 crate 的模块与单元测试中也能解析到 ::ddd_state 路径。
extern crate self as ddd_state;
