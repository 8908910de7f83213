//! 领域事件（Domain Event）
//!
//! 领域事件是已发生事实的不可变记录，携带聚合标识与足以重放/持久化的状态。
//! 基础的发布/订阅契约由 [`Event`] 表达，[`DomainEvent`] 在其上增加聚合信息与原始值转换。

mod domain_event_trait;
mod event;
mod serialized_event;

pub use domain_event_trait::DomainEvent;
pub use event::Event;
pub use serialized_event::SerializedEvent;
