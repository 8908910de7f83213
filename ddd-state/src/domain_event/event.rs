use chrono::{DateTime, Utc};

/// 发布/订阅事件的基础契约：可构造且带有标签
pub trait Event {
    /// 事件标签（形如 `order.created`）
    fn label() -> &'static str
    where
        Self: Sized;

    /// 事件发生时间
    fn occurred_on(&self) -> DateTime<Utc>;
}
