//! 状态提取与原始值转换的统一错误定义
//!
//! 本 crate 为纯计算，不存在可重试的错误：任何失败都意味着调用方的类型建模有缺陷。
//! 前两类错误的消息文本属于对外契约，调用方可能据此断言。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StateError {
    /// 类型未登记完整状态的构造参数列表
    #[error("every object containing state must have a constructor that takes its complete state")]
    ConstructionContract { type_name: &'static str },

    /// 遇到既非有状态对象、也非日期时间的对象
    #[error("only stateful or date/time values can be converted to primitives")]
    UnsupportedValue { type_name: String },

    /// NaN 与正负无穷没有对应的原始数字
    #[error("non-finite numbers cannot be converted to primitives: {value}")]
    NonFiniteNumber { value: f64 },

    /// 转换递归层级超过配置上限
    #[error("conversion depth limit exceeded: max_depth={max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

/// 统一 Result 类型别名
pub type StateResult<T> = Result<T, StateError>;
