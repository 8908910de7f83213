//! 解析器配置
use bon::Builder;

/// 默认最大递归层级
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// 原始值转换配置
///
/// ```
/// use ddd_state::config::ParserConfig;
///
/// let config = ParserConfig::builder().max_depth(8).build();
/// assert_eq!(config.max_depth(), 8);
/// assert_eq!(ParserConfig::default().max_depth(), 64);
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// 嵌套对象/集合的最大递归层级，超过即报错
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl ParserConfig {
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
