//! 统一错误处理 for graphkit
//!
//! ## 设计
//!
//! 1. 顶点越界、输入前置条件不满足等算法错误使用枚举表示
//! 2. 不可达顶点、有环图都不是错误：前者在结果中为 `None`，后者通过 `acyclic` 标志返回
//! 3. 外部错误（IO、日志）使用 `#[from]` 自动转换
//!
//! `GraphResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

use crate::core::types::Vertex;

/// 图算法错误类型
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("顶点越界: {vertex} 不在 [1, {size}] 范围内")]
    OutOfRange { vertex: Vertex, size: usize },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("日志错误: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput(message.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GraphError::OutOfRange { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GraphError::InvalidInput(_))
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(err: toml::ser::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

/// 检查顶点是否位于 `[1, size]`
pub fn check_vertex(vertex: Vertex, size: usize) -> GraphResult<()> {
    if vertex == 0 || vertex > size {
        return Err(GraphError::OutOfRange { vertex, size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vertex() {
        assert!(check_vertex(1, 3).is_ok());
        assert!(check_vertex(3, 3).is_ok());
        assert!(check_vertex(0, 3).expect_err("vertex 0 is reserved").is_out_of_range());
        assert!(check_vertex(4, 3).expect_err("vertex 4 is past the end").is_out_of_range());
    }

    #[test]
    fn test_empty_graph_rejects_everything() {
        assert!(check_vertex(1, 0).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = GraphError::OutOfRange { vertex: 7, size: 5 };
        assert_eq!(err.to_string(), "顶点越界: 7 不在 [1, 5] 范围内");

        let err = GraphError::invalid_input("负权边");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "无效输入: 负权边");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: GraphError = parse.expect_err("malformed toml").into();
        assert!(matches!(err, GraphError::Config(_)));
    }
}
