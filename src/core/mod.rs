pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{check_vertex, GraphError, GraphResult};

// 基础类型
pub use types::{Edge, Neighbor, Vertex, Weight};
