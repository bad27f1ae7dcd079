//! 图存储模块
//!
//! 包含带权图（邻接表）和维护度数的有向图

pub mod directed;
pub mod weighted;

pub use directed::DirectedGraph;
pub use weighted::Graph;
