//! 算法模块
//!
//! 包含图相关算法实现

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod topological_sort;

// 重新导出常用算法结构体
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, ShortestPaths};
pub use floyd_warshall::{DistanceMatrix, FloydWarshall};
pub use kruskal::{Kruskal, SpanningForest};
pub use prim::{Prim, PrimForest};
pub use topological_sort::{TopologicalOrder, TopologicalSort};
