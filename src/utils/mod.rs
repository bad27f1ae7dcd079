// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 日志模块
pub mod logging;

// 优先队列模块
pub mod priority_queue;
pub use priority_queue::IndexedMinHeap;

// 并查集模块
pub mod union_find;
pub use union_find::UnionFind;
