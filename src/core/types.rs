//! 基础类型定义
//!
//! 顶点使用 `[1, size]` 范围内的整数标识，0 号保留不用

use serde::{Deserialize, Serialize};

/// 顶点编号
pub type Vertex = usize;

/// 边权
pub type Weight = i64;

/// 邻接表中的一条出边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub vertex: Vertex,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(vertex: Vertex, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// 有向带权边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 反向边
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((from, to, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}
