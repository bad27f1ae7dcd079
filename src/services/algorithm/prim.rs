//! Prim算法模块
//!
//! 逐顶点生长最小生成森林，使用支持 decrease-key 的索引堆

use crate::core::{GraphError, GraphResult, Vertex, Weight};
use crate::graph::Graph;
use crate::utils::IndexedMinHeap;

/// Prim算法结构体
pub struct Prim;

/// 连接边权重，未连接的顶点为无穷大
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Key {
    Finite(Weight),
    Infinite,
}

/// Prim 生成的森林
///
/// `parent[v]` 为 `v` 在其生成树中的父节点，根为 None；
/// `key[v]` 为连接 `v` 与父节点的边权
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimForest {
    pub parent: Vec<Option<Vertex>>,
    pub key: Vec<Option<Weight>>,
}

impl PrimForest {
    /// 森林中所有边的权重之和，超出 `Weight` 范围时返回 `InvalidInput`
    pub fn total_weight(&self) -> GraphResult<Weight> {
        self.key
            .iter()
            .flatten()
            .try_fold(0 as Weight, |total, &weight| total.checked_add(weight))
            .ok_or_else(|| GraphError::invalid_input("生成森林总权重溢出"))
    }

    /// 各棵树的根，即连通分量数
    pub fn roots(&self) -> Vec<Vertex> {
        (1..self.parent.len())
            .filter(|&v| self.parent[v].is_none())
            .collect()
    }
}

impl Prim {
    /// 计算无向图的最小生成森林
    ///
    /// 所有顶点以无穷大的键入堆；每次取出键最小的顶点，对仍在堆中且边权更小的邻居降键并记录父节点。
    /// 取出的顶点键为无穷大时，说明它不与已有的树相连，作为新树的根。
    /// 键相同时按顶点编号出堆，连通图的根为 1 号顶点。复杂度 O(E log V)
    pub fn spanning_forest(graph: &Graph) -> GraphResult<PrimForest> {
        if graph.config().validate_input && !graph.is_symmetric() {
            log::warn!("Prim rejected an asymmetric edge set");
            return Err(GraphError::invalid_input(
                "最小生成森林要求无向边集（每条边都有等权反向边）",
            ));
        }

        let size = graph.size();
        let mut forest = PrimForest {
            parent: vec![None; size + 1],
            key: vec![None; size + 1],
        };

        let mut queue = IndexedMinHeap::with_capacity(size + 1);
        for v in 1..=size {
            queue.push(v, Key::Infinite);
        }

        let mut trees = 0;
        while let Some((vertex, key)) = queue.pop() {
            if key == Key::Infinite {
                trees += 1;
                log::trace!("Prim starts tree {} at vertex {}", trees, vertex);
            }

            for edge in graph.neighbors(vertex)? {
                let next = edge.vertex;
                if queue.contains(next) && queue.decrease_key(next, Key::Finite(edge.weight)) {
                    forest.parent[next] = Some(vertex);
                    forest.key[next] = Some(edge.weight);
                }
            }
        }

        log::debug!("Prim built {} trees over {} vertices", trees, size);
        Ok(forest)
    }
}
