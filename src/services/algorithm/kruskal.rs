//! Kruskal算法模块
//!
//! 按边权排序构造最小生成森林，每个连通分量一棵树

use crate::core::{Edge, GraphError, GraphResult, Weight};
use crate::graph::Graph;
use crate::utils::UnionFind;

/// Kruskal算法结构体
pub struct Kruskal;

/// 最小生成森林
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    pub total_weight: Weight,
    /// 选中的边，按加入顺序
    pub edges: Vec<Edge>,
}

impl Kruskal {
    /// 计算无向图的最小生成森林
    ///
    /// 边按权重升序处理，端点属于不同集合时合并并累加权重；
    /// 重复边和平行边只会在端点已连通时被跳过。
    /// 权重相同的边之间顺序不定，总权重不受影响。复杂度 O(E log E)。
    /// 总权重超出 `Weight` 范围时返回 `InvalidInput`
    pub fn minimum_spanning_forest(graph: &Graph) -> GraphResult<SpanningForest> {
        if graph.config().validate_input && !graph.is_symmetric() {
            log::warn!("Kruskal rejected an asymmetric edge set");
            return Err(GraphError::invalid_input(
                "最小生成森林要求无向边集（每条边都有等权反向边）",
            ));
        }

        let mut edges = Vec::with_capacity(graph.edge_size().max(graph.edge_count()));
        edges.extend(graph.edges());
        edges.sort_by_key(|edge| edge.weight);

        let mut components = UnionFind::new(graph.size() + 1);
        let mut forest = SpanningForest {
            total_weight: 0,
            edges: Vec::with_capacity(graph.size().saturating_sub(1)),
        };

        for edge in edges {
            if components.union(edge.from, edge.to) {
                forest.total_weight = forest
                    .total_weight
                    .checked_add(edge.weight)
                    .ok_or_else(|| GraphError::invalid_input("生成森林总权重溢出"))?;
                forest.edges.push(edge);
            }
        }

        log::debug!(
            "Kruskal picked {} edges, total weight {}",
            forest.edges.len(),
            forest.total_weight
        );
        Ok(forest)
    }
}
