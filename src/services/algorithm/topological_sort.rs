//! 拓扑排序算法模块
//!
//! 基于入度消除的 Kahn 算法，同时检测有向图中是否存在环

use std::collections::VecDeque;

use crate::core::Vertex;
use crate::graph::Graph;

/// 拓扑排序算法结构体
pub struct TopologicalSort;

/// 拓扑排序结果
///
/// `acyclic` 为 false 时 `order` 只包含环之外能被消除的顶点，调用方必须先检查该标志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    pub order: Vec<Vertex>,
    pub acyclic: bool,
}

impl TopologicalSort {
    /// 使用Kahn算法（基于入度）进行拓扑排序
    ///
    /// `in_degree` 下标与顶点编号对应，算法在其副本上递减，不修改调用方的数组
    pub fn kahn(graph: &Graph, in_degree: &[usize]) -> TopologicalOrder {
        let size = graph.size();
        let mut remaining = in_degree.to_vec();
        remaining.resize(size + 1, 0);

        // 将所有入度为0的节点加入队列
        let mut queue: VecDeque<Vertex> = (1..=size).filter(|&v| remaining[v] == 0).collect();
        let mut order = Vec::with_capacity(size);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for edge in graph.neighbors(vertex).unwrap_or_default() {
                let next = edge.vertex;
                if remaining[next] == 0 {
                    continue;
                }
                remaining[next] -= 1;
                if remaining[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        // 如果结果中的节点数不等于图中的节点数，说明存在环
        let acyclic = order.len() == size;
        log::debug!(
            "Kahn ordered {} of {} vertices, acyclic: {}",
            order.len(),
            size,
            acyclic
        );
        TopologicalOrder { order, acyclic }
    }
}
