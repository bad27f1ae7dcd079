//! 有向图模块
//!
//! 在带权图基础上记录每个顶点的入度和出度，插入边时增量维护

use crate::config::AlgorithmConfig;
use crate::core::{GraphResult, Vertex, Weight};
use crate::graph::Graph;
use crate::services::algorithm::{ShortestPaths, TopologicalOrder, TopologicalSort};

/// 有向图
///
/// `in_degree[v]` 始终等于以 `v` 为终点的边数
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    graph: Graph,
    out_degree: Vec<usize>,
    in_degree: Vec<usize>,
}

impl DirectedGraph {
    pub fn new(size: usize, edge_size: usize) -> Self {
        Self::with_config(size, edge_size, AlgorithmConfig::default())
    }

    pub fn with_config(size: usize, edge_size: usize, config: AlgorithmConfig) -> Self {
        Self {
            graph: Graph::with_config(size, edge_size, config),
            out_degree: vec![0; size + 1],
            in_degree: vec![0; size + 1],
        }
    }

    /// 底层带权图
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn size(&self) -> usize {
        self.graph.size()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn add(&mut self, from: Vertex, to: Vertex, weight: Weight) -> GraphResult<()> {
        self.graph.add(from, to, weight)?;
        self.out_degree[from] += 1;
        self.in_degree[to] += 1;
        Ok(())
    }

    pub fn in_degree(&self, vertex: Vertex) -> GraphResult<usize> {
        self.graph.check_vertex(vertex)?;
        Ok(self.in_degree[vertex])
    }

    pub fn out_degree(&self, vertex: Vertex) -> GraphResult<usize> {
        self.graph.check_vertex(vertex)?;
        Ok(self.out_degree[vertex])
    }

    /// 入度数组，下标 0 不使用
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// 入度为 0 的顶点（没有前驱）
    pub fn source_vertices(&self) -> Vec<Vertex> {
        (1..=self.size())
            .filter(|&v| self.in_degree[v] == 0)
            .collect()
    }

    /// 出度为 0 的顶点（没有后继）
    pub fn sink_vertices(&self) -> Vec<Vertex> {
        (1..=self.size())
            .filter(|&v| self.out_degree[v] == 0)
            .collect()
    }

    /// Kahn 拓扑排序，在入度副本上运行，可重复调用
    pub fn top_sort(&self) -> TopologicalOrder {
        TopologicalSort::kahn(&self.graph, &self.in_degree)
    }

    pub fn reset_states(&mut self) {
        self.graph.reset_states();
    }

    pub fn dfs<F>(&mut self, start: Vertex, observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        self.graph.dfs(start, observer)
    }

    pub fn bfs<F>(&mut self, start: Vertex, observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        self.graph.bfs(start, observer)
    }

    pub fn shortest_paths(&self, start: Vertex) -> GraphResult<ShortestPaths> {
        self.graph.shortest_paths(start)
    }
}
