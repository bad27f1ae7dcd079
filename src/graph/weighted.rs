//! 带权图模块
//!
//! 邻接表存储，每个顶点保存其出边；无向边通过 `add_both` 以两条有向边表示

use crate::config::AlgorithmConfig;
use crate::core::{check_vertex, Edge, GraphResult, Neighbor, Vertex, Weight};
use crate::services::algorithm::{Bfs, Dfs, Dijkstra, Kruskal, Prim, ShortestPaths};

/// 带权图
///
/// 顶点编号为 `[1, size]`，构建完成后算法可以多次运行。
/// `visited` 只被 DFS/BFS 使用，需要全新遍历时调用 `reset_states`
#[derive(Debug, Clone)]
pub struct Graph {
    size: usize,
    edge_size: usize,
    edges: Vec<Vec<Neighbor>>,
    edge_count: usize,
    visited: Vec<bool>,
    config: AlgorithmConfig,
}

impl Graph {
    /// 创建图，`edge_size` 仅作为边数的容量提示
    pub fn new(size: usize, edge_size: usize) -> Self {
        Self::with_config(size, edge_size, AlgorithmConfig::default())
    }

    pub fn with_config(size: usize, edge_size: usize, config: AlgorithmConfig) -> Self {
        Self {
            size,
            edge_size,
            edges: vec![Vec::new(); size + 1],
            edge_count: 0,
            visited: vec![false; size + 1],
            config,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn edge_size(&self) -> usize {
        self.edge_size
    }

    /// 已存储的有向边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// 添加有向边
    pub fn add(&mut self, from: Vertex, to: Vertex, weight: Weight) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.edges[from].push(Neighbor::new(to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// 添加无向边，自环只存一次
    pub fn add_both(&mut self, from: Vertex, to: Vertex, weight: Weight) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.add(from, to, weight)?;
        if from != to {
            self.add(to, from, weight)?;
        }
        Ok(())
    }

    /// 清空访问标记
    pub fn reset_states(&mut self) {
        self.visited = vec![false; self.size + 1];
    }

    pub fn is_visited(&self, vertex: Vertex) -> GraphResult<bool> {
        self.check_vertex(vertex)?;
        Ok(self.visited[vertex])
    }

    /// 顶点的出边，按插入顺序
    pub fn neighbors(&self, vertex: Vertex) -> GraphResult<&[Neighbor]> {
        self.check_vertex(vertex)?;
        Ok(&self.edges[vertex])
    }

    /// 按起点、插入顺序遍历所有有向边
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().enumerate().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |n| Edge::new(from, n.vertex, n.weight))
        })
    }

    pub fn edge_list(&self) -> Vec<Edge> {
        let mut list = Vec::with_capacity(self.edge_count);
        list.extend(self.edges());
        list
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edges().any(|e| e.weight < 0)
    }

    /// 每条边 (u, v, w) 是否都有对应的 (v, u, w)，按重数计
    pub fn is_symmetric(&self) -> bool {
        let mut forward = self.edge_list();
        let mut backward: Vec<Edge> = forward.iter().map(Edge::reversed).collect();
        forward.sort_unstable();
        backward.sort_unstable();
        forward == backward
    }

    pub fn check_vertex(&self, vertex: Vertex) -> GraphResult<()> {
        check_vertex(vertex, self.size)
    }

    /// 邻接表与访问标记的分离借用，供遍历算法同时读写
    pub(crate) fn traversal_state(&mut self) -> (&[Vec<Neighbor>], &mut [bool]) {
        (&self.edges, &mut self.visited)
    }

    /// 深度优先遍历，见 [`Dfs::visit`]
    pub fn dfs<F>(&mut self, start: Vertex, observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        Dfs::visit(self, start, observer)
    }

    /// 广度优先遍历，见 [`Bfs::visit`]
    pub fn bfs<F>(&mut self, start: Vertex, observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        Bfs::visit(self, start, observer)
    }

    pub fn shortest_paths(&self, start: Vertex) -> GraphResult<ShortestPaths> {
        Dijkstra::shortest_paths(self, start)
    }

    /// 最小生成森林的总权重（Kruskal）
    pub fn mst_kruskal(&self) -> GraphResult<Weight> {
        Ok(Kruskal::minimum_spanning_forest(self)?.total_weight)
    }

    /// 最小生成森林的父节点数组（Prim），根节点为 None
    pub fn mst_prim(&self) -> GraphResult<Vec<Option<Vertex>>> {
        Ok(Prim::spanning_forest(self)?.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_neighbors() {
        let mut graph = Graph::new(3, 4);
        graph.add(1, 2, 5).expect("add should succeed");
        graph.add(1, 3, -1).expect("negative weights are accepted");

        let neighbors = graph.neighbors(1).expect("vertex 1 exists");
        assert_eq!(neighbors, &[Neighbor::new(2, 5), Neighbor::new(3, -1)]);
        assert!(graph.neighbors(2).expect("vertex 2 exists").is_empty());
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_negative_weight());
    }

    #[test]
    fn test_add_both() {
        let mut graph = Graph::new(2, 2);
        graph.add_both(1, 2, 7).expect("add_both should succeed");
        assert_eq!(graph.edge_list(), vec![Edge::new(1, 2, 7), Edge::new(2, 1, 7)]);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_add_both_self_loop_once() {
        let mut graph = Graph::new(2, 1);
        graph.add_both(2, 2, 3).expect("self loop should be accepted");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_list(), vec![Edge::new(2, 2, 3)]);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_out_of_range() {
        let mut graph = Graph::new(3, 0);
        assert!(graph.add(0, 1, 1).expect_err("vertex 0").is_out_of_range());
        assert!(graph.add(1, 4, 1).expect_err("vertex 4").is_out_of_range());
        assert!(graph.add_both(4, 1, 1).is_err());
        assert!(graph.neighbors(9).is_err());
        // 失败的插入不留下半条边
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_is_symmetric() {
        let mut graph = Graph::new(3, 4);
        graph.add(1, 2, 1).expect("add should succeed");
        assert!(!graph.is_symmetric());
        graph.add(2, 1, 2).expect("add should succeed");
        assert!(!graph.is_symmetric());
        graph.add(2, 1, 1).expect("add should succeed");
        graph.add(1, 2, 2).expect("add should succeed");
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_reset_states() {
        let mut graph = Graph::new(2, 1);
        graph.add(1, 2, 1).expect("add should succeed");
        graph.dfs(1, |_, _, _| {}).expect("dfs should succeed");
        assert!(graph.is_visited(1).expect("vertex 1 exists"));
        assert!(graph.is_visited(2).expect("vertex 2 exists"));

        graph.reset_states();
        assert!(!graph.is_visited(1).expect("vertex 1 exists"));
        assert!(!graph.is_visited(2).expect("vertex 2 exists"));
        assert!(graph.is_visited(3).expect_err("vertex 3").is_out_of_range());
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(0, 0);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.is_symmetric());
    }
}
