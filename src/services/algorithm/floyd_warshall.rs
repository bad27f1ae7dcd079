//! Floyd-Warshall算法模块
//!
//! 全源最短路径，使用稠密距离矩阵，适用于稠密图或小图，时间复杂度O(V^3)。
//! 输入为独立的边列表，不依赖邻接表

use crate::config::AlgorithmConfig;
use crate::core::{check_vertex, Edge, GraphError, GraphResult, Vertex, Weight};

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// 全源最短距离矩阵
///
/// 下标为 `[0, size]`，0 号行列不使用；None 表示不可达
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    dist: Vec<Vec<Option<Weight>>>,
    /// 下一步矩阵，用于重建路径
    next: Vec<Vec<Option<Vertex>>>,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        let mut dist = vec![vec![None; size + 1]; size + 1];
        let mut next = vec![vec![None; size + 1]; size + 1];
        for v in 1..=size {
            dist[v][v] = Some(0);
            next[v][v] = Some(v);
        }
        Self { size, dist, next }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 获取从u到v的最短距离，不可达时为 None，顶点越界时返回 `OutOfRange`
    pub fn distance(&self, u: Vertex, v: Vertex) -> GraphResult<Option<Weight>> {
        check_vertex(u, self.size)?;
        check_vertex(v, self.size)?;
        Ok(self.dist[u][v])
    }

    /// 重建从u到v的最短路径，不可达时为 None
    pub fn reconstruct_path(&self, u: Vertex, v: Vertex) -> GraphResult<Option<Vec<Vertex>>> {
        if self.distance(u, v)?.is_none() {
            return Ok(None);
        }

        let mut path = vec![u];
        let mut current = u;
        while current != v {
            match self.next[current][v] {
                Some(step) => current = step,
                None => return Ok(None),
            }
            path.push(current);
            // 负权环会让下一步矩阵成环
            if path.len() > self.size + 1 {
                return Ok(None);
            }
        }

        Ok(Some(path))
    }

    /// 获取图的直径（最长的有限最短路径）
    pub fn diameter(&self) -> Option<Weight> {
        (1..=self.size)
            .filter_map(|u| self.farthest(u))
            .max()
    }

    /// 计算顶点的偏心距（到最远可达顶点的距离），没有其他可达顶点时为 None
    pub fn eccentricity(&self, vertex: Vertex) -> GraphResult<Option<Weight>> {
        check_vertex(vertex, self.size)?;
        Ok(self.farthest(vertex))
    }

    fn farthest(&self, vertex: Vertex) -> Option<Weight> {
        (1..=self.size)
            .filter(|&v| v != vertex)
            .filter_map(|v| self.dist[vertex][v])
            .max()
    }
}

impl FloydWarshall {
    /// 使用默认配置执行Floyd-Warshall算法
    pub fn shortest_paths(size: usize, edges: &[Edge]) -> GraphResult<DistanceMatrix> {
        Self::shortest_paths_with_config(size, edges, &AlgorithmConfig::default())
    }

    /// 执行Floyd-Warshall算法
    ///
    /// # 参数
    /// - `size`: 顶点数，顶点编号为 `[1, size]`
    /// - `edges`: 有向边列表，平行边取最小权重
    ///
    /// 允许负权边，但存在负权环时结果无意义（不做检测）。
    /// 路径长度超出 `Weight` 范围时返回 `InvalidInput`
    pub fn shortest_paths_with_config(
        size: usize,
        edges: &[Edge],
        config: &AlgorithmConfig,
    ) -> GraphResult<DistanceMatrix> {
        if config.validate_input && size > config.dense_vertex_limit {
            log::warn!(
                "Floyd-Warshall rejected {} vertices (limit {})",
                size,
                config.dense_vertex_limit
            );
            return Err(GraphError::invalid_input(format!(
                "稠密矩阵顶点数 {} 超过上限 {}",
                size, config.dense_vertex_limit
            )));
        }

        let mut result = DistanceMatrix::new(size);

        // 填充直接连接的边
        for edge in edges {
            check_vertex(edge.from, size)?;
            check_vertex(edge.to, size)?;
            let cell = &mut result.dist[edge.from][edge.to];
            if cell.map_or(true, |current| edge.weight < current) {
                *cell = Some(edge.weight);
                result.next[edge.from][edge.to] = Some(edge.to);
            }
        }

        for k in 1..=size {
            for i in 1..=size {
                let Some(dist_ik) = result.dist[i][k] else {
                    continue;
                };
                for j in 1..=size {
                    let Some(dist_kj) = result.dist[k][j] else {
                        continue;
                    };
                    let new_dist = dist_ik.checked_add(dist_kj).ok_or_else(|| {
                        log::warn!("Floyd-Warshall path length overflowed: {} -> {}", i, j);
                        GraphError::invalid_input("路径长度溢出")
                    })?;
                    if result.dist[i][j].map_or(true, |current| new_dist < current) {
                        result.dist[i][j] = Some(new_dist);
                        result.next[i][j] = result.next[i][k];
                    }
                }
            }
        }

        log::debug!(
            "Floyd-Warshall relaxed {} vertices over {} edges",
            size,
            edges.len()
        );
        Ok(result)
    }
}
