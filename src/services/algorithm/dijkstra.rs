//! Dijkstra算法模块
//!
//! 单源最短路径，要求边权非负

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{check_vertex, GraphError, GraphResult, Vertex, Weight};
use crate::graph::Graph;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, Eq, PartialEq)]
struct VertexDistance {
    vertex: Vertex,
    distance: Weight,
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 单源最短路径结果
///
/// `dist[v]` 为最短距离，`parent[v]` 为最短路径上的前驱；
/// 不可达顶点两者均为 None，起点的前驱为 None
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub start: Vertex,
    pub dist: Vec<Option<Weight>>,
    pub parent: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    /// 结果覆盖的顶点数
    pub fn size(&self) -> usize {
        self.dist.len().saturating_sub(1)
    }

    /// 到 `vertex` 的最短距离，不可达为 None，越界为 `OutOfRange`
    pub fn distance(&self, vertex: Vertex) -> GraphResult<Option<Weight>> {
        check_vertex(vertex, self.size())?;
        Ok(self.dist[vertex])
    }

    pub fn parent(&self, vertex: Vertex) -> GraphResult<Option<Vertex>> {
        check_vertex(vertex, self.size())?;
        Ok(self.parent[vertex])
    }

    pub fn is_reachable(&self, vertex: Vertex) -> GraphResult<bool> {
        Ok(self.distance(vertex)?.is_some())
    }

    /// 沿前驱回溯，重建从起点到 `target` 的路径
    pub fn path_to(&self, target: Vertex) -> GraphResult<Option<Vec<Vertex>>> {
        if self.distance(target)?.is_none() {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.parent[current] {
            path.push(predecessor);
            current = predecessor;
            // 未校验的负权边可能让前驱成环
            if path.len() > self.dist.len() {
                return Ok(None);
            }
        }

        if current != self.start {
            return Ok(None);
        }
        path.reverse();
        Ok(Some(path))
    }
}

impl Dijkstra {
    /// 计算从 `start` 到所有顶点的最短距离和前驱
    ///
    /// 每次取出未确定顶点中暂定距离最小者，标记为已确定并松弛其出边。
    /// 同一顶点可能多次入队，出队时已确定则丢弃。
    /// 复杂度 O((E + V) log V)
    pub fn shortest_paths(graph: &Graph, start: Vertex) -> GraphResult<ShortestPaths> {
        graph.check_vertex(start)?;
        if graph.config().validate_input && graph.has_negative_weight() {
            log::warn!("Dijkstra rejected graph with negative edge weights");
            return Err(GraphError::invalid_input("最短路径要求边权非负"));
        }

        let size = graph.size();
        let mut dist: Vec<Option<Weight>> = vec![None; size + 1];
        let mut parent: Vec<Option<Vertex>> = vec![None; size + 1];
        let mut settled = vec![false; size + 1];
        let mut to_visit: BinaryHeap<VertexDistance> = BinaryHeap::new();

        dist[start] = Some(0);
        to_visit.push(VertexDistance {
            vertex: start,
            distance: 0,
        });

        let mut settled_count = 0;
        while let Some(VertexDistance { vertex, distance }) = to_visit.pop() {
            if settled[vertex] {
                continue;
            }
            settled[vertex] = true;
            settled_count += 1;

            for edge in graph.neighbors(vertex)? {
                let next = edge.vertex;
                let new_distance = distance.checked_add(edge.weight).ok_or_else(|| {
                    log::warn!("Dijkstra path length overflowed at vertex {}", next);
                    GraphError::invalid_input("路径长度溢出")
                })?;
                if dist[next].map_or(true, |current| new_distance < current) {
                    dist[next] = Some(new_distance);
                    parent[next] = Some(vertex);
                    to_visit.push(VertexDistance {
                        vertex: next,
                        distance: new_distance,
                    });
                }
            }
        }

        log::debug!(
            "Dijkstra from {} settled {} of {} vertices",
            start,
            settled_count,
            size
        );

        Ok(ShortestPaths {
            start,
            dist,
            parent,
        })
    }

    /// 查找从起点到目标顶点的最短路径及其长度
    pub fn shortest_path(
        graph: &Graph,
        start: Vertex,
        target: Vertex,
    ) -> GraphResult<Option<(Vec<Vertex>, Weight)>> {
        graph.check_vertex(target)?;
        let paths = Self::shortest_paths(graph, start)?;
        Ok(paths.path_to(target)?.zip(paths.distance(target)?))
    }
}
