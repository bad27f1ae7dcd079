//! BFS算法模块
//!
//! 广度优先遍历，入队时标记访问，避免重复入队

use std::collections::VecDeque;

use crate::core::{GraphResult, Vertex, Weight};
use crate::graph::Graph;

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从 `start` 出发广度优先遍历，每条树边调用一次 `observer(from, to, weight)`
    pub fn visit<F>(graph: &mut Graph, start: Vertex, mut observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        graph.check_vertex(start)?;
        let (adjacency, visited) = graph.traversal_state();

        let mut queue: VecDeque<Vertex> = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for edge in &adjacency[current] {
                let next = edge.vertex;
                if !visited[next] {
                    observer(current, next, edge.weight);
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        Ok(())
    }

    /// 清空访问标记后遍历，返回按发现顺序排列的可达顶点（起点在首位）
    pub fn traverse(graph: &mut Graph, start: Vertex) -> GraphResult<Vec<Vertex>> {
        graph.check_vertex(start)?;
        graph.reset_states();
        let mut order = vec![start];
        Self::visit(graph, start, |_, to, _| order.push(to))?;
        log::trace!("BFS from {} reached {} vertices", start, order.len());
        Ok(order)
    }

    /// 从起点出发的跳数（无权距离），不可达为 None
    pub fn hop_distances(graph: &mut Graph, start: Vertex) -> GraphResult<Vec<Option<usize>>> {
        graph.check_vertex(start)?;
        graph.reset_states();
        let mut hops = vec![None; graph.size() + 1];
        hops[start] = Some(0);
        Self::visit(graph, start, |from, to, _| {
            hops[to] = hops[from].map(|h| h + 1);
        })?;
        Ok(hops)
    }
}
