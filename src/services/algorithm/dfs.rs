//! DFS算法模块
//!
//! 深度优先遍历，使用显式工作栈代替递归，长链图不会栈溢出

use crate::core::{GraphResult, Vertex, Weight};
use crate::graph::Graph;

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从 `start` 出发深度优先遍历
    ///
    /// 进入顶点时标记访问，按邻接表插入顺序立即深入每个未访问的邻居；
    /// 每条树边调用一次 `observer(from, to, weight)`。
    /// 访问标记保存在图上，未调用 `reset_states` 时已访问的顶点不会再次进入
    pub fn visit<F>(graph: &mut Graph, start: Vertex, mut observer: F) -> GraphResult<()>
    where
        F: FnMut(Vertex, Vertex, Weight),
    {
        graph.check_vertex(start)?;
        let (adjacency, visited) = graph.traversal_state();

        visited[start] = true;
        // 栈帧: (顶点, 下一条待检查的出边下标)
        let mut stack: Vec<(Vertex, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            match adjacency[vertex].get(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = edge.vertex;
                    if !visited[next] {
                        observer(vertex, next, edge.weight);
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
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
        log::trace!("DFS from {} reached {} vertices", start, order.len());
        Ok(order)
    }
}
