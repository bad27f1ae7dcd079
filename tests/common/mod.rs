//! 集成测试共享工具模块
//!
//! 提供随机图生成和路径校验辅助函数

#![allow(dead_code)]

use graphkit::{DirectedGraph, Graph, Vertex, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 随机有向图，边权在 `[0, max_weight]`
pub fn random_directed_graph(
    rng: &mut StdRng,
    size: usize,
    edges: usize,
    max_weight: Weight,
) -> Graph {
    let mut graph = Graph::new(size, edges);
    for _ in 0..edges {
        let from = rng.gen_range(1..=size);
        let to = rng.gen_range(1..=size);
        let weight = rng.gen_range(0..=max_weight);
        graph.add(from, to, weight).expect("random vertices are in range");
    }
    graph
}

/// 随机无向图，边权互不相同
pub fn random_undirected_graph(rng: &mut StdRng, size: usize, edges: usize) -> Graph {
    let mut graph = Graph::new(size, edges * 2);
    for i in 0..edges {
        let from = rng.gen_range(1..=size);
        let to = rng.gen_range(1..=size);
        // 低位用序号保证权重唯一
        let weight = rng.gen_range(0..1000) * 1000 + i as Weight;
        graph.add_both(from, to, weight).expect("random vertices are in range");
    }
    graph
}

/// 随机有向无环图：只生成小编号指向大编号的边，再按随机排列重命名顶点
pub fn random_dag(rng: &mut StdRng, size: usize, edges: usize) -> DirectedGraph {
    let mut labels: Vec<Vertex> = (1..=size).collect();
    for i in (1..labels.len()).rev() {
        let j = rng.gen_range(0..=i);
        labels.swap(i, j);
    }

    let mut graph = DirectedGraph::new(size, edges);
    for _ in 0..edges {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        if a == b {
            continue;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        graph
            .add(labels[lo], labels[hi], 1)
            .expect("labels are in range");
    }
    graph
}

/// 路径上相邻顶点之间的最小边权之和，路径不连续时为 None
pub fn path_weight(graph: &Graph, path: &[Vertex]) -> Option<Weight> {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(pair[0])
                .ok()?
                .iter()
                .filter(|n| n.vertex == pair[1])
                .map(|n| n.weight)
                .min()
        })
        .sum()
}
