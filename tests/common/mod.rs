//! 集成测试共用的图构造工具

#![allow(dead_code)]

use digraph::{Graph, GraphConfig, NodeValue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 按给定的节点和边构建图
pub fn build(nodes: &[NodeValue], edges: &[(NodeValue, NodeValue, Option<f64>)]) -> Graph {
    build_with(GraphConfig::default(), nodes, edges)
}

pub fn build_with(
    config: GraphConfig,
    nodes: &[NodeValue],
    edges: &[(NodeValue, NodeValue, Option<f64>)],
) -> Graph {
    let mut graph = Graph::with_config(config);
    for &v in nodes {
        graph.add_node(v).unwrap();
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

/// 随机图：节点值打乱插入，允许自环与平行边，权重为 0..10 的整数或缺省
pub fn random_graph(seed: u64, max_nodes: usize, edge_factor: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = rng.gen_range(1..=max_nodes);

    let mut values: Vec<NodeValue> = (0..n as NodeValue).map(|v| v * 3 - 7).collect();
    values.shuffle(&mut rng);

    let mut graph = Graph::new();
    for &v in &values {
        graph.add_node(v).unwrap();
    }

    let edge_count = (n as f64 * edge_factor) as usize;
    for _ in 0..edge_count {
        let from = values[rng.gen_range(0..n)];
        let to = values[rng.gen_range(0..n)];
        let weight = if rng.gen_bool(0.2) {
            None
        } else {
            Some(rng.gen_range(0..10) as f64)
        };
        graph.add_edge(from, to, weight).unwrap();
    }

    graph
}

/// 不依赖库内遍历实现的可达集合（不动点迭代）
pub fn reachable_set(graph: &Graph, start: NodeValue) -> Vec<NodeValue> {
    let mut reached = vec![start];
    let mut changed = true;
    while changed {
        changed = false;
        for v in graph.values() {
            if reached.contains(&v) {
                continue;
            }
            let has_reached_pred = graph
                .predecessors(v)
                .unwrap()
                .iter()
                .any(|p| reached.contains(p));
            if has_reached_pred {
                reached.push(v);
                changed = true;
            }
        }
    }
    reached.sort_unstable();
    reached
}

/// Bellman-Ford 风格的距离参照（非负权重下结果与 Dijkstra 一致）
pub fn reference_distance(graph: &Graph, start: NodeValue, end: NodeValue) -> Option<f64> {
    let values: Vec<NodeValue> = graph.values().collect();
    let mut dist: Vec<f64> = values
        .iter()
        .map(|&v| if v == start { 0.0 } else { f64::INFINITY })
        .collect();

    for _ in 0..values.len() {
        for (i, &u) in values.iter().enumerate() {
            if !dist[i].is_finite() {
                continue;
            }
            for (to, weight) in graph.edges(u).unwrap() {
                let j = values.iter().position(|&v| v == to).unwrap();
                let candidate = dist[i] + weight.unwrap_or(0.0);
                if candidate < dist[j] {
                    dist[j] = candidate;
                }
            }
        }
    }

    let j = values.iter().position(|&v| v == end)?;
    dist[j].is_finite().then_some(dist[j])
}
