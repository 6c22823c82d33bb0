//! 最短路径算法
//!
//! Dijkstra 算法，只支持非负权重，未指定权重的边按 0 计。
//! 每轮选取距离最小的未访问节点，距离相同时取插入顺序靠前者；
//! 两种选取策略（线性扫描 / 优先队列）给出完全相同的结果。

use crate::config::ShortestPathStrategy;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::types::{Distance, NodeValue};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// 路径上的节点序列（含起点和终点）
    pub nodes: Vec<NodeValue>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

/// 单源求解的中间结果，按槽位索引
struct Solution {
    dist: Vec<f64>,
    prev: Vec<Option<NodeId>>,
}

/// 最短路径查找器
pub struct PathFinder<'g> {
    graph: &'g Graph,
    strategy: ShortestPathStrategy,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器，策略取自图配置
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            strategy: graph.config().shortest_path,
        }
    }

    /// 覆盖选取策略
    pub fn with_strategy(mut self, strategy: ShortestPathStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 查找 `start` 到 `end` 的最短路径
    ///
    /// 端点不存在返回 `NodeNotFound`；不可达返回 `Ok(None)`。
    pub fn shortest_path(&self, start: NodeValue, end: NodeValue) -> Result<Option<PathResult>> {
        let start_id = self.graph.require(start)?;
        let end_id = self.graph.require(end)?;

        let solution = self.solve(start_id)?;
        let total_weight = solution.dist[end_id.slot()];
        if !total_weight.is_finite() {
            trace!(start, end, "no path");
            return Ok(None);
        }

        // 沿前驱回溯
        let mut nodes = vec![end];
        let mut current = end_id;
        while current != start_id {
            let Some(prev) = solution.prev[current.slot()] else {
                return Ok(None);
            };
            let Some(value) = self.graph.resolve(prev) else {
                return Ok(None);
            };
            nodes.push(value);
            current = prev;
        }
        nodes.reverse();

        trace!(start, end, hops = nodes.len() - 1, total_weight, "shortest path found");
        Ok(Some(PathResult {
            length: nodes.len() - 1,
            total_weight,
            nodes,
        }))
    }

    /// 从 `start` 出发到所有可达节点的最短距离，按插入顺序
    pub fn distances(&self, start: NodeValue) -> Result<Vec<(NodeValue, f64)>> {
        let start_id = self.graph.require(start)?;
        let solution = self.solve(start_id)?;

        Ok(self
            .graph
            .ids()
            .filter_map(|id| {
                let d = solution.dist[id.slot()];
                if d.is_finite() {
                    self.graph.resolve(id).map(|value| (value, d))
                } else {
                    None
                }
            })
            .collect())
    }

    fn solve(&self, start: NodeId) -> Result<Solution> {
        let n = self.graph.slot_count();
        let mut solution = Solution {
            dist: vec![f64::INFINITY; n],
            prev: vec![None; n],
        };
        solution.dist[start.slot()] = 0.0;

        match self.strategy {
            ShortestPathStrategy::LinearScan => self.solve_linear(&mut solution)?,
            ShortestPathStrategy::PriorityQueue => self.solve_queue(start, &mut solution)?,
        }

        Ok(solution)
    }

    /// O(V²)：每轮线性扫描未访问集合
    fn solve_linear(&self, solution: &mut Solution) -> Result<()> {
        let mut unvisited: Vec<NodeId> = self.graph.ids().collect();

        while !unvisited.is_empty() {
            // 严格小于：相同距离时插入顺序靠前者胜出，+∞ 永远不会被选中
            let mut best: Option<(usize, f64)> = None;
            for (pos, id) in unvisited.iter().enumerate() {
                let d = solution.dist[id.slot()];
                if d < best.map_or(f64::INFINITY, |(_, bd)| bd) {
                    best = Some((pos, d));
                }
            }
            let Some((pos, _)) = best else {
                break;
            };

            let u = unvisited.remove(pos);
            self.relax(u, solution, |_, _| {})?;
        }

        Ok(())
    }

    /// 优先级为 (距离, 插入次序) 的逆序，出队顺序与线性扫描一致
    fn solve_queue(&self, start: NodeId, solution: &mut Solution) -> Result<()> {
        let mut rank = vec![0usize; self.graph.slot_count()];
        for (pos, id) in self.graph.ids().enumerate() {
            rank[id.slot()] = pos;
        }

        let mut queue: PriorityQueue<NodeId, Reverse<(Distance, usize)>> = PriorityQueue::new();
        queue.push(start, Reverse((Distance::ZERO, rank[start.slot()])));

        while let Some((u, _)) = queue.pop() {
            self.relax(u, solution, |v, d| {
                queue.push(v, Reverse((Distance(d), rank[v.slot()])));
            })?;
        }

        Ok(())
    }

    /// 松弛 `u` 的所有出边，距离变短时回调 `on_improve(v, 新距离)`
    fn relax<F>(&self, u: NodeId, solution: &mut Solution, mut on_improve: F) -> Result<()>
    where
        F: FnMut(NodeId, f64),
    {
        let Some(node) = self.graph.node_by_id(u) else {
            return Ok(());
        };
        let base = solution.dist[u.slot()];
        trace!(node = node.value(), distance = base, "relaxing");

        for edge in node.edges() {
            let weight = edge.cost();
            if weight < 0.0 {
                return Err(Error::NegativeWeight {
                    from: node.value(),
                    to: self.graph.resolve(edge.dst()).unwrap_or_default(),
                    weight,
                });
            }

            let v = edge.dst();
            let candidate = base + weight;
            // 两个有限值相加也可能溢出为 +∞，不能当作不可达
            if !candidate.is_finite() {
                return Err(Error::DistanceOverflow {
                    from: node.value(),
                    to: self.graph.resolve(v).unwrap_or_default(),
                });
            }
            if candidate < solution.dist[v.slot()] {
                solution.dist[v.slot()] = candidate;
                solution.prev[v.slot()] = Some(u);
                on_improve(v, candidate);
            }
        }

        Ok(())
    }
}
