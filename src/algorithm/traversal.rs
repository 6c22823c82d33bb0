//! 遍历算法
//!
//! 深度优先与广度优先遍历，返回节点访问顺序

use crate::config::EnqueuePolicy;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::types::NodeValue;
use std::collections::VecDeque;
use tracing::trace;

/// 遍历器
pub struct Traversal<'g> {
    graph: &'g Graph,
    policy: EnqueuePolicy,
}

impl<'g> Traversal<'g> {
    /// 创建遍历器，BFS 策略取自图配置
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            policy: graph.config().bfs_policy,
        }
    }

    /// 覆盖 BFS 策略
    pub fn with_policy(mut self, policy: EnqueuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 深度优先遍历（先序）
    ///
    /// 用显式栈代替递归；出边逆序压栈、出栈时跳过已访问节点，
    /// 得到的顺序与递归先序完全相同。
    pub fn depth_first(&self, start: NodeValue) -> Result<Vec<NodeValue>> {
        let start_id = self.graph.require(start)?;

        let mut visited = vec![false; self.graph.slot_count()];
        let mut result = Vec::new();
        let mut stack = vec![start_id];

        while let Some(id) = stack.pop() {
            if visited[id.slot()] {
                continue;
            }
            let Some(node) = self.graph.node_by_id(id) else {
                continue;
            };

            visited[id.slot()] = true;
            result.push(node.value());

            for edge in node.edges().iter().rev() {
                if !visited[edge.dst().slot()] {
                    stack.push(edge.dst());
                }
            }
        }

        trace!(start, visited = result.len(), "depth-first search finished");
        Ok(result)
    }

    /// 广度优先遍历（层序）
    pub fn breadth_first(&self, start: NodeValue) -> Result<Vec<NodeValue>> {
        let start_id = self.graph.require(start)?;

        let result = match self.policy {
            EnqueuePolicy::SkipOnDequeue => self.bfs_skip_on_dequeue(start_id),
            EnqueuePolicy::SkipOnEnqueue => self.bfs_skip_on_enqueue(start_id),
        };

        trace!(start, visited = result.len(), policy = %self.policy, "breadth-first search finished");
        Ok(result)
    }

    /// 入队不去重，出队时跳过已访问节点
    fn bfs_skip_on_dequeue(&self, start: NodeId) -> Vec<NodeValue> {
        let mut visited = vec![false; self.graph.slot_count()];
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            if visited[id.slot()] {
                continue;
            }
            let Some(node) = self.graph.node_by_id(id) else {
                continue;
            };

            visited[id.slot()] = true;
            result.push(node.value());

            for edge in node.edges() {
                if !visited[edge.dst().slot()] {
                    queue.push_back(edge.dst());
                }
            }
        }

        result
    }

    /// 入队时即标记，队列中不会出现重复节点
    fn bfs_skip_on_enqueue(&self, start: NodeId) -> Vec<NodeValue> {
        let mut visited = vec![false; self.graph.slot_count()];
        let mut result = Vec::new();
        let mut queue = VecDeque::new();

        visited[start.slot()] = true;
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.graph.node_by_id(id) else {
                continue;
            };
            result.push(node.value());

            for edge in node.edges() {
                let dst = edge.dst();
                if !visited[dst.slot()] {
                    visited[dst.slot()] = true;
                    queue.push_back(dst);
                }
            }
        }

        result
    }

    /// 判断 `to` 是否可从 `from` 到达（节点总能到达自身）
    pub fn is_reachable(&self, from: NodeValue, to: NodeValue) -> Result<bool> {
        self.graph.require(to)?;
        Ok(self.breadth_first(from)?.contains(&to))
    }
}
