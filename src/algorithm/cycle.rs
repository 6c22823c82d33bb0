//! 环检测
//!
//! 三色标记的深度优先搜索：从每个未访问的节点出发（按插入顺序），
//! 遇到仍在当前搜索栈上的节点即说明存在回边。

use crate::graph::{Graph, Node, NodeId};
use crate::types::NodeValue;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未访问
    White,
    /// 在当前搜索栈上
    Gray,
    /// 已处理完毕
    Black,
}

/// 环检测器
pub struct CycleDetector<'g> {
    graph: &'g Graph,
}

impl<'g> CycleDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 图中是否存在有向环
    pub fn is_cyclic(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// 返回找到的第一个环的成员
    ///
    /// 从回边指向的节点开始，按边的方向排列；自环返回单个节点。
    pub fn find_cycle(&self) -> Option<Vec<NodeValue>> {
        let mut color = vec![Color::White; self.graph.slot_count()];

        for root in self.graph.ids() {
            if color[root.slot()] != Color::White {
                continue;
            }
            if let Some(cycle) = self.search(root, &mut color) {
                trace!(len = cycle.len(), "cycle found");
                return Some(cycle);
            }
        }

        None
    }

    fn search(&self, root: NodeId, color: &mut [Color]) -> Option<Vec<NodeValue>> {
        // 栈帧：(节点, 下一条待检查出边的下标)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        color[root.slot()] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let (id, cursor) = *frame;
            let edges = self.graph.node_by_id(id).map(Node::edges).unwrap_or(&[]);

            let Some(edge) = edges.get(cursor) else {
                color[id.slot()] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let dst = edge.dst();
            match color[dst.slot()] {
                Color::White => {
                    color[dst.slot()] = Color::Gray;
                    stack.push((dst, 0));
                }
                Color::Gray => return Some(self.collect_cycle(&stack, dst)),
                Color::Black => {}
            }
        }

        None
    }

    fn collect_cycle(&self, stack: &[(NodeId, usize)], entry: NodeId) -> Vec<NodeValue> {
        let start = stack
            .iter()
            .position(|&(id, _)| id == entry)
            .unwrap_or(0);
        stack[start..]
            .iter()
            .filter_map(|&(id, _)| self.graph.resolve(id))
            .collect()
    }
}
