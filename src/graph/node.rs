//! 节点定义

use crate::graph::edge::Edge;
use crate::types::NodeValue;
use smallvec::SmallVec;

/// 节点句柄（arena 槽位 + 代数）
///
/// 节点删除后槽位的代数加一，旧句柄不再能解析到任何节点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    slot: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// 槽位下标，算法用它索引稠密数组
    pub fn slot(&self) -> usize {
        self.slot as usize
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// 出边列表，多数节点的出度很小
pub type EdgeList = SmallVec<[Edge; 4]>;

/// 节点
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// 节点值
    value: NodeValue,
    /// 有序出边列表
    edges: EdgeList,
}

impl Node {
    /// 创建新节点
    pub fn new(value: NodeValue) -> Self {
        Self {
            value,
            edges: SmallVec::new(),
        }
    }

    /// 获取节点值
    pub fn value(&self) -> NodeValue {
        self.value
    }

    /// 获取出边（按添加顺序）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// 删除所有指向 `dst` 的边，返回删除数量
    pub(crate) fn remove_edges_to(&mut self, dst: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.dst() != dst);
        before - self.edges.len()
    }
}
