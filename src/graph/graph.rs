//! 图数据结构
//!
//! 内存中的有向带权图：节点存放在 arena 中，边只保存目标节点句柄，
//! 值索引负责按值查找并保持插入顺序。

use super::edge::Edge;
use super::index::{NodeArena, ValueIndex};
use super::node::{Node, NodeId};
use crate::algorithm::{CycleDetector, PathFinder, PathResult, Traversal};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::types::NodeValue;
use std::fmt;
use tracing::debug;

/// 有向图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 配置
    config: GraphConfig,
    /// 节点 arena
    arena: NodeArena,
    /// 值索引
    index: ValueIndex,
    /// 边总数
    edge_count: usize,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            arena: NodeArena::with_capacity(config.node_capacity),
            index: ValueIndex::with_capacity(config.node_capacity),
            edge_count: 0,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 修改配置（不影响已存储的数据）
    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    // ==================== 节点操作 ====================

    /// 添加节点，值重复时报错
    pub fn add_node(&mut self, value: NodeValue) -> Result<NodeId> {
        if self.index.contains(value) {
            debug!(value, "rejected duplicate node");
            return Err(Error::DuplicateNode(value));
        }

        let id = self.arena.insert(Node::new(value));
        self.index.insert(value, id);
        debug!(value, slot = id.slot(), "node added");

        Ok(id)
    }

    /// 删除节点及所有相关的边
    ///
    /// 节点不存在时什么也不做，返回 `false`。
    pub fn remove_node(&mut self, value: NodeValue) -> bool {
        let Some(id) = self.index.remove(value) else {
            return false;
        };
        let outgoing = self.arena.remove(id).map_or(0, |node| node.out_degree());

        // 删除其他节点指向它的边
        let mut incoming = 0;
        for node in self.arena.iter_mut() {
            incoming += node.remove_edges_to(id);
        }

        self.edge_count -= outgoing + incoming;
        debug!(value, outgoing, incoming, "node removed");

        true
    }

    /// 节点是否存在
    pub fn contains(&self, value: NodeValue) -> bool {
        self.index.contains(value)
    }

    /// 通过值获取节点
    pub fn node(&self, value: NodeValue) -> Option<&Node> {
        let id = self.index.get(value)?;
        self.arena.get(id)
    }

    /// 通过值获取节点句柄
    pub fn node_id(&self, value: NodeValue) -> Option<NodeId> {
        self.index.get(value)
    }

    /// 通过句柄获取节点
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// 句柄对应的节点值
    pub fn resolve(&self, id: NodeId) -> Option<NodeValue> {
        self.arena.get(id).map(Node::value)
    }

    /// 按插入顺序返回所有节点值
    pub fn values(&self) -> impl Iterator<Item = NodeValue> + '_ {
        self.index.iter().map(|(value, _)| value)
    }

    /// 按插入顺序返回所有节点
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.index.iter().filter_map(|(_, id)| self.arena.get(id))
    }

    /// 获取节点数量
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 清空图
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.edge_count = 0;
        debug!("graph cleared");
    }

    // ==================== 边操作 ====================

    /// 添加有向边
    ///
    /// 任一端点不存在时返回 `NodeNotFound`，权重不是有限数时返回
    /// `InvalidWeight`；出错时图保持不变。
    pub fn add_edge(&mut self, from: NodeValue, to: NodeValue, weight: Option<f64>) -> Result<()> {
        let src = self.require(from)?;
        let dst = self.require(to)?;

        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(Error::InvalidWeight {
                    from,
                    to,
                    weight: w,
                });
            }
        }

        let node = self.arena.get_mut(src).ok_or(Error::NodeNotFound(from))?;
        node.push_edge(Edge::new(dst, weight));
        self.edge_count += 1;
        debug!(from, to, ?weight, "edge added");

        Ok(())
    }

    /// 删除 `from` 到 `to` 的所有边，返回删除数量
    pub fn remove_edge(&mut self, from: NodeValue, to: NodeValue) -> usize {
        let (Some(src), Some(dst)) = (self.index.get(from), self.index.get(to)) else {
            return 0;
        };
        let removed = self
            .arena
            .get_mut(src)
            .map_or(0, |node| node.remove_edges_to(dst));

        if removed > 0 {
            self.edge_count -= removed;
            debug!(from, to, removed, "edges removed");
        }
        removed
    }

    /// 获取出边 (目标值, 权重)，按添加顺序
    pub fn edges(
        &self,
        value: NodeValue,
    ) -> Result<impl Iterator<Item = (NodeValue, Option<f64>)> + '_> {
        let node = self.require_node(value)?;
        Ok(node
            .edges()
            .iter()
            .filter_map(move |edge| self.resolve(edge.dst()).map(|dst| (dst, edge.weight()))))
    }

    /// 获取两点之间所有平行边的权重
    pub fn edges_between(&self, from: NodeValue, to: NodeValue) -> Vec<Option<f64>> {
        let (Some(node), Some(dst)) = (self.node(from), self.index.get(to)) else {
            return Vec::new();
        };
        node.edges()
            .iter()
            .filter(|edge| edge.dst() == dst)
            .map(Edge::weight)
            .collect()
    }

    /// 获取边总数
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 邻居查询 ====================

    /// 获取邻居（出边指向的节点，平行边会重复出现）
    pub fn neighbors(&self, value: NodeValue) -> Result<Vec<NodeValue>> {
        let node = self.require_node(value)?;
        Ok(node
            .edges()
            .iter()
            .filter_map(|edge| self.resolve(edge.dst()))
            .collect())
    }

    /// 获取前驱（有边指向该节点的节点，按插入顺序，每条边一项）
    pub fn predecessors(&self, value: NodeValue) -> Result<Vec<NodeValue>> {
        let id = self.require(value)?;
        let mut result = Vec::new();
        for node in self.nodes() {
            for edge in node.edges() {
                if edge.dst() == id {
                    result.push(node.value());
                }
            }
        }
        Ok(result)
    }

    /// 获取出度
    pub fn out_degree(&self, value: NodeValue) -> Result<usize> {
        Ok(self.require_node(value)?.out_degree())
    }

    /// 获取入度
    pub fn in_degree(&self, value: NodeValue) -> Result<usize> {
        let id = self.require(value)?;
        Ok(self
            .nodes()
            .flat_map(|node| node.edges())
            .filter(|edge| edge.dst() == id)
            .count())
    }

    // ==================== 算法 ====================

    /// 深度优先遍历
    pub fn depth_first_search(&self, start: NodeValue) -> Result<Vec<NodeValue>> {
        Traversal::new(self).depth_first(start)
    }

    /// 广度优先遍历
    pub fn breadth_first_search(&self, start: NodeValue) -> Result<Vec<NodeValue>> {
        Traversal::new(self).breadth_first(start)
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, from: NodeValue, to: NodeValue) -> Result<bool> {
        Traversal::new(self).is_reachable(from, to)
    }

    /// 图中是否存在有向环
    pub fn is_cyclic(&self) -> bool {
        CycleDetector::new(self).is_cyclic()
    }

    /// 返回第一个找到的环
    pub fn find_cycle(&self) -> Option<Vec<NodeValue>> {
        CycleDetector::new(self).find_cycle()
    }

    /// 最短路径，不可达时返回 `Ok(None)`
    pub fn shortest_path(&self, start: NodeValue, end: NodeValue) -> Result<Option<PathResult>> {
        PathFinder::new(self).shortest_path(start, end)
    }

    /// 单源最短距离
    pub fn distances(&self, start: NodeValue) -> Result<Vec<(NodeValue, f64)>> {
        PathFinder::new(self).distances(start)
    }

    // ==================== 内部工具 ====================

    pub(crate) fn require(&self, value: NodeValue) -> Result<NodeId> {
        self.index.get(value).ok_or(Error::NodeNotFound(value))
    }

    fn require_node(&self, value: NodeValue) -> Result<&Node> {
        self.node(value).ok_or(Error::NodeNotFound(value))
    }

    /// 按插入顺序返回所有节点句柄
    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.iter().map(|(_, id)| id)
    }

    /// 槽位上界，算法按槽位分配稠密数组
    pub(crate) fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }
}

/// 邻接表形式的诊断输出
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "Node {}:", node.value())?;
            for edge in node.edges() {
                match self.resolve(edge.dst()) {
                    Some(dst) => write!(f, " -> {}", dst)?,
                    None => write!(f, " -> ?")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
