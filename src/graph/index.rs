//! 图索引
//!
//! 节点 arena（按句柄存取）和节点值索引（保持插入顺序）

use crate::graph::node::{Node, NodeId};
use crate::types::NodeValue;
use indexmap::IndexMap;

/// arena 槽位
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// 节点 arena
///
/// 删除节点时槽位进入空闲列表，代数加一后才会被复用。
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl NodeArena {
    /// 创建新 arena
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建预分配容量的 arena
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// 插入节点，返回句柄
    pub fn insert(&mut self, node: Node) -> NodeId {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.node = Some(node);
            return NodeId::new(slot, entry.generation);
        }

        let slot = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId::new(slot, 0)
    }

    /// 删除节点；句柄过期时返回 None
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let entry = self.slots.get_mut(id.slot())?;
        if entry.generation != id.generation() {
            return None;
        }
        let node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.slot() as u32);
        self.len -= 1;
        Some(node)
    }

    /// 按句柄获取节点
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.slot())
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.node.as_ref())
    }

    /// 按句柄获取可变节点
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.slot())
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.node.as_mut())
    }

    /// 遍历所有存活节点（槽位顺序，非插入顺序）
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.slots.iter_mut().filter_map(|entry| entry.node.as_mut())
    }

    /// 存活节点数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 槽位总数，算法据此分配按槽位索引的数组
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// 清空所有节点；槽位保留并升代，旧句柄全部失效
    pub fn clear(&mut self) {
        self.free.clear();
        for (slot, entry) in self.slots.iter_mut().enumerate().rev() {
            if entry.node.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
            }
            self.free.push(slot as u32);
        }
        self.len = 0;
    }
}

/// 节点值索引
///
/// 值到句柄的映射，迭代顺序即节点插入顺序。
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    map: IndexMap<NodeValue, NodeId>,
}

impl ValueIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(capacity),
        }
    }

    /// 添加映射
    pub fn insert(&mut self, value: NodeValue, id: NodeId) {
        self.map.insert(value, id);
    }

    /// 通过值查找句柄
    pub fn get(&self, value: NodeValue) -> Option<NodeId> {
        self.map.get(&value).copied()
    }

    pub fn contains(&self, value: NodeValue) -> bool {
        self.map.contains_key(&value)
    }

    /// 删除映射，保持其余节点的相对顺序
    pub fn remove(&mut self, value: NodeValue) -> Option<NodeId> {
        self.map.shift_remove(&value)
    }

    /// 节点在插入顺序中的位置
    pub fn rank(&self, value: NodeValue) -> Option<usize> {
        self.map.get_index_of(&value)
    }

    /// 按插入顺序遍历 (值, 句柄)
    pub fn iter(&self) -> impl Iterator<Item = (NodeValue, NodeId)> + '_ {
        self.map.iter().map(|(&value, &id)| (value, id))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_reuse_invalidates_old_handle() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(a).map(|n| n.value()), Some(1));
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());

        let c = arena.insert(Node::new(3));
        assert_eq!(c.slot(), a.slot());
        assert_ne!(c, a);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(c).map(|n| n.value()), Some(3));
        assert_eq!(arena.get(b).map(|n| n.value()), Some(2));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.slot_count(), 2);
    }

    #[test]
    fn test_value_index_keeps_order() {
        let mut arena = NodeArena::new();
        let mut index = ValueIndex::new();
        for v in [5, 1, 9, 3] {
            let id = arena.insert(Node::new(v));
            index.insert(v, id);
        }

        assert!(index.remove(1).is_some());
        assert!(index.remove(1).is_none());

        let order: Vec<_> = index.iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec![5, 9, 3]);
        assert_eq!(index.rank(9), Some(1));
        assert_eq!(index.rank(1), None);
        assert!(index.contains(3));
    }
}
