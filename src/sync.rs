//! 共享图
//!
//! `Graph` 本身不是线程安全的，跨线程使用时用一把读写锁包住整张图，
//! 算法在持锁期间看到的始终是同一个快照。

use crate::graph::Graph;
use parking_lot::RwLock;
use std::sync::Arc;

/// 可在线程间共享的图句柄
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<Graph>>,
}

impl SharedGraph {
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 持读锁执行只读操作（遍历、环检测、最短路径等）
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.inner.read())
    }

    /// 持写锁执行修改操作
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// 取出当前图的副本
    pub fn snapshot(&self) -> Graph {
        self.inner.read().clone()
    }
}

impl From<Graph> for SharedGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_writers_are_serialized() {
        let shared = SharedGraph::default();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        shared.write(|g| g.add_node(t * 100 + i)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.read(|g| g.node_count()), 100);
    }

    #[test]
    fn test_read_sees_consistent_snapshot() {
        let mut graph = Graph::new();
        for v in 1..=3 {
            graph.add_node(v).unwrap();
        }
        graph.add_edge(1, 2, None).unwrap();
        graph.add_edge(2, 3, None).unwrap();
        let shared = SharedGraph::from(graph);

        let order = shared.read(|g| g.depth_first_search(1)).unwrap();
        assert_eq!(order, vec![1, 2, 3]);

        shared.write(|g| g.remove_node(2));
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.depth_first_search(1).unwrap(), vec![1]);
        assert_eq!(snapshot.edge_count(), 0);
    }
}
