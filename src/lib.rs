//! digraph - 内存中的有向带权图
//!
//! 以整数值标识节点的有向图，支持：
//! - 节点与边的增删（删除节点时级联删除所有相关边）
//! - 深度优先 / 广度优先遍历
//! - 有向环检测
//! - 非负权重的单源最短路径（Dijkstra）

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod sync;
pub mod types;

// 重导出常用类型
pub use algorithm::{CycleDetector, PathFinder, PathResult, Traversal};
pub use config::{EnqueuePolicy, GraphConfig, ShortestPathStrategy};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node, NodeId};
pub use sync::SharedGraph;
pub use types::{Distance, NodeValue, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
