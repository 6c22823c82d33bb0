//! 图核心模块
//!
//! 定义节点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
mod node;

pub use edge::Edge;
pub use graph::Graph;
pub use index::{NodeArena, ValueIndex};
pub use node::{EdgeList, Node, NodeId};
