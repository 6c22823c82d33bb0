//! 图算法模块
//!
//! 包含遍历、环检测和最短路径算法。算法不缓存任何派生状态，
//! 每次调用都读取图的当前快照。

mod cycle;
mod shortest_path;
mod traversal;

pub use cycle::CycleDetector;
pub use shortest_path::{PathFinder, PathResult};
pub use traversal::Traversal;
