//! 图配置
//!
//! 算法策略的选择。枚举实现了 `FromStr`，可以直接作为 clap 参数解析。

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 最短路径的最小值选取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortestPathStrategy {
    /// 每轮线性扫描未访问集合，O(V²)
    #[default]
    LinearScan,
    /// 以 (距离, 插入次序) 为优先级的优先队列
    PriorityQueue,
}

impl FromStr for ShortestPathStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "linear-scan" => Ok(Self::LinearScan),
            "priority-queue" | "pq" | "heap" => Ok(Self::PriorityQueue),
            other => Err(Error::InvalidConfig(format!(
                "未知的最短路径策略: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ShortestPathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearScan => write!(f, "linear"),
            Self::PriorityQueue => write!(f, "priority-queue"),
        }
    }
}

/// BFS 的去重时机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnqueuePolicy {
    /// 出队时跳过已访问节点，队列中允许重复
    #[default]
    SkipOnDequeue,
    /// 入队时即标记，队列中无重复
    SkipOnEnqueue,
}

impl FromStr for EnqueuePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dequeue" | "skip-on-dequeue" => Ok(Self::SkipOnDequeue),
            "enqueue" | "skip-on-enqueue" => Ok(Self::SkipOnEnqueue),
            other => Err(Error::InvalidConfig(format!("未知的 BFS 策略: {}", other))),
        }
    }
}

impl fmt::Display for EnqueuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkipOnDequeue => write!(f, "dequeue"),
            Self::SkipOnEnqueue => write!(f, "enqueue"),
        }
    }
}

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// 最短路径策略
    pub shortest_path: ShortestPathStrategy,
    /// BFS 去重策略
    pub bfs_policy: EnqueuePolicy,
    /// 预分配的节点容量
    pub node_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shortest_path(mut self, strategy: ShortestPathStrategy) -> Self {
        self.shortest_path = strategy;
        self
    }

    pub fn with_bfs_policy(mut self, policy: EnqueuePolicy) -> Self {
        self.bfs_policy = policy;
        self
    }

    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }
}
