//! 边定义
//!
//! 有向边只记录目标节点的句柄，不拥有目标节点

use crate::graph::node::NodeId;
use crate::types::DEFAULT_WEIGHT;

/// 有向边
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// 目标节点句柄
    dst: NodeId,
    /// 可选权重
    weight: Option<f64>,
}

impl Edge {
    /// 创建新边
    pub fn new(dst: NodeId, weight: Option<f64>) -> Self {
        Self { dst, weight }
    }

    /// 获取目标节点句柄
    pub fn dst(&self) -> NodeId {
        self.dst
    }

    /// 获取创建时给定的权重
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// 获取边在距离计算中的代价，未指定权重按 0 计
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_cost() {
        let dst = NodeId::new(3, 0);

        let weighted = Edge::new(dst, Some(2.5));
        assert_eq!(weighted.dst(), dst);
        assert_eq!(weighted.weight(), Some(2.5));
        assert_eq!(weighted.cost(), 2.5);

        let unweighted = Edge::new(dst, None);
        assert_eq!(unweighted.weight(), None);
        assert_eq!(unweighted.cost(), 0.0);

        // 存储后两者在距离上无法区分
        assert_eq!(Edge::new(dst, Some(0.0)).cost(), unweighted.cost());
    }
}
