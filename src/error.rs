//! 错误类型定义

use crate::types::NodeValue;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(NodeValue),

    #[error("节点已存在: {0}")]
    DuplicateNode(NodeValue),

    #[error("无效的边权重 {from} -> {to}: {weight}")]
    InvalidWeight {
        from: NodeValue,
        to: NodeValue,
        weight: f64,
    },

    #[error("最短路径不支持负权重 {from} -> {to}: {weight}")]
    NegativeWeight {
        from: NodeValue,
        to: NodeValue,
        weight: f64,
    },

    #[error("路径距离溢出 {from} -> {to}")]
    DistanceOverflow { from: NodeValue, to: NodeValue },

    #[error("无效的配置: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::NodeNotFound(7).to_string(), "节点不存在: 7");
        assert_eq!(Error::DuplicateNode(3).to_string(), "节点已存在: 3");

        let e = Error::NegativeWeight {
            from: 1,
            to: 2,
            weight: -1.5,
        };
        assert_eq!(e.to_string(), "最短路径不支持负权重 1 -> 2: -1.5");

        let e = Error::DistanceOverflow { from: 2, to: 3 };
        assert_eq!(e.to_string(), "路径距离溢出 2 -> 3");
    }
}
