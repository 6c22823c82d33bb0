//! 通用类型定义

use std::cmp::Ordering;
use std::fmt;

/// 节点值（同时作为节点的唯一查找键）
pub type NodeValue = i64;

/// 未指定权重的边在距离计算中的取值
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// 路径距离
///
/// `f64` 没有全序，这里用 `total_cmp` 补上 `Ord`，便于放进优先队列。
/// 存入的值总是非负有限数或 `+∞`，不会出现 NaN。
#[derive(Debug, Clone, Copy)]
pub struct Distance(pub f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Distance {
    fn from(v: f64) -> Self {
        Distance(v)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering() {
        let mut ds = vec![
            Distance::INFINITY,
            Distance(3.0),
            Distance::ZERO,
            Distance(1.5),
        ];
        ds.sort();
        assert_eq!(
            ds,
            vec![
                Distance::ZERO,
                Distance(1.5),
                Distance(3.0),
                Distance::INFINITY
            ]
        );
        assert!(!Distance::INFINITY.is_finite());
    }
}
