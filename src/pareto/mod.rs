//! Pareto dominance over minimize-oriented objective vectors.
//!
//! Everything in this module works on plain `&[f64]` cost vectors where
//! lower is better in every position. Use [`Objective::orient`] (or
//! [`crate::data::log::Fitness::costs`]) to turn a raw fitness tuple with
//! mixed directions into such a vector first.
//!
//! - [`dominates`]: the dominance relation
//! - [`pareto_efficient_mask`]: brute-force efficiency heuristic
//! - [`sort::non_dominated_sort`]: full layering into fronts

pub mod sort;

pub use sort::{non_dominated_sort, NondominatedSort};

use std::fmt;

/// Optimization direction of one objective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Minimize => write!(f, "min"),
            Direction::Maximize => write!(f, "max"),
        }
    }
}

/// A named objective with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub name: &'static str,
    pub direction: Direction,
}

impl Objective {
    /// Map a raw value onto the minimize scale.
    pub fn orient(&self, value: f64) -> f64 {
        match self.direction {
            Direction::Minimize => value,
            Direction::Maximize => -value,
        }
    }
}

/// The three segmentation objectives, in log order.
pub const OBJECTIVES: [Objective; 3] = [
    Objective {
        name: "edge_value_fitness",
        direction: Direction::Maximize,
    },
    Objective {
        name: "connectivity_fitness",
        direction: Direction::Minimize,
    },
    Objective {
        name: "overall_deviation_fitness",
        direction: Direction::Minimize,
    },
];

/// Returns true if `a` dominates `b`: no worse in every objective and
/// strictly better in at least one.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len(), "cost vectors must have equal length");

    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Returns true if `other` is strictly worse than `point` in at least one
/// objective.
fn is_worse_somewhere(other: &[f64], point: &[f64]) -> bool {
    other.iter().zip(point.iter()).any(|(&o, &p)| o > p)
}

/// Brute-force Pareto efficiency over the whole set.
///
/// Point `i` is marked efficient iff every other point, earlier and later,
/// is strictly worse than it in at least one objective. For distinct points
/// that is exactly "dominated by nobody". Exact duplicates cover each other,
/// so every copy of a duplicated point is marked inefficient; the
/// non-dominated sort is the authoritative answer for such sets.
///
/// O(n² · m) for n points with m objectives.
pub fn pareto_efficient_mask<C: AsRef<[f64]>>(costs: &[C]) -> Vec<bool> {
    (0..costs.len())
        .map(|i| {
            let point = costs[i].as_ref();
            let earlier = costs[..i]
                .iter()
                .all(|other| is_worse_somewhere(other.as_ref(), point));
            let later = costs[i + 1..]
                .iter()
                .all(|other| is_worse_somewhere(other.as_ref(), point));
            earlier && later
        })
        .collect()
}
