//! Fast non-dominated sorting (Deb et al., 2002).
//!
//! Layers a set of minimize-oriented cost vectors into fronts. Front 0 is
//! the set dominated by nobody; front k is the set dominated by nobody once
//! fronts 0..k-1 are removed. Inputs are addressed by index throughout, so
//! callers map results back onto their own rows without comparing values.

use super::dominates;

/// Result of non-dominated sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondominatedSort {
    /// Front of each input, by input index.
    pub ranks: Vec<usize>,
    /// Input indices grouped by front, ascending within each front.
    pub fronts: Vec<Vec<usize>>,
}

impl NondominatedSort {
    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }

    /// Indices in front 0, empty for an empty input.
    pub fn first_front(&self) -> &[usize] {
        self.fronts.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Sort `costs` into dominance layers.
///
/// O(m · n²) for n vectors with m objectives. An empty input yields no
/// fronts.
pub fn non_dominated_sort<C: AsRef<[f64]>>(costs: &[C]) -> NondominatedSort {
    let n = costs.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (costs[i].as_ref(), costs[j].as_ref());
            if dominates(a, b) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(b, a) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current.is_empty() {
        let rank = fronts.len();
        let mut next = Vec::new();
        for &i in &current {
            ranks[i] = rank;
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(current);
        current = next;
    }

    NondominatedSort { ranks, fronts }
}
