//! Pareto ranking utilities.
//!
//! - [`dominance_cmp`]: Pareto dominance between two objective vectors
//! - [`non_dominated_sort`]: fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: crowding distance within one front
//! - [`objective_cmp`]: NaN-safe total order used by every objective sort
//!
//! All objectives are **minimized**.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use std::cmp::Ordering;

/// Outcome of a Pareto dominance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The left vector dominates the right one.
    Left,
    /// The right vector dominates the left one.
    Right,
    /// Neither dominates the other (including equal vectors).
    Neither,
}

/// Total order on objective values for sorting: ascending, with every NaN
/// placed after `+inf`.
///
/// `-0.0` and `0.0` compare equal so ties keep their input order under a
/// stable sort.
pub fn objective_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Compares two objective vectors for Pareto dominance.
///
/// `a` dominates `b` when it is no worse in every objective and strictly
/// better in at least one.
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better = false;
    let mut b_better = false;

    for (&va, &vb) in a.iter().zip(b) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
        if a_better && b_better {
            return Dominance::Neither;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Result of non-dominated sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Pareto rank of each solution, by input index (0 = non-dominated).
    pub ranks: Vec<usize>,

    /// Input indices grouped by front; `fronts[0]` holds rank-0 indices in
    /// ascending index order.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting over objective vectors.
///
/// Accepts anything that views as `&[f64]`: `Vec<Vec<f64>>`, or the
/// `objectives()` slices of a population.
///
/// # Complexity
/// O(m * n²) where m = number of objectives, n = number of vectors.
///
/// An empty input yields an empty ranking.
pub fn non_dominated_sort<O: AsRef<[f64]>>(objectives: &[O]) -> Ranking {
    let n = objectives.len();
    if n == 0 {
        return Ranking {
            ranks: Vec::new(),
            fronts: Vec::new(),
        };
    }

    let mut dominated_count = vec![0usize; n];
    let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref()) {
                Dominance::Left => {
                    dominates[i].push(j);
                    dominated_count[j] += 1;
                }
                Dominance::Right => {
                    dominates[j].push(i);
                    dominated_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut current: Vec<usize> = (0..n).filter(|&i| dominated_count[i] == 0).collect();
    let mut fronts = Vec::new();

    while !current.is_empty() {
        let rank = fronts.len();
        let mut next = Vec::new();
        for &i in &current {
            ranks[i] = rank;
            for &j in &dominates[i] {
                dominated_count[j] -= 1;
                if dominated_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(std::mem::replace(&mut current, next));
    }

    Ranking { ranks, fronts }
}

/// Crowding distance of each objective vector in `front`.
///
/// Boundary vectors of any objective get `f64::INFINITY`; an objective
/// whose range is zero or not finite (an infinite or NaN value) contributes
/// nothing to interior vectors. The result never contains NaN.
pub fn crowding_distance<O: AsRef<[f64]>>(front: &[O]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let value = |i: usize, k: usize| front[i].as_ref()[k];
    let m = front[0].as_ref().len();
    let mut distance = vec![0.0f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for k in 0..m {
        order.sort_by(|&a, &b| objective_cmp(value(a, k), value(b, k)));

        let first = order[0];
        let last = order[n - 1];
        distance[first] = f64::INFINITY;
        distance[last] = f64::INFINITY;

        let range = value(last, k) - value(first, k);
        if range <= 0.0 || !range.is_finite() {
            continue;
        }

        for w in order.windows(3) {
            let gap = value(w[2], k) - value(w[0], k);
            distance[w[1]] += gap / range;
        }
    }

    distance
}
