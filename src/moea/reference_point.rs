//! Running utopia / nadir extrema.
//!
//! [`ReferencePoints`] keeps the elementwise minimum (utopia) and maximum
//! (nadir) of every objective vector it has been shown. Both vectors have
//! a fixed length equal to the problem's objective count and are never
//! reset during a run.

use super::types::Solution;
use crate::error::{MoeaError, Result};

/// Utopia and nadir points of a run.
///
/// Utopia starts at `+inf` and nadir at `-inf` in every component.
/// [`update`](Self::update) and friends only ever move utopia down and
/// nadir up. The explicit setters are the only way to move a component in
/// the other direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferencePoints {
    utopia: Vec<f64>,
    nadir: Vec<f64>,
}

impl ReferencePoints {
    /// Creates unset points for `number_of_objectives` objectives.
    pub fn new(number_of_objectives: usize) -> Self {
        Self {
            utopia: vec![f64::INFINITY; number_of_objectives],
            nadir: vec![f64::NEG_INFINITY; number_of_objectives],
        }
    }

    /// Number of objectives tracked.
    pub fn len(&self) -> usize {
        self.utopia.len()
    }

    /// Returns `true` when no objectives are tracked.
    pub fn is_empty(&self) -> bool {
        self.utopia.is_empty()
    }

    /// The utopia point (best value seen per objective).
    pub fn utopia(&self) -> &[f64] {
        &self.utopia
    }

    /// The nadir point (worst value seen per objective).
    pub fn nadir(&self) -> &[f64] {
        &self.nadir
    }

    /// Takes the elementwise minimum of the utopia point and `objectives`.
    pub fn update_utopia(&mut self, objectives: &[f64]) {
        debug_assert_eq!(objectives.len(), self.utopia.len());
        for (u, &v) in self.utopia.iter_mut().zip(objectives) {
            if v < *u {
                *u = v;
            }
        }
    }

    /// Takes the elementwise maximum of the nadir point and `objectives`.
    pub fn update_nadir(&mut self, objectives: &[f64]) {
        debug_assert_eq!(objectives.len(), self.nadir.len());
        for (n, &v) in self.nadir.iter_mut().zip(objectives) {
            if v > *n {
                *n = v;
            }
        }
    }

    /// Updates both points with one objective vector.
    pub fn update(&mut self, objectives: &[f64]) {
        self.update_utopia(objectives);
        self.update_nadir(objectives);
    }

    /// Updates the utopia point with every solution of `population`.
    pub fn update_utopia_from<S: Solution>(&mut self, population: &[S]) {
        for s in population {
            self.update_utopia(s.objectives());
        }
    }

    /// Updates the nadir point with every solution of `population`.
    pub fn update_nadir_from<S: Solution>(&mut self, population: &[S]) {
        for s in population {
            self.update_nadir(s.objectives());
        }
    }

    /// Updates both points with every solution of `population`.
    pub fn update_from<S: Solution>(&mut self, population: &[S]) {
        for s in population {
            self.update(s.objectives());
        }
    }

    /// Returns utopia component `index`.
    pub fn utopia_value(&self, index: usize) -> Result<f64> {
        self.utopia
            .get(index)
            .copied()
            .ok_or(MoeaError::OutOfRange { index, len: self.utopia.len() })
    }

    /// Returns nadir component `index`.
    pub fn nadir_value(&self, index: usize) -> Result<f64> {
        self.nadir
            .get(index)
            .copied()
            .ok_or(MoeaError::OutOfRange { index, len: self.nadir.len() })
    }

    /// Overwrites utopia component `index`.
    pub fn set_utopia_value(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.utopia.len();
        let slot = self
            .utopia
            .get_mut(index)
            .ok_or(MoeaError::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Overwrites nadir component `index`.
    pub fn set_nadir_value(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.nadir.len();
        let slot = self
            .nadir
            .get_mut(index)
            .ok_or(MoeaError::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }
}
