//! Hypervolume indicator.
//!
//! Exact computation by slicing along the last objective and recursing on
//! the remaining ones. The cost grows quickly with the number of
//! objectives; it is meant for post-hoc assessment, not for use inside the
//! generational loop.

use super::base::{checked_fronts, QualityIndicator, ReferenceFrontHolder};
use super::front::Front;
use crate::error::{MoeaError, Result};
use crate::moea::ranking::objective_cmp;

/// Volume of objective space dominated by the approximation front and
/// bounded by a reference point. Higher is better.
///
/// Unless set explicitly, the reference point is the reference front's
/// per-objective maximum pushed out by `offset` times the objective's range
/// (or by `offset` itself when the range is zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Hypervolume {
    reference: ReferenceFrontHolder,
    offset: f64,
    reference_point: Option<Vec<f64>>,
}

impl Default for Hypervolume {
    fn default() -> Self {
        Self {
            reference: ReferenceFrontHolder::new(),
            offset: 0.1,
            reference_point: None,
        }
    }
}

impl Hypervolume {
    pub fn new(reference: ReferenceFrontHolder) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    /// Sets the relative offset of the derived reference point.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset.max(0.0);
        self
    }

    /// Uses a fixed reference point instead of deriving one.
    pub fn with_reference_point(mut self, point: Vec<f64>) -> Self {
        self.reference_point = Some(point);
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The reference point used by [`QualityIndicator::compute`].
    pub fn reference_point(&self) -> Result<Vec<f64>> {
        if let Some(point) = &self.reference_point {
            return Ok(point.clone());
        }
        let (lo, hi) = self
            .reference_front()?
            .bounds()
            .ok_or_else(|| MoeaError::InvalidState("reference front is empty".into()))?;
        Ok(lo
            .iter()
            .zip(&hi)
            .map(|(&l, &h)| {
                let range = h - l;
                if range > 0.0 {
                    h + self.offset * range
                } else {
                    h + self.offset
                }
            })
            .collect())
    }
}

impl QualityIndicator for Hypervolume {
    fn name(&self) -> &str {
        "HV"
    }

    fn is_lower_better(&self) -> bool {
        false
    }

    fn reference(&self) -> &ReferenceFrontHolder {
        &self.reference
    }

    fn reference_mut(&mut self) -> &mut ReferenceFrontHolder {
        &mut self.reference
    }

    fn compute(&self, front: &Front) -> Result<f64> {
        checked_fronts(self, front)?;
        let ref_point = self.reference_point()?;
        if ref_point.iter().any(|v| !v.is_finite()) {
            return Err(MoeaError::InvalidState(format!(
                "reference point {ref_point:?} is not finite"
            )));
        }
        if Some(ref_point.len()) != front.dimension() {
            return Err(MoeaError::InvalidState(format!(
                "reference point has {} objectives, front has {:?}",
                ref_point.len(),
                front.dimension()
            )));
        }

        let points: Vec<&[f64]> = front
            .iter()
            .map(Vec::as_slice)
            .filter(|p| p.iter().zip(&ref_point).all(|(v, r)| v < r))
            .collect();
        if points.is_empty() {
            return Ok(0.0);
        }
        Ok(slice_volume(points, &ref_point))
    }
}

/// Dominated volume of `points` in the first `reference.len()` objectives.
fn slice_volume(mut points: Vec<&[f64]>, reference: &[f64]) -> f64 {
    let d = reference.len();
    if d == 1 {
        let best = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        return reference[0] - best;
    }

    let last = d - 1;
    points.sort_by(|a, b| objective_cmp(a[last], b[last]));

    let mut volume = 0.0;
    for i in 0..points.len() {
        let upper = points.get(i + 1).map_or(reference[last], |p| p[last]);
        let height = upper - points[i][last];
        if height <= 0.0 {
            continue;
        }
        let slab: Vec<&[f64]> = points[..=i].iter().map(|p| &p[..last]).collect();
        volume += height * slice_volume(slab, &reference[..last]);
    }
    volume
}
