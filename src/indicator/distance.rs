//! Distance-based indicators: GD and IGD.

use super::base::{checked_fronts, QualityIndicator, ReferenceFrontHolder};
use super::front::{distance_to_closest, Front};
use crate::error::Result;

/// `(Σ d_i^p)^(1/p) / n` over the points of `from`, with `d_i` the distance
/// to the closest point of `to`.
fn mean_power_distance(from: &Front, to: &Front, pow: f64) -> f64 {
    let sum: f64 = from
        .iter()
        .map(|p| distance_to_closest(p, to).powf(pow))
        .sum();
    sum.powf(1.0 / pow) / from.len() as f64
}

/// Generational distance: how far the approximation lies from the
/// reference front.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationalDistance {
    reference: ReferenceFrontHolder,
    pow: f64,
}

impl Default for GenerationalDistance {
    fn default() -> Self {
        Self {
            reference: ReferenceFrontHolder::new(),
            pow: 2.0,
        }
    }
}

impl GenerationalDistance {
    pub fn new(reference: ReferenceFrontHolder) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    /// Sets the exponent `p`. Values below 1 are raised to 1.
    pub fn with_pow(mut self, pow: f64) -> Self {
        self.pow = pow.max(1.0);
        self
    }

    pub fn pow(&self) -> f64 {
        self.pow
    }
}

impl QualityIndicator for GenerationalDistance {
    fn name(&self) -> &str {
        "GD"
    }

    fn is_lower_better(&self) -> bool {
        true
    }

    fn reference(&self) -> &ReferenceFrontHolder {
        &self.reference
    }

    fn reference_mut(&mut self) -> &mut ReferenceFrontHolder {
        &mut self.reference
    }

    fn compute(&self, front: &Front) -> Result<f64> {
        let reference = checked_fronts(self, front)?;
        Ok(mean_power_distance(front, reference, self.pow))
    }
}

/// Inverted generational distance: how well the approximation covers the
/// reference front.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedGenerationalDistance {
    reference: ReferenceFrontHolder,
    pow: f64,
}

impl Default for InvertedGenerationalDistance {
    fn default() -> Self {
        Self {
            reference: ReferenceFrontHolder::new(),
            pow: 2.0,
        }
    }
}

impl InvertedGenerationalDistance {
    pub fn new(reference: ReferenceFrontHolder) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    /// Sets the exponent `p`. Values below 1 are raised to 1.
    pub fn with_pow(mut self, pow: f64) -> Self {
        self.pow = pow.max(1.0);
        self
    }

    pub fn pow(&self) -> f64 {
        self.pow
    }
}

impl QualityIndicator for InvertedGenerationalDistance {
    fn name(&self) -> &str {
        "IGD"
    }

    fn is_lower_better(&self) -> bool {
        true
    }

    fn reference(&self) -> &ReferenceFrontHolder {
        &self.reference
    }

    fn reference_mut(&mut self) -> &mut ReferenceFrontHolder {
        &mut self.reference
    }

    fn compute(&self, front: &Front) -> Result<f64> {
        let reference = checked_fronts(self, front)?;
        Ok(mean_power_distance(reference, front, self.pow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoeaError;

    fn holder(points: Vec<Vec<f64>>) -> ReferenceFrontHolder {
        ReferenceFrontHolder::with_front(Some(Front::new(points).unwrap())).unwrap()
    }

    #[test]
    fn test_gd_zero_on_reference_front() {
        let points = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
        let gd = GenerationalDistance::new(holder(points.clone()));
        let value = gd.compute(&Front::new(points).unwrap()).unwrap();
        assert!(value.abs() < 1e-12);
    }

    #[test]
    fn test_gd_known_value() {
        // Distances 1 and 1: sqrt(1 + 1) / 2
        let gd = GenerationalDistance::new(holder(vec![vec![0.0, 0.0], vec![2.0, 0.0]]));
        let approx = Front::new(vec![vec![0.0, 1.0], vec![2.0, 1.0]]).unwrap();
        let value = gd.compute(&approx).unwrap();
        assert!((value - 2f64.sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gd_pow_one_is_mean_distance() {
        let gd = GenerationalDistance::new(holder(vec![vec![0.0, 0.0]])).with_pow(1.0);
        let approx = Front::new(vec![vec![3.0, 4.0], vec![0.0, 1.0]]).unwrap();
        assert!((gd.compute(&approx).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_igd_penalises_poor_coverage() {
        let reference = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
        let igd = InvertedGenerationalDistance::new(holder(reference));

        let one_end = Front::new(vec![vec![0.0, 1.0]]).unwrap();
        let spread = Front::new(vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]]).unwrap();
        let poor = igd.compute(&one_end).unwrap();
        let good = igd.compute(&spread).unwrap();
        assert!(igd.is_better(good, poor));
        assert!(good.abs() < 1e-12);

        // GD of the single extreme point is zero: it lies on the front.
        let gd = GenerationalDistance::new(igd.reference().clone());
        assert!(gd.compute(&one_end).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_without_reference_front_is_invalid_state() {
        let approx = Front::new(vec![vec![0.0, 1.0]]).unwrap();
        assert!(matches!(
            GenerationalDistance::default().compute(&approx),
            Err(MoeaError::InvalidState(_))
        ));
        assert!(matches!(
            InvertedGenerationalDistance::default().compute(&approx),
            Err(MoeaError::InvalidState(_))
        ));
    }

    #[test]
    fn test_empty_or_mismatched_front_is_invalid_state() {
        let igd = InvertedGenerationalDistance::new(holder(vec![vec![0.0, 1.0]]));
        assert!(matches!(igd.compute(&Front::default()), Err(MoeaError::InvalidState(_))));

        let three = Front::new(vec![vec![0.0, 1.0, 2.0]]).unwrap();
        assert!(matches!(igd.compute(&three), Err(MoeaError::InvalidState(_))));
    }

    #[test]
    fn test_unevaluated_population_is_invalid_state() {
        let bounds: std::sync::Arc<[(f64, f64)]> = vec![(0.0, 1.0)].into();
        let unevaluated = crate::moea::RealSolution::new(vec![0.5], bounds, 2);
        let gd = GenerationalDistance::new(holder(vec![vec![0.0, 1.0], vec![1.0, 0.0]]));
        let err = gd.compute(&Front::from_solutions(&[unevaluated])).unwrap_err();
        assert!(matches!(err, MoeaError::InvalidState(_)), "got {err:?}");
    }

    #[test]
    fn test_set_reference_front_through_trait() {
        let mut gd = GenerationalDistance::default();
        gd.set_reference_front(Some(Front::new(vec![vec![1.0, 1.0]]).unwrap()))
            .unwrap();
        let approx = Front::new(vec![vec![1.0, 2.0]]).unwrap();
        assert!((gd.compute(&approx).unwrap() - 1.0).abs() < 1e-12);
        assert!(matches!(gd.set_reference_front(None), Err(MoeaError::NullArgument(_))));
    }
}
