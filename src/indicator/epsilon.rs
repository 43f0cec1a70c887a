//! Additive epsilon indicator.

use super::base::{checked_fronts, QualityIndicator, ReferenceFrontHolder};
use super::front::Front;
use crate::error::Result;

/// Smallest `ε` such that every reference point is weakly dominated by some
/// approximation point shifted by `-ε` in every objective.
///
/// Lower is better; the value is negative when the approximation strictly
/// dominates the whole reference front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditiveEpsilon {
    reference: ReferenceFrontHolder,
}

impl AdditiveEpsilon {
    pub fn new(reference: ReferenceFrontHolder) -> Self {
        Self { reference }
    }
}

impl QualityIndicator for AdditiveEpsilon {
    fn name(&self) -> &str {
        "EP"
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

        let eps = reference
            .iter()
            .map(|r| {
                front
                    .iter()
                    .map(|a| {
                        a.iter()
                            .zip(r)
                            .map(|(ak, rk)| ak - rk)
                            .fold(f64::NEG_INFINITY, f64::max)
                    })
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoeaError;

    fn indicator(points: Vec<Vec<f64>>) -> AdditiveEpsilon {
        AdditiveEpsilon::new(
            ReferenceFrontHolder::with_front(Some(Front::new(points).unwrap())).unwrap(),
        )
    }

    #[test]
    fn test_epsilon_zero_on_reference() {
        let points = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let ep = indicator(points.clone());
        assert_eq!(ep.compute(&Front::new(points).unwrap()).unwrap(), 0.0);
    }

    #[test]
    fn test_epsilon_shifted_front() {
        let ep = indicator(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let shifted = Front::new(vec![vec![0.25, 1.25], vec![1.25, 0.25]]).unwrap();
        assert!((ep.compute(&shifted).unwrap() - 0.25).abs() < 1e-12);

        let better = Front::new(vec![vec![-0.5, 0.5], vec![0.5, -0.5]]).unwrap();
        assert!((ep.compute(&better).unwrap() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_epsilon_missing_coverage() {
        // (1, 0) is only reached by shifting (0, 1) by 1 in the first objective.
        let ep = indicator(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let one_end = Front::new(vec![vec![0.0, 1.0]]).unwrap();
        assert!((ep.compute(&one_end).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_epsilon_requires_front() {
        let approx = Front::new(vec![vec![0.0, 1.0]]).unwrap();
        assert!(matches!(
            AdditiveEpsilon::default().compute(&approx),
            Err(MoeaError::InvalidState(_))
        ));
    }
}
