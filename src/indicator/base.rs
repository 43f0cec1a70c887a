//! Reference-front storage shared by every indicator.

use super::front::Front;
use crate::error::{MoeaError, Result};
use std::path::Path;

/// Holds the (optional) reference Pareto front of an indicator.
///
/// The front is replaced only through the setters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceFrontHolder {
    front: Option<Front>,
}

impl ReferenceFrontHolder {
    /// Creates a holder with no front; set one later.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the front from a text file.
    ///
    /// Fails with [`MoeaError::NotFound`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            front: Some(Front::from_file(path)?),
        })
    }

    /// Stores an in-memory front.
    ///
    /// Fails with [`MoeaError::NullArgument`] if `front` is `None`.
    pub fn with_front(front: Option<Front>) -> Result<Self> {
        let front = front.ok_or(MoeaError::NullArgument("reference front"))?;
        Ok(Self { front: Some(front) })
    }

    /// Replaces the stored front.
    ///
    /// Fails with [`MoeaError::NullArgument`] if `front` is `None`; the
    /// previous front is kept in that case.
    pub fn set_reference_front(&mut self, front: Option<Front>) -> Result<()> {
        let front = front.ok_or(MoeaError::NullArgument("reference front"))?;
        self.front = Some(front);
        Ok(())
    }

    /// Replaces the stored front with one read from a file.
    pub fn set_reference_front_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.front = Some(Front::from_file(path)?);
        Ok(())
    }

    /// Removes the stored front.
    pub fn clear(&mut self) {
        self.front = None;
    }

    pub fn is_set(&self) -> bool {
        self.front.is_some()
    }

    /// The stored front.
    ///
    /// Fails with [`MoeaError::InvalidState`] if no front has been set.
    pub fn reference_front(&self) -> Result<&Front> {
        self.front
            .as_ref()
            .ok_or_else(|| MoeaError::InvalidState("no reference front has been set".into()))
    }
}

/// A scalar metric comparing an approximation front to a reference front.
pub trait QualityIndicator {
    /// Short name of the indicator.
    fn name(&self) -> &str;

    /// `true` when lower values mean a better approximation.
    fn is_lower_better(&self) -> bool;

    /// The reference-front holder.
    fn reference(&self) -> &ReferenceFrontHolder;

    /// The reference-front holder, for replacing the front.
    fn reference_mut(&mut self) -> &mut ReferenceFrontHolder;

    /// Scores `front`.
    ///
    /// Fails with [`MoeaError::InvalidState`] if no reference front is set,
    /// either front is empty or holds a NaN or infinite value, or the fronts
    /// differ in objective count. A successful score is always finite.
    fn compute(&self, front: &Front) -> Result<f64>;

    /// Replaces the reference front. See
    /// [`ReferenceFrontHolder::set_reference_front`].
    fn set_reference_front(&mut self, front: Option<Front>) -> Result<()> {
        self.reference_mut().set_reference_front(front)
    }

    /// The reference front, or [`MoeaError::InvalidState`] if unset.
    fn reference_front(&self) -> Result<&Front> {
        self.reference().reference_front()
    }

    /// `true` if score `a` is strictly better than score `b`.
    fn is_better(&self, a: f64, b: f64) -> bool {
        if self.is_lower_better() {
            a < b
        } else {
            a > b
        }
    }
}

/// Fetches the reference front and checks it against `front`.
pub(crate) fn checked_fronts<'a, I: QualityIndicator + ?Sized>(
    indicator: &'a I,
    front: &Front,
) -> Result<&'a Front> {
    let reference = indicator.reference_front()?;
    if reference.is_empty() {
        return Err(MoeaError::InvalidState("reference front is empty".into()));
    }
    if front.is_empty() {
        return Err(MoeaError::InvalidState("approximation front is empty".into()));
    }
    if !front.is_finite() {
        return Err(MoeaError::InvalidState(
            "approximation front has NaN or infinite objectives".into(),
        ));
    }
    if !reference.is_finite() {
        return Err(MoeaError::InvalidState(
            "reference front has NaN or infinite objectives".into(),
        ));
    }
    if reference.dimension() != front.dimension() {
        return Err(MoeaError::InvalidState(format!(
            "front has {:?} objectives, reference front has {:?}",
            front.dimension(),
            reference.dimension()
        )));
    }
    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front() -> Front {
        Front::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap()
    }

    #[test]
    fn test_empty_holder_is_invalid_state() {
        let holder = ReferenceFrontHolder::new();
        assert!(!holder.is_set());
        assert!(matches!(holder.reference_front(), Err(MoeaError::InvalidState(_))));
    }

    #[test]
    fn test_with_front_none_is_null_argument() {
        assert!(matches!(
            ReferenceFrontHolder::with_front(None),
            Err(MoeaError::NullArgument(_))
        ));
    }

    #[test]
    fn test_set_none_keeps_previous_front() {
        let mut holder = ReferenceFrontHolder::with_front(Some(front())).unwrap();
        assert!(matches!(holder.set_reference_front(None), Err(MoeaError::NullArgument(_))));
        assert_eq!(holder.reference_front().unwrap(), &front());
    }

    #[test]
    fn test_set_replaces_front() {
        let mut holder = ReferenceFrontHolder::new();
        holder.set_reference_front(Some(front())).unwrap();
        assert_eq!(holder.reference_front().unwrap().len(), 2);

        let other = Front::new(vec![vec![5.0, 5.0]]).unwrap();
        holder.set_reference_front(Some(other.clone())).unwrap();
        assert_eq!(holder.reference_front().unwrap(), &other);

        holder.clear();
        assert!(!holder.is_set());
    }

    struct Count(ReferenceFrontHolder);

    impl QualityIndicator for Count {
        fn name(&self) -> &str {
            "count"
        }

        fn is_lower_better(&self) -> bool {
            false
        }

        fn reference(&self) -> &ReferenceFrontHolder {
            &self.0
        }

        fn reference_mut(&mut self) -> &mut ReferenceFrontHolder {
            &mut self.0
        }

        fn compute(&self, front: &Front) -> Result<f64> {
            checked_fronts(self, front)?;
            Ok(front.len() as f64)
        }
    }

    #[test]
    fn test_compute_without_front_is_invalid_state() {
        let indicator = Count(ReferenceFrontHolder::new());
        assert!(matches!(indicator.compute(&front()), Err(MoeaError::InvalidState(_))));
    }

    #[test]
    fn test_non_finite_approximation_is_invalid_state() {
        let indicator = Count(ReferenceFrontHolder::with_front(Some(front())).unwrap());
        assert_eq!(indicator.compute(&front()).unwrap(), 2.0);

        let bounds: std::sync::Arc<[(f64, f64)]> = vec![(0.0, 1.0)].into();
        let unevaluated = crate::moea::RealSolution::new(vec![0.5], bounds, 2);
        let approx = Front::from_solutions(&[unevaluated]);
        assert!(matches!(indicator.compute(&approx), Err(MoeaError::InvalidState(_))));
    }

    #[test]
    fn test_from_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceFrontHolder::from_file(dir.path().join("nope.pf")).unwrap_err();
        assert!(matches!(err, MoeaError::NotFound { .. }));
    }
}
