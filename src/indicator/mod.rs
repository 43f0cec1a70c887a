//! Quality indicators for approximation fronts.
//!
//! Every indicator owns a [`ReferenceFrontHolder`] holding the reference
//! Pareto front it compares against, and implements [`QualityIndicator`].
//! Scoring without a reference front fails with
//! [`MoeaError::InvalidState`](crate::MoeaError::InvalidState).
//!
//! | Indicator | Better |
//! |---|---|
//! | [`GenerationalDistance`] | lower |
//! | [`InvertedGenerationalDistance`] | lower |
//! | [`AdditiveEpsilon`] | lower |
//! | [`Hypervolume`] | higher |
//!
//! # Example
//!
//! ```
//! use u_moea::indicator::{Front, InvertedGenerationalDistance, QualityIndicator, ReferenceFrontHolder};
//!
//! let reference = Front::parse("0.0 1.0\n0.5 0.5\n1.0 0.0\n").unwrap();
//! let igd = InvertedGenerationalDistance::new(
//!     ReferenceFrontHolder::with_front(Some(reference)).unwrap(),
//! );
//! let approx = Front::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! assert!(igd.compute(&approx).unwrap() > 0.0);
//! ```

mod base;
mod distance;
mod epsilon;
mod front;
mod hypervolume;

pub use base::{QualityIndicator, ReferenceFrontHolder};
pub use distance::{GenerationalDistance, InvertedGenerationalDistance};
pub use epsilon::AdditiveEpsilon;
pub use front::Front;
pub use hypervolume::Hypervolume;
