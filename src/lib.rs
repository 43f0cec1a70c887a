//! Generational multi-objective evolutionary optimization.
//!
//! Provides a pluggable engine for multi-objective evolutionary algorithms
//! and the tools to assess its output:
//!
//! - **Engine** ([`moea`]): a fixed generational loop (select, reproduce,
//!   evaluate, variant hook, replace) over user-supplied problems and
//!   operators, tracking the utopia and nadir points of every evaluated
//!   solution.
//! - **Replacement strategies** ([`moea::Replacement`]): single-objective
//!   truncation and ranking-and-crowding survival, interchangeable at
//!   construction time.
//! - **Quality indicators** ([`indicator`]): GD, IGD, additive epsilon and
//!   hypervolume against a reference Pareto front loaded from memory or a
//!   file.
//!
//! # Architecture
//!
//! The crate contains no problem-specific concepts. Solution encodings,
//! objective functions and variation operators are defined by consumers;
//! [`moea::RealSolution`] with SBX and polynomial mutation is provided as a
//! ready-made real-coded encoding.
//!
//! # Features
//!
//! - `parallel`: [`moea::ParallelEvaluator`] backed by rayon
//! - `serde`: `Serialize` / `Deserialize` for configuration, reference
//!   points and fronts

pub mod error;
pub mod indicator;
pub mod moea;
pub mod random;

pub use error::{MoeaError, Result};
