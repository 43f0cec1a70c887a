//! Fronts of objective vectors.

use crate::error::{MoeaError, Result};
use crate::moea::Solution;
use std::path::Path;

/// An ordered sequence of objective vectors.
///
/// Every row has the same number of columns.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Front {
    points: Vec<Vec<f64>>,
}

impl Front {
    /// Creates a front from rows.
    ///
    /// Fails with [`MoeaError::MalformedFront`] if the rows have different
    /// lengths or a value is NaN or infinite.
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(first) = points.first() {
            let m = first.len();
            if let Some(pos) = points.iter().position(|p| p.len() != m) {
                return Err(MoeaError::MalformedFront {
                    line: pos + 1,
                    reason: format!("expected {m} columns, found {}", points[pos].len()),
                });
            }
        }
        if let Some(pos) = points.iter().position(|p| !is_finite_row(p)) {
            return Err(MoeaError::MalformedFront {
                line: pos + 1,
                reason: format!("non-finite value in {:?}", points[pos]),
            });
        }
        Ok(Self { points })
    }

    /// Collects the objective vectors of a population.
    ///
    /// Values are taken as they are; unevaluated solutions carry infinite
    /// objectives, which every indicator rejects with
    /// [`MoeaError::InvalidState`].
    pub fn from_solutions<S: Solution>(population: &[S]) -> Self {
        Self {
            points: population.iter().map(|s| s.objectives().to_vec()).collect(),
        }
    }

    /// Reads a front from a text file.
    ///
    /// See [`Front::parse`] for the format. Fails with
    /// [`MoeaError::NotFound`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MoeaError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let front = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), points = front.len(), "Loaded reference front");
        Ok(front)
    }

    /// Parses rows of numbers.
    ///
    /// One objective vector per line, columns separated by whitespace
    /// and/or commas. Blank lines and lines starting with `#` are skipped.
    /// `nan` and `inf` tokens are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut points: Vec<Vec<f64>> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .map(|tok| {
                    tok.parse::<f64>().map_err(|e| MoeaError::MalformedFront {
                        line: idx + 1,
                        reason: format!("{tok:?}: {e}"),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            if !is_finite_row(&row) {
                return Err(MoeaError::MalformedFront {
                    line: idx + 1,
                    reason: format!("non-finite value in {row:?}"),
                });
            }

            if let Some(first) = points.first() {
                if first.len() != row.len() {
                    return Err(MoeaError::MalformedFront {
                        line: idx + 1,
                        reason: format!("expected {} columns, found {}", first.len(), row.len()),
                    });
                }
            }
            points.push(row);
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of objectives, or `None` for an empty front.
    pub fn dimension(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.points.iter()
    }

    /// `true` if every value is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| is_finite_row(p))
    }

    /// Per-objective minimum and maximum, or `None` for an empty front.
    pub fn bounds(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        let first = self.points.first()?;
        let mut lo = first.clone();
        let mut hi = first.clone();
        for p in &self.points[1..] {
            for (k, &v) in p.iter().enumerate() {
                lo[k] = lo[k].min(v);
                hi[k] = hi[k].max(v);
            }
        }
        Some((lo, hi))
    }
}

impl<'a> IntoIterator for &'a Front {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn is_finite_row(row: &[f64]) -> bool {
    row.iter().all(|v| v.is_finite())
}

/// Euclidean distance between two objective vectors.
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Distance from `point` to the closest row of `front`.
pub(crate) fn distance_to_closest(point: &[f64], front: &Front) -> f64 {
    front
        .iter()
        .map(|q| euclidean(point, q))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_mixed_separators() {
        let front = Front::parse("# zdt1\n0.0 1.0\n0.5, 0.29\n\n1.0,\t0.0\n").unwrap();
        assert_eq!(front.len(), 3);
        assert_eq!(front.dimension(), Some(2));
        assert_eq!(front.points()[1], vec![0.5, 0.29]);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = Front::parse("1.0 2.0\n1.0 two\n").unwrap_err();
        assert!(matches!(err, MoeaError::MalformedFront { line: 2, .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Front::parse("1 2\n1 2 3\n").unwrap_err();
        assert!(matches!(err, MoeaError::MalformedFront { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_non_finite_tokens() {
        let err = Front::parse("0 1\nnan inf\n").unwrap_err();
        assert!(matches!(err, MoeaError::MalformedFront { line: 2, .. }), "got {err:?}");
        assert!(Front::parse("0 -inf\n").is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        let err = Front::new(vec![vec![0.0, 1.0], vec![f64::INFINITY, 0.0]]).unwrap_err();
        assert!(matches!(err, MoeaError::MalformedFront { line: 2, .. }));
        assert!(Front::new(vec![vec![f64::NAN]]).is_err());
    }

    #[test]
    fn test_from_unevaluated_solutions_is_not_finite() {
        let bounds: std::sync::Arc<[(f64, f64)]> = vec![(0.0, 1.0)].into();
        let unevaluated = crate::moea::RealSolution::new(vec![0.5], bounds, 2);
        let front = Front::from_solutions(&[unevaluated]);
        assert!(!front.is_finite());
        assert!(Front::new(vec![vec![0.0, 1.0]]).unwrap().is_finite());
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        assert!(Front::new(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
        assert!(Front::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0 2.0").unwrap();
        writeln!(file, "3.0 4.0").unwrap();
        let front = Front::from_file(file.path()).unwrap();
        assert_eq!(front.points(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Front::from_file(dir.path().join("missing.pf")).unwrap_err();
        assert!(matches!(err, MoeaError::NotFound { .. }));
    }

    #[test]
    fn test_bounds() {
        let front = Front::new(vec![vec![1.0, 5.0], vec![3.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let (lo, hi) = front.bounds().unwrap();
        assert_eq!(lo, vec![1.0, 2.0]);
        assert_eq!(hi, vec![3.0, 5.0]);
        assert!(Front::default().bounds().is_none());
    }

    #[test]
    fn test_distance_to_closest() {
        let front = Front::new(vec![vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
        assert!((distance_to_closest(&[3.0, 5.0], &front) - 1.0).abs() < 1e-12);
        assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }
}
