use crate::edit::{self, Edit, EditScript};
use crate::segment::{self, Difference};
use crate::{myers, onp, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search strategy used to find the edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Wu et al. O(NP), linear space.
    #[default]
    Onp,
    /// Myers O(ND) with per-level frontier snapshots.
    Myers,
}

/// Knobs for a comparison.
///
/// ```
/// use differences::{Algorithm, Condition, DiffOptions};
///
/// let mut options = DiffOptions::new();
/// options.set_algorithm(Algorithm::Myers).set_max_edit_distance(4);
/// let result = options.compare(&[1, 2, 3], &[1, 9, 3]).unwrap();
/// assert_eq!(result[1].condition(), Condition::Changed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffOptions {
    algorithm: Algorithm,
    max_edit_distance: Option<usize>,
}

impl DiffOptions {
    /// Options using the O(NP) engine with no distance bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the search strategy.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// Abort with [`Error::EditLimitExceeded`] once the script is known to
    /// need more than `limit` insertions and deletions.
    pub fn set_max_edit_distance(&mut self, limit: usize) -> &mut Self {
        self.max_edit_distance = Some(limit);
        self
    }

    /// The configured search strategy.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configured distance bound, if any.
    pub fn max_edit_distance(&self) -> Option<usize> {
        self.max_edit_distance
    }

    /// Compares two sequences and groups the result into segments.
    pub fn compare<T: Eq + Clone>(
        &self,
        older: &[T],
        newer: &[T],
    ) -> Result<Vec<Difference<T>>, Error> {
        let script = self.script(older, newer)?;
        Ok(finish(older, newer, &script))
    }

    /// Number of insertions and deletions in a minimal script.
    pub fn edit_distance<T: Eq>(&self, older: &[T], newer: &[T]) -> Result<usize, Error> {
        Ok(edit::distance(&self.script(older, newer)?))
    }

    pub(crate) fn script<T: Eq>(&self, older: &[T], newer: &[T]) -> Result<EditScript, Error> {
        let found = match self.algorithm {
            Algorithm::Onp => onp::search(older, newer, self.max_edit_distance),
            Algorithm::Myers => myers::search(older, newer, self.max_edit_distance),
        };
        match (found, self.max_edit_distance) {
            (Some(script), _) => Ok(script),
            (None, Some(limit)) => Err(Error::EditLimitExceeded { limit }),
            (None, None) => unreachable!("unbounded search always reaches the corner"),
        }
    }
}

/// Minimal script with no distance bound.
pub(crate) fn unbounded<T: Eq>(older: &[T], newer: &[T]) -> EditScript {
    match onp::search(older, newer, None) {
        Some(script) => script,
        None => unreachable!("unbounded search always reaches the corner"),
    }
}

pub(crate) fn finish<T: Clone>(
    older: &[T],
    newer: &[T],
    script: &[Edit],
) -> Vec<Difference<T>> {
    let segments = segment::coalesce(older, newer, script);
    log::debug!(
        "compared {} older / {} newer elements: distance {}, {} segments",
        older.len(),
        newer.len(),
        edit::distance(script),
        segments.len()
    );
    segments
}
