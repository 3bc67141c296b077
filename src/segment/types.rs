#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a contiguous run of edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Condition {
    /// Present only in the newer sequence.
    Inserted,
    /// Present only in the older sequence.
    Deleted,
    /// A run from the older sequence replaced by a run from the newer one.
    Changed,
    /// Present in both sequences.
    Unchanged,
}

/// One labelled segment of a comparison.
///
/// Concatenating the `older` parts of every segment in order gives back the
/// older sequence, and likewise for `newer`. A part is `None` when the segment
/// takes nothing from that side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difference<T> {
    condition: Condition,
    older: Option<Vec<T>>,
    newer: Option<Vec<T>>,
}

impl<T> Difference<T> {
    pub(crate) fn inserted(newer: Vec<T>) -> Self {
        Difference {
            condition: Condition::Inserted,
            older: None,
            newer: Some(newer),
        }
    }

    pub(crate) fn deleted(older: Vec<T>) -> Self {
        Difference {
            condition: Condition::Deleted,
            older: Some(older),
            newer: None,
        }
    }

    pub(crate) fn changed(older: Vec<T>, newer: Vec<T>) -> Self {
        Difference {
            condition: Condition::Changed,
            older: Some(older),
            newer: Some(newer),
        }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Elements taken from the older sequence.
    pub fn older(&self) -> Option<&[T]> {
        self.older.as_deref()
    }

    /// Elements taken from the newer sequence.
    pub fn newer(&self) -> Option<&[T]> {
        self.newer.as_deref()
    }

    pub fn into_parts(self) -> (Condition, Option<Vec<T>>, Option<Vec<T>>) {
        (self.condition, self.older, self.newer)
    }
}

impl<T: Clone> Difference<T> {
    pub(crate) fn unchanged(els: Vec<T>) -> Self {
        Difference {
            condition: Condition::Unchanged,
            older: Some(els.clone()),
            newer: Some(els),
        }
    }
}
