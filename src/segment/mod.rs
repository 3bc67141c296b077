mod types;
pub use types::*;

use crate::edit::Edit;
use std::mem;

/// Folds a per-element edit script into maximal labelled runs.
struct SegmentBuilder<'s, T> {
    older: &'s [T],
    newer: &'s [T],
    unchanged: Vec<T>,
    deleted: Vec<T>,
    inserted: Vec<T>,
    segments: Vec<Difference<T>>,
}

impl<'s, T: Clone> SegmentBuilder<'s, T> {
    fn new(older: &'s [T], newer: &'s [T]) -> Self {
        SegmentBuilder {
            older,
            newer,
            unchanged: vec![],
            deleted: vec![],
            inserted: vec![],
            segments: vec![],
        }
    }

    fn process(&mut self, edit: Edit) {
        match edit {
            Edit::Equal(o, _) => {
                self.flush_change();
                self.unchanged.push(self.older[o].clone());
            }
            Edit::Delete(o) => {
                self.flush_unchanged();
                self.deleted.push(self.older[o].clone());
            }
            Edit::Insert(n) => {
                self.flush_unchanged();
                self.inserted.push(self.newer[n].clone());
            }
        }
    }

    fn flush_unchanged(&mut self) {
        if !self.unchanged.is_empty() {
            let els = mem::take(&mut self.unchanged);
            self.segments.push(Difference::unchanged(els));
        }
    }

    fn flush_change(&mut self) {
        let deleted = mem::take(&mut self.deleted);
        let inserted = mem::take(&mut self.inserted);
        let segment = match (deleted.is_empty(), inserted.is_empty()) {
            (true, true) => return,
            (false, true) => Difference::deleted(deleted),
            (true, false) => Difference::inserted(inserted),
            (false, false) => Difference::changed(deleted, inserted),
        };
        self.segments.push(segment);
    }

    fn finish(mut self) -> Vec<Difference<T>> {
        self.flush_unchanged();
        self.flush_change();
        self.segments
    }
}

pub(crate) fn coalesce<T: Clone>(older: &[T], newer: &[T], script: &[Edit]) -> Vec<Difference<T>> {
    let mut builder = SegmentBuilder::new(older, newer);
    for edit in script {
        builder.process(*edit);
    }
    builder.finish()
}

/// Rebuilds the older sequence from a list of segments.
pub fn restore_older<T: Clone>(segments: &[Difference<T>]) -> Vec<T> {
    segments
        .iter()
        .filter_map(|s| s.older())
        .flat_map(|part| part.iter().cloned())
        .collect()
}

/// Rebuilds the newer sequence from a list of segments.
pub fn restore_newer<T: Clone>(segments: &[Difference<T>]) -> Vec<T> {
    segments
        .iter()
        .filter_map(|s| s.newer())
        .flat_map(|part| part.iter().cloned())
        .collect()
}
