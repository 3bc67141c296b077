/// A single step through the edit graph.
/// Elements are addressed by index so nothing is cloned before segments are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    Insert(usize),       // newer index
    Delete(usize),       // older index
    Equal(usize, usize), // older, newer
}

pub(crate) type EditScript = Vec<Edit>;

/// Number of insertions and deletions in the script.
pub(crate) fn distance(script: &[Edit]) -> usize {
    script
        .iter()
        .filter(|e| !matches!(e, Edit::Equal(..)))
        .count()
}

/// Script for inputs where at least one side is empty, if it fits in `limit`.
pub(crate) fn trivial(older: usize, newer: usize, limit: Option<usize>) -> Option<EditScript> {
    debug_assert!(older == 0 || newer == 0);
    if limit.is_some_and(|l| older + newer > l) {
        return None;
    }
    Some(
        (0..older)
            .map(Edit::Delete)
            .chain((0..newer).map(Edit::Insert))
            .collect(),
    )
}
