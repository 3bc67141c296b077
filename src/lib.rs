//! Minimal edit scripts between two sequences.
//!
//! A comparison finds the shortest list of insertions and deletions turning an
//! `older` sequence into a `newer` one, then groups it into labelled
//! [`Difference`] segments: `Unchanged`, `Deleted`, `Inserted`, or `Changed`
//! when a deleted run is directly replaced by an inserted one.
//!
//! ```
//! use differences::{compare_chars, Condition};
//!
//! let result = compare_chars("Hello, world.", "Hello, sunset.");
//! let changed = &result[1];
//! assert_eq!(changed.condition(), Condition::Changed);
//! assert_eq!(changed.older().unwrap().iter().collect::<String>(), "world");
//! assert_eq!(changed.newer().unwrap().iter().collect::<String>(), "sunset");
//! ```
//!
//! The default engine is the O(NP) algorithm of Wu, Manber, Myers and Miller.
//! Myers' O(ND) search is available through [`DiffOptions`].

mod edit;
mod error;
mod myers;
mod onp;
mod options;
mod segment;

pub use error::Error;
pub use options::{Algorithm, DiffOptions};
pub use segment::{restore_newer, restore_older, Condition, Difference};

/// Segments of one comparison, in index order.
pub type Differences<T> = Vec<Difference<T>>;

/// Compares two sequences with the default engine.
///
/// Both sides empty gives no segments. Identical inputs give a single
/// `Unchanged` segment.
///
/// ```
/// use differences::{compare, Condition};
///
/// let result = compare(&[1, 2, 3], &[1, 3, 4]);
/// let conditions: Vec<_> = result.iter().map(|d| d.condition()).collect();
/// assert_eq!(
///     conditions,
///     [Condition::Unchanged, Condition::Deleted, Condition::Unchanged, Condition::Inserted]
/// );
/// ```
pub fn compare<T: Eq + Clone>(older: &[T], newer: &[T]) -> Differences<T> {
    let script = options::unbounded(older, newer);
    options::finish(older, newer, &script)
}

/// Like [`compare`], for inputs that may be absent.
///
/// An absent side is rejected with [`Error::InvalidArgument`] rather than
/// being read as empty.
pub fn try_compare<T: Eq + Clone>(
    older: Option<&[T]>,
    newer: Option<&[T]>,
) -> Result<Differences<T>, Error> {
    let older = older.ok_or(Error::InvalidArgument("older"))?;
    let newer = newer.ok_or(Error::InvalidArgument("newer"))?;
    Ok(compare(older, newer))
}

/// Compares two strings character by character.
pub fn compare_chars(older: &str, newer: &str) -> Differences<char> {
    let older: Vec<char> = older.chars().collect();
    let newer: Vec<char> = newer.chars().collect();
    compare(&older, &newer)
}

/// Compares two texts line by line, splitting on `'\n'`.
///
/// An empty text has no lines. Joining the lines of either side with `'\n'`
/// gives back the text.
pub fn compare_lines<'a>(older: &'a str, newer: &'a str) -> Differences<&'a str> {
    compare(&split_lines(older), &split_lines(newer))
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }
    text.split('\n').collect()
}

/// Number of insertions and deletions in a minimal edit script.
pub fn edit_distance<T: Eq>(older: &[T], newer: &[T]) -> usize {
    edit::distance(&options::unbounded(older, newer))
}
