//! Myers' O(ND) greedy search, kept as an alternative engine.
//!
//! Every distance level snapshots the live part of the frontier, diagonals
//! `-d..=d`, so memory grows as O(D^2). Prefer the O(NP) engine when the
//! inputs may be far apart.

use crate::edit::{self, Edit, EditScript};

/// Furthest `x` per diagonal `k = x - y`.
#[derive(Clone)]
struct V {
    data: Vec<isize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> isize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: isize) {
        self.data[(k + self.offset) as usize] = val;
    }

    /// Copy of diagonals `-d..=d`, the only ones level `d` reads back.
    fn window(&self, d: isize) -> Self {
        let lo = (self.offset - d) as usize;
        let hi = (self.offset + d) as usize;
        V {
            data: self.data[lo..=hi].to_vec(),
            offset: d,
        }
    }

    /// Whether the point on diagonal `k` at distance `d` was reached by an
    /// insertion, i.e. came down from diagonal `k + 1`.
    fn from_above(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self.get(k - 1) < self.get(k + 1))
    }
}

/// Computes a minimal edit script from `older` to `newer`.
///
/// Returns `None` if the distance is larger than `limit`.
pub(crate) fn search<T: Eq>(
    older: &[T],
    newer: &[T],
    limit: Option<usize>,
) -> Option<EditScript> {
    if older.is_empty() || newer.is_empty() {
        return edit::trivial(older.len(), newer.len(), limit);
    }

    let n = older.len() as isize;
    let m = newer.len() as isize;
    let maxi = older.len() + newer.len();
    let mut v = V::new(maxi + 1);
    let mut trace: Vec<V> = Vec::new();

    for d in 0..=maxi as isize {
        if limit.is_some_and(|l| (d as usize) > l) {
            log::trace!("myers: gave up at distance {d} (limit {limit:?})");
            return None;
        }
        trace.push(v.window(d));
        for k in (-d..=d).step_by(2) {
            let mut x = if v.from_above(k, d) {
                v.get(k + 1)
            } else {
                v.get(k - 1) + 1
            };
            let mut y = x - k;
            while x < n && y < m && older[x as usize] == newer[y as usize] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                log::trace!("myers: reached ({n}, {m}) at distance {d}");
                return Some(traceback(&trace, older, newer));
            }
        }
    }
    unreachable!("the corner is reachable within {maxi} edits")
}

/// Walks the frontier snapshots backwards from the bottom-right corner.
/// `trace[d]` holds the frontier as it stood before level `d` was explored.
fn traceback<T>(trace: &[V], older: &[T], newer: &[T]) -> EditScript {
    let mut x = older.len() as isize;
    let mut y = newer.len() as isize;
    let mut script: EditScript = Vec::new();
    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let prev_k = if v.from_above(k, d) { k + 1 } else { k - 1 };
        let prev_x = if d == 0 { 0 } else { v.get(prev_k) };
        let prev_y = if d == 0 { 0 } else { prev_x - prev_k };
        while x > prev_x && y > prev_y {
            script.push(Edit::Equal((x - 1) as usize, (y - 1) as usize));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if x == prev_x {
                script.push(Edit::Insert((y - 1) as usize));
            } else {
                script.push(Edit::Delete((x - 1) as usize));
            }
        }
        x = prev_x;
        y = prev_y;
    }

    script.reverse();
    script
}
