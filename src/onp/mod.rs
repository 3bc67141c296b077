//! The O(NP) sequence comparison of Wu, Manber, Myers and Miller.
//!
//! `p` counts deletions from the longer sequence, so the edit distance is
//! `Δ + 2p` with `Δ` the length difference. For similar inputs this is far
//! cheaper than the general O(ND) bound.

mod types;

use crate::edit::{self, Edit, EditScript};
use types::{FurthestPoints, PathLog, Point, Reach};

struct Search<'s, T> {
    a: &'s [T],
    b: &'s [T],
    fp: FurthestPoints,
    log: PathLog,
}

impl<T: Eq> Search<'_, T> {
    fn snake(&mut self, k: isize) {
        let below = self.fp.get(k - 1);
        let above = self.fp.get(k + 1);
        // ties go to the x step (k + 1)
        let (mut y, prev) = if below.y + 1 > above.y {
            (below.y + 1, below.node)
        } else {
            (above.y, above.node)
        };
        let mut x = y - k;
        while (x as usize) < self.a.len()
            && (y as usize) < self.b.len()
            && self.a[x as usize] == self.b[y as usize]
        {
            x += 1;
            y += 1;
        }
        let node = self.log.push(Point { x, y, prev });
        self.fp.set(k, Reach { y, node: Some(node) });
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

    // a is never the longer one
    let swapped = older.len() > newer.len();
    let (a, b) = if swapped { (newer, older) } else { (older, newer) };
    let m = a.len();
    let n = b.len();
    let delta = (n - m) as isize;

    let mut walk = Search {
        a,
        b,
        fp: FurthestPoints::new(m, n),
        log: PathLog::default(),
    };

    let mut p: isize = -1;
    loop {
        p += 1;
        let d = (delta + 2 * p) as usize;
        if limit.is_some_and(|l| d > l) {
            log::trace!("onp: gave up at distance {d} (limit {limit:?})");
            return None;
        }
        for k in -p..delta {
            walk.snake(k);
        }
        for k in (delta + 1..=delta + p).rev() {
            walk.snake(k);
        }
        walk.snake(delta);
        if walk.fp.get(delta).y == n as isize {
            break;
        }
    }

    log::trace!(
        "onp: reached ({m}, {n}) with p = {p}, {} path points logged",
        walk.log.len()
    );

    let end = walk.fp.get(delta).node?;
    Some(replay(&walk.log.trace(end), swapped))
}

/// Expands snake end points into per-element edits, mapping back to
/// older/newer when the inputs were swapped.
fn replay(points: &[Point], swapped: bool) -> EditScript {
    let step_a = |x: usize| if swapped { Edit::Insert(x) } else { Edit::Delete(x) };
    let step_b = |y: usize| if swapped { Edit::Delete(y) } else { Edit::Insert(y) };
    let equal = |x: usize, y: usize| if swapped { Edit::Equal(y, x) } else { Edit::Equal(x, y) };

    let mut script = Vec::new();
    let (mut x, mut y) = (0isize, 0isize);
    for point in points {
        let (dx, dy) = (point.x - x, point.y - y);
        if dy > dx {
            script.push(step_b(y as usize));
            y += 1;
        } else if dx > dy {
            script.push(step_a(x as usize));
            x += 1;
        }
        while x < point.x {
            script.push(equal(x as usize, y as usize));
            x += 1;
            y += 1;
        }
    }
    script
}
