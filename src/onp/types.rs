/// Furthest point reached on one diagonal, plus the log entry that got there.
#[derive(Debug, Clone, Copy)]
pub(super) struct Reach {
    pub y: isize,
    pub node: Option<usize>,
}

impl Default for Reach {
    fn default() -> Self {
        Reach { y: -1, node: None }
    }
}

/// The `fp` array, indexed by diagonal `k = y - x` in `-(m + 1)..=n + 1`.
pub(super) struct FurthestPoints {
    data: Vec<Reach>,
    offset: isize,
}

impl FurthestPoints {
    pub fn new(m: usize, n: usize) -> Self {
        FurthestPoints {
            data: vec![Reach::default(); m + n + 3],
            offset: m as isize + 1,
        }
    }

    pub fn get(&self, k: isize) -> Reach {
        self.data[(k + self.offset) as usize]
    }

    pub fn set(&mut self, k: isize, reach: Reach) {
        self.data[(k + self.offset) as usize] = reach;
    }
}

/// End of a snake: one non-diagonal step out of `prev`, then any run of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Point {
    pub x: isize,
    pub y: isize,
    pub prev: Option<usize>,
}

/// Append-only arena of every snake end visited during the search.
#[derive(Debug, Default)]
pub(super) struct PathLog {
    points: Vec<Point>,
}

impl PathLog {
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points from the origin snake up to `end`, in forward order.
    pub fn trace(&self, end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cursor = Some(end);
        while let Some(i) = cursor {
            let point = self.points[i];
            path.push(point);
            cursor = point.prev;
        }
        path.reverse();
        path
    }
}
