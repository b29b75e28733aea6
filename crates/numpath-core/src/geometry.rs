//! Segment geometry for the non-crossing rule.
//!
//! Cell coordinates are treated as points in the Euclidean plane (`x = col`,
//! `y = row`), and a move between two cells is the straight segment joining them.

use crate::Position;

/// A straight segment between two cell centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point.
    pub from: Position,
    /// End point.
    pub to: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

#[expect(clippy::cast_possible_wrap)]
fn coords(p: Position) -> (i64, i64) {
    (p.col() as i64, p.row() as i64)
}

fn orientation(p: Position, q: Position, r: Position) -> Orientation {
    let (px, py) = coords(p);
    let (qx, qy) = coords(q);
    let (rx, ry) = coords(r);
    let cross = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match cross.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

// `q` lies within the bounding box of `p`-`r`; only meaningful when collinear.
fn on_segment(p: Position, q: Position, r: Position) -> bool {
    q.col() <= p.col().max(r.col())
        && q.col() >= p.col().min(r.col())
        && q.row() <= p.row().max(r.row())
        && q.row() >= p.row().min(r.row())
}

impl Segment {
    /// Creates a segment.
    #[must_use]
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Returns `true` if the two segments have an endpoint in common.
    #[must_use]
    #[inline]
    pub fn shares_endpoint(self, other: Self) -> bool {
        self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
    }

    /// Returns `true` if the segments touch or cross anywhere, endpoints included.
    ///
    /// # Examples
    ///
    /// ```
    /// use numpath_core::{Position, geometry::Segment};
    ///
    /// let a = Segment::new(Position::new(0, 0), Position::new(1, 1));
    /// let b = Segment::new(Position::new(0, 1), Position::new(1, 0));
    /// assert!(a.intersects(b));
    ///
    /// let c = Segment::new(Position::new(0, 2), Position::new(1, 3));
    /// assert!(!a.intersects(c));
    /// ```
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        let (p1, q1, p2, q2) = (self.from, self.to, other.from, other.to);
        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
            || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
            || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
            || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
    }
}

/// Returns `true` if extending `path` to `next` would cross one of its segments.
///
/// Segments sharing an endpoint with the new segment are exempt; meeting at a
/// shared vertex is not a crossing. An empty path never crosses.
#[must_use]
pub fn extension_crosses(path: &[Position], next: Position) -> bool {
    let Some(&last) = path.last() else {
        return false;
    };
    let candidate = Segment::new(last, next);
    path.windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .filter(|&segment| !segment.shares_endpoint(candidate))
        .any(|segment| segment.intersects(candidate))
}

/// Returns the 1-based step at which `path` first crosses itself, if it does.
#[must_use]
pub fn first_crossing(path: &[Position]) -> Option<usize> {
    (1..path.len())
        .find(|&i| extension_crosses(&path[..i], path[i]))
        .map(|i| i + 1)
}
