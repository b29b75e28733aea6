//! Movement topologies.
//!
//! A topology decides which cells neighbor each other and whether a move that
//! connects two neighbors is acceptable given the path drawn so far. Search and
//! validation code is written once against [`MoveRules`] and receives the concrete
//! rules from [`Topology::rules`].

use std::fmt;

use tinyvec::ArrayVec;

use crate::{GridSize, Position, geometry};

/// Neighbor list of a single cell (at most 8 entries).
pub type Neighbors = ArrayVec<[Position; 8]>;

/// Movement rule set of a puzzle.
///
/// # Examples
///
/// ```
/// use numpath_core::{GridSize, Position, Topology};
///
/// let size = GridSize::new(3, 3)?;
/// let center = Position::new(1, 1);
/// assert_eq!(Topology::Orthogonal.neighbors(center, size).len(), 4);
/// assert_eq!(Topology::Diagonal.neighbors(center, size).len(), 8);
///
/// assert!(!Topology::Orthogonal.is_adjacent(center, Position::new(0, 0)));
/// assert!(Topology::Diagonal.is_adjacent(center, Position::new(0, 0)));
/// # Ok::<(), numpath_core::CoreError>(())
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Topology {
    /// Up, down, left and right moves.
    #[default]
    #[display("orthogonal")]
    Orthogonal,
    /// Orthogonal and diagonal moves; the drawn line may not cross itself.
    #[display("diagonal")]
    Diagonal,
}

impl Topology {
    /// Every topology.
    pub const ALL: [Self; 2] = [Self::Orthogonal, Self::Diagonal];

    /// Returns the rule set implementing this topology.
    #[must_use]
    pub fn rules(self) -> &'static dyn MoveRules {
        match self {
            Self::Orthogonal => &OrthogonalMoves,
            Self::Diagonal => &DiagonalMoves,
        }
    }

    /// Returns the on-board neighbors of `pos`.
    #[must_use]
    #[inline]
    pub fn neighbors(self, pos: Position, size: GridSize) -> Neighbors {
        self.rules().neighbors(pos, size)
    }

    /// Returns `true` if a single move connects `a` and `b`.
    #[must_use]
    #[inline]
    pub fn is_adjacent(self, a: Position, b: Position) -> bool {
        self.rules().is_adjacent(a, b)
    }

    /// Returns `true` if the segment from the end of `path` to `next` is allowed.
    #[must_use]
    #[inline]
    pub fn accepts_extension(self, path: &[Position], next: Position) -> bool {
        self.rules().accepts_extension(path, next)
    }
}

/// Neighbor enumeration and edge validity for one topology.
pub trait MoveRules: fmt::Debug + Send + Sync {
    /// Returns the topology these rules implement.
    fn topology(&self) -> Topology;

    /// Returns the `(drow, dcol)` steps a single move may take.
    fn directions(&self) -> &'static [(isize, isize)];

    /// Returns the on-board neighbors of `pos`, in [`MoveRules::directions`] order.
    fn neighbors(&self, pos: Position, size: GridSize) -> Neighbors {
        self.directions()
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&next| size.contains(next))
            .collect()
    }

    /// Returns `true` if a single move connects `a` and `b`.
    fn is_adjacent(&self, a: Position, b: Position) -> bool;

    /// Returns `true` if extending `path` by the segment to `next` is allowed.
    ///
    /// Adjacency and occupancy are checked separately; this only covers
    /// constraints that depend on the shape of the path.
    fn accepts_extension(&self, path: &[Position], next: Position) -> bool {
        let _ = (path, next);
        true
    }
}

/// 4-directional moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthogonalMoves;

impl MoveRules for OrthogonalMoves {
    fn topology(&self) -> Topology {
        Topology::Orthogonal
    }

    fn directions(&self) -> &'static [(isize, isize)] {
        &[(-1, 0), (0, 1), (1, 0), (0, -1)]
    }

    fn is_adjacent(&self, a: Position, b: Position) -> bool {
        matches!(a.abs_delta(b), (0, 1) | (1, 0))
    }
}

/// 8-directional moves with a non-self-crossing line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalMoves;

impl MoveRules for DiagonalMoves {
    fn topology(&self) -> Topology {
        Topology::Diagonal
    }

    fn directions(&self) -> &'static [(isize, isize)] {
        &[
            (-1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
        ]
    }

    fn is_adjacent(&self, a: Position, b: Position) -> bool {
        let (dr, dc) = a.abs_delta(b);
        dr.max(dc) == 1
    }

    fn accepts_extension(&self, path: &[Position], next: Position) -> bool {
        !geometry::extension_crosses(path, next)
    }
}
