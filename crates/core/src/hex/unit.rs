//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::error::HexError;
use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A point in the hex coordinate system that refers to a single cell (via its
/// center point). See module-level documentation for a description of the
/// coordinate system.
///
/// This is an immutable value type. Arithmetic always produces a new point,
/// and since both operands of `+`/`-` satisfy `q + r + s = 0`, so does the
/// result.
///
/// ## Implementation
///
/// Only `q` and `r` are stored; `s` is derived, so `-q - r` has to fit in an
/// `i32`. Points built by [Self::new] or [FractionalCubePoint::round] always
/// satisfy that. Rounding clamps each component to
/// [Self::MAX_COMPONENT], so pointer input arbitrarily far outside the grid
/// still gives a usable point.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct CubePoint {
    q: i32,
    r: i32,
}

impl CubePoint {
    pub const ORIGIN: Self = Self::new_qr(0, 0);
    /// Largest magnitude that rounding will produce for `q` or `r`
    pub const MAX_COMPONENT: i32 = i32::MAX / 2;

    /// Construct a new point from all three components. Returns
    /// [HexError::InvalidCoordinate] if they don't sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(HexError::InvalidCoordinate {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a new point with the given q and r. Since q+r+s=0 for all
    /// points, we can derive s from q & r, so this can never fail. The caller
    /// is responsible for keeping `-q - r` within `i32`.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin, in cell steps.
    pub fn length(&self) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Two adjacent cell centers are always separated by two cube edges,
        // hence the halving. Summed in 64 bits since three i32 magnitudes
        // don't fit in a u32.
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        (q.unsigned_abs() + r.unsigned_abs() + (q + r).unsigned_abs()) / 2
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the cells are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: CubePoint) -> u64 {
        (self - other).length()
    }

    /// Get the location of the cell adjacent to this one in a particular
    /// direction
    pub fn neighbor(self, direction: HexDirection) -> CubePoint {
        self + direction.to_vector()
    }

    /// Get an iterator of all the points directly adjacent to this one, in
    /// [HexDirection] order. The iterator will always contain exactly 6
    /// values.
    pub fn adjacents(self) -> impl Iterator<Item = CubePoint> {
        HexDirection::ALL.iter().map(move |dir| self.neighbor(*dir))
    }
}

/// A point in cube space whose components aren't necessarily integers. This
/// is what you get when mapping an arbitrary plane point into the hex grid,
/// before deciding which cell it actually belongs to. Use [Self::round] to
/// snap it to a cell.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalCubePoint {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalCubePoint {
    /// Construct a new fractional point. The components must sum to zero,
    /// within rounding tolerance (i.e. the sum must round to zero).
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).round() != 0.0 {
            Err(HexError::InvalidCoordinate { q, r, s })
        } else {
            Ok(Self { q, r, s })
        }
    }

    /// Construct a new fractional point with the given q and r, deriving s.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Snap this point to the nearest cell.
    ///
    /// Each component is rounded on its own, which can break `q + r + s = 0`.
    /// To restore it, the component that moved the most during rounding is
    /// thrown away and recomputed from the other two. Recomputing a fixed
    /// axis instead would pick the wrong cell near boundaries.
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    ///
    /// `q` and `r` are clamped to [CubePoint::MAX_COMPONENT] in magnitude, so
    /// that the derived `s` is always representable.
    pub fn round(self) -> CubePoint {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        // Ties fall through to recomputing s
        let (q, r) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > q_diff && r_diff > s_diff {
            (q, -q - s)
        } else {
            (q, r)
        };

        let limit = f64::from(CubePoint::MAX_COMPONENT);
        CubePoint::new_qr(
            q.clamp(-limit, limit) as i32,
            r.clamp(-limit, limit) as i32,
        )
    }
}

impl From<CubePoint> for FractionalCubePoint {
    fn from(point: CubePoint) -> Self {
        Self::new_qr(point.q().into(), point.r().into())
    }
}

/// The 6 directions in which cells can line up side-to-side. Each direction
/// points from a cell's center to the center of one of its neighbors.
///
/// The variants are named for a pointy-topped layout on a canvas where `+y`
/// is down. The order (and therefore [Self::index]) is fixed: it starts at
/// east and goes around counter-clockwise on screen. Opposite directions are
/// always 3 apart.
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// All directions, in index order
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Get the direction at the given index in [Self::ALL]. Returns `None`
    /// for any index above 5.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get this direction's position in [Self::ALL]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get a unit vector that would move a point one cell in this direction
    pub fn to_vector(self) -> CubePoint {
        match self {
            Self::East => CubePoint::new_qr(1, 0),
            Self::NorthEast => CubePoint::new_qr(1, -1),
            Self::NorthWest => CubePoint::new_qr(0, -1),
            Self::West => CubePoint::new_qr(-1, 0),
            Self::SouthWest => CubePoint::new_qr(-1, 1),
            Self::SouthEast => CubePoint::new_qr(0, 1),
        }
    }
}
