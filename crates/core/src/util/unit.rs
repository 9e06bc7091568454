use derive_more::{
    Add, AddAssign, Display, Div, From, Into, Mul, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D plane space. This isn't used at all during simulation, only
/// for rendering and for mapping pointer input onto the grid. Use
/// [Layout::to_plane](crate::Layout::to_plane) to get the center of a cell in
/// plane space. Stick to [CubePoint](crate::CubePoint) for anything involving
/// neighbors, distances, etc.
///
/// Left is negative x, right is positive x. Down is positive y, up is
/// negative y (canvas convention).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vector in 2D space. Like [Point2], this is only used for rendering and
/// input mapping. It represents offsets and per-axis sizes.
///
/// See [Point2] for a description of the 2D coordinate space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A vector with the same value on both axes
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Multiply component-wise
    pub fn scale(self, factor: Vector2) -> Self {
        Self::new(self.x * factor.x, self.y * factor.y)
    }

    /// Divide component-wise. This is the inverse of [Self::scale].
    pub fn unscale(self, factor: Vector2) -> Self {
        Self::new(self.x / factor.x, self.y / factor.y)
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// The difference between two points is the offset from one to the other
impl ops::Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(other: Vector2) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}
