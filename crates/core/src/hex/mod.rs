//! This module holds basic types related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Hexlife uses two different coordinate systems:
//!
//! ### Cube Coordinates
//!
//! Cube coordinates (AKA hex coordinates) address cells within the hexagon
//! grid. The system is the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** Even though the
//! grid is two-dimensional, the third component makes neighbor, distance and
//! rounding math symmetric across all three axes of the hexagon.
//!
//! Since `s` can always be derived from the other two, [CubePoint] only
//! stores `q` and `r`. Construction through [CubePoint::new] still accepts all
//! three so that callers doing their own arithmetic get their mistakes caught.
//!
//! ### Plane Coordinates
//!
//! Plane coordinates are plain 2D points, used strictly for rendering and for
//! mapping pointer input back onto the grid. The origin of the plane is
//! wherever the [Layout](crate::Layout) says it is, `+x` is right and `+y` is
//! **down** (canvas convention). See [Layout](crate::Layout) for the
//! conversions between the two systems.

mod unit;

pub use self::unit::*;
use fnv::FnvBuildHasher;
use std::collections::HashMap;

/// A map of cube points to some `T`
pub type CubePointMap<T> = HashMap<CubePoint, T, FnvBuildHasher>;
