//! Hexlife is a hexagon-tiled take on Conway's Game of Life. This crate
//! contains the coordinate/geometry engine and the simulation core.
//! Presentation (canvas drawing, input events, timers) lives elsewhere and
//! talks to the core through [Grid], [Layout] and [Brush].
//!
//! ```
//! use hexlife::{CubePoint, Grid, LifeConfig};
//!
//! let config = LifeConfig {
//!     seed: "glider".into(),
//!     width: 20,
//!     height: 10,
//!     ..Default::default()
//! };
//! let mut grid = Grid::from_config(&config).unwrap();
//! grid.set_cell_state(CubePoint::ORIGIN, true).unwrap();
//! grid.step();
//! // A lonely cell dies
//! assert!(!grid.get_cell(CubePoint::ORIGIN).unwrap().alive);
//! ```
//!
//! See [LifeConfig] for details on how a simulation can be customized.

mod config;
mod error;
mod grid;
mod hex;
#[cfg(feature = "js")]
pub mod js;
mod layout;
mod util;

pub use crate::{
    config::{LayoutConfig, LifeConfig, Seed},
    error::HexError,
    grid::{
        brush::Brush,
        change::has_changed,
        region::{shape_region, RegionSize, DEFAULT_PADDING},
        rules::Rules,
        Cell, Generation, Grid,
    },
    hex::{CubePoint, CubePointMap, FractionalCubePoint, HexDirection},
    layout::{Layout, Orientation},
    util::{
        range::NumRange,
        unit::{Point2, Vector2},
    },
};
// Re-export these for any downstream crates that need to validate configs
pub use anyhow;
pub use validator;
