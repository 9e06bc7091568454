mod seed;

pub use seed::Seed;

use crate::{grid::rules::Rules, layout::Orientation};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for a simulation. Two grids built and randomized from the
/// same config will always hold identical cells, and stepping them the same
/// number of times keeps them identical.
///
/// Every field has a default, so a partial config (or an empty one) is
/// always valid input. Call [Validate::validate] (or let
/// [Grid::from_config](crate::Grid::from_config) do it) before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LifeConfig {
    /// RNG seed used whenever the grid gets randomized. See [Seed] for the
    /// input formats that are accepted.
    pub seed: Seed,

    /// Number of cells in each row of the region
    #[validate(range(min = 1, max = 1000))]
    pub width: u16,

    /// Number of rows in the region
    #[validate(range(min = 1, max = 1000))]
    pub height: u16,

    /// Survival and birth thresholds used while stepping
    #[validate]
    pub rules: Rules,

    /// How cells get mapped onto the plane for rendering and input
    #[validate]
    pub layout: LayoutConfig,
}

/// The parts of a [Layout](crate::Layout) that belong in a config. The
/// origin isn't here because it depends on the size of whatever the grid is
/// being drawn onto.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    pub orientation: Orientation,

    /// Distance from the center of each hexagon to its corners, in plane
    /// units
    #[validate(range(min = 1.0))]
    pub cell_size: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            // The default varies between calls!
            seed: rand::random::<u64>().into(),
            width: 40,
            height: 30,
            rules: Rules::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            cell_size: 15.0,
        }
    }
}
