//! The simulation itself. A [Grid] holds one generation of cells over a
//! rectangular [region](region::RegionSize), and steps it forward according
//! to its [Rules](rules::Rules).

pub mod brush;
pub mod change;
pub mod region;
pub mod rules;

use crate::{
    config::{LifeConfig, Seed},
    error::HexError,
    grid::{
        region::{shape_region, RegionSize},
        rules::Rules,
    },
    hex::{CubePoint, CubePointMap},
    timed,
};
use anyhow::Context;
use log::{debug, info};
use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use std::mem;
use validator::Validate;

/// One full set of cells, keyed by position
pub type Generation = CubePointMap<Cell>;

/// A single cell in the grid. Cells never move, only their state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: CubePoint,
    pub alive: bool,
}

impl Cell {
    pub fn new(position: CubePoint, alive: bool) -> Self {
        Self { position, alive }
    }

    pub fn position(&self) -> CubePoint {
        self.position
    }
}

/// A hex grid of cells plus everything needed to advance it. The grid keeps
/// the generation before the current one around as well, so callers can
/// check whether the last step changed anything.
///
/// All mutation goes through `&mut self`, so a step can never interleave
/// with a resize or an edit.
#[derive(Clone, Debug)]
pub struct Grid {
    region: RegionSize,
    rules: Rules,
    rng: Pcg64,
    current: Generation,
    /// `None` until the first step after (re)shaping the region
    previous: Option<Generation>,
    /// 1-based, so a freshly shaped grid is on generation 1
    generation: u64,
}

impl Grid {
    /// Create a grid of dead cells over the given region
    pub fn new(region: RegionSize, rules: Rules, seed: &Seed) -> Self {
        Self {
            region,
            rules,
            rng: seed.rng(),
            current: shape_region(region, |_| false),
            previous: None,
            generation: 1,
        }
    }

    /// Validate the given config, then create an empty grid from it. Call
    /// [Self::randomize] afterwards to fill it.
    pub fn from_config(config: &LifeConfig) -> anyhow::Result<Self> {
        info!("Creating grid with config {:#?}", config);
        config.validate().context("invalid config")?;

        Ok(Self::new(
            RegionSize::new(config.width, config.height),
            config.rules,
            &config.seed,
        ))
    }

    /// Replace every cell with a dead one, shaped to the given region
    pub fn reset(&mut self, region: RegionSize) {
        self.shape(region, shape_region(region, |_| false));
    }

    /// Replace every cell with a random one, shaped to the given region.
    /// Each cell is alive with 50% probability. The RNG carries over between
    /// calls, so randomizing twice gives two different grids, but the
    /// sequence of grids is the same for any two grids with the same seed.
    pub fn randomize(&mut self, region: RegionSize) {
        let rng = &mut self.rng;
        let cells = shape_region(region, |_| rng.gen_bool(0.5));
        self.shape(region, cells);
    }

    /// Reshape the grid to a new region. Any position that exists in both the
    /// old and new regions keeps its state; new positions start dead. This
    /// counts as a new starting point, so the previous generation is dropped,
    /// but the generation counter keeps going.
    pub fn resize(&mut self, region: RegionSize) {
        let old = &self.current;
        let cells = shape_region(region, |pos| {
            old.get(&pos).map_or(false, |cell| cell.alive)
        });
        debug!("Resizing grid from {} to {}", self.region, region);
        self.region = region;
        self.current = cells;
        self.previous = None;
    }

    fn shape(&mut self, region: RegionSize, cells: Generation) {
        debug!("Shaping {} grid", region);
        self.region = region;
        self.current = cells;
        self.previous = None;
        self.generation = 1;
    }

    /// Advance the grid by one generation. Every cell's next state is
    /// computed from the current generation only, then the new generation
    /// replaces the current one in a single swap.
    pub fn step(&mut self) {
        let next = timed!("Grid step", {
            self.current
                .values()
                .map(|cell| {
                    let alive_neighbors = self.alive_neighbors(cell.position);
                    let alive =
                        self.rules.next_state(cell.alive, alive_neighbors);
                    (cell.position, Cell::new(cell.position, alive))
                })
                .collect::<Generation>()
        });

        self.previous = Some(mem::replace(&mut self.current, next));
        self.generation += 1;
    }

    /// Count the live cells adjacent to a position. Positions outside the
    /// region count as dead; there is no wraparound.
    pub fn alive_neighbors(&self, position: CubePoint) -> u8 {
        position
            .adjacents()
            .filter(|adj| {
                self.current.get(adj).map_or(false, |cell| cell.alive)
            })
            .count() as u8
    }

    /// Did the last step change anything? Always `true` if no step has
    /// happened since the region was last shaped, so a driver loop that
    /// stops once this is `false` always runs at least one step.
    pub fn has_changed(&self) -> bool {
        match &self.previous {
            Some(previous) => change::has_changed(previous, &self.current),
            None => true,
        }
    }

    /// Get the cell at a position, or `None` if the position is outside the
    /// region
    pub fn get_cell(&self, position: CubePoint) -> Option<&Cell> {
        self.current.get(&position)
    }

    /// Set the state of one cell. Fails with [HexError::CellNotFound] if the
    /// position is outside the region.
    pub fn set_cell_state(
        &mut self,
        position: CubePoint,
        alive: bool,
    ) -> Result<(), HexError> {
        let cell = self
            .current
            .get_mut(&position)
            .ok_or(HexError::CellNotFound(position))?;
        cell.alive = alive;
        Ok(())
    }

    /// Iterate over all cells in the grid, in region order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.region
            .points()
            .filter_map(move |pos| self.current.get(&pos))
    }

    /// Get the full current generation
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Get the generation before the current one, if there has been a step
    /// since the region was last shaped
    pub fn previous(&self) -> Option<&Generation> {
        self.previous.as_ref()
    }

    pub fn alive_count(&self) -> usize {
        self.current.values().filter(|cell| cell.alive).count()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn region(&self) -> RegionSize {
        self.region
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get mutable access to the rules. Changes take effect on the next step.
    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }
}
