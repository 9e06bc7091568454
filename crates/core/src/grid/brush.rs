use crate::{grid::Grid, hex::CubePoint};
use log::trace;

/// Paints cells with a pointer drag. Where the stroke starts decides what it
/// does: starting on a dead cell brings every cell it passes over to life,
/// starting on a live cell kills them. A stroke only ever touches cell
/// states, it never steps the grid.
///
/// ```
/// use hexlife::{Brush, CubePoint, Grid, RegionSize, Rules, Seed};
///
/// let mut grid =
///     Grid::new(RegionSize::new(5, 5), Rules::default(), &Seed::Int(0));
/// let mut brush = Brush::default();
/// brush.begin(&mut grid, CubePoint::ORIGIN);
/// brush.apply(&mut grid, CubePoint::new_qr(1, 0));
/// brush.end();
/// assert_eq!(grid.alive_count(), 2);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Brush {
    stroke: Option<Stroke>,
}

#[derive(Copy, Clone, Debug)]
struct Stroke {
    /// The state that this stroke paints
    target: bool,
    last: Option<CubePoint>,
}

impl Brush {
    /// Is a stroke in progress?
    pub fn is_active(&self) -> bool {
        self.stroke.is_some()
    }

    /// The state that the current stroke paints, if there is one
    pub fn target(&self) -> Option<bool> {
        self.stroke.map(|stroke| stroke.target)
    }

    /// Start a new stroke at the given position, replacing any unfinished
    /// one, and paint that position. Returns whether a cell changed. A
    /// stroke that starts outside the region paints live cells.
    pub fn begin(&mut self, grid: &mut Grid, position: CubePoint) -> bool {
        let target = grid.get_cell(position).map_or(true, |cell| !cell.alive);
        trace!("Starting stroke at {} (target: {})", position, target);
        self.stroke = Some(Stroke { target, last: None });
        self.apply(grid, position)
    }

    /// Continue the current stroke onto a position. Returns whether a cell
    /// changed. Nothing happens if there is no stroke in progress, if the
    /// position is outside the region, if the cell is already in the target
    /// state, or if this is the same position that was last painted.
    pub fn apply(&mut self, grid: &mut Grid, position: CubePoint) -> bool {
        let stroke = match &mut self.stroke {
            Some(stroke) => stroke,
            None => return false,
        };
        if stroke.last == Some(position) {
            return false;
        }
        match grid.get_cell(position) {
            Some(cell) if cell.alive != stroke.target => {}
            _ => return false,
        }

        match grid.set_cell_state(position, stroke.target) {
            Ok(()) => {
                stroke.last = Some(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Finish the current stroke. The next stroke picks a new target.
    pub fn end(&mut self) {
        self.stroke = None;
    }
}
