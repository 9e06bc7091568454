use crate::hex::CubePoint;
use thiserror::Error;

/// Errors that the simulation core can produce. Both variants are
/// recoverable; the driver decides whether to surface them or ignore them.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum HexError {
    /// Cube coordinate components didn't sum to zero. The engine's own
    /// arithmetic never produces this, so it indicates a caller bug.
    #[error("invalid cube coordinate ({q}, {r}, {s}); q + r + s must be 0")]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// Attempted to mutate a cell that isn't in the currently shaped region.
    /// Expected when pointer input lands near the edge of the grid.
    #[error("no cell at {0} in the current region")]
    CellNotFound(CubePoint),
}
