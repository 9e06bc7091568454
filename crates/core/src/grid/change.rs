use crate::grid::Generation;

/// Check if anything differs between two generations. A coordinate that only
/// exists in one of them counts as a change, so comparing generations of two
/// different regions always reports a change (unless both are empty).
///
/// Once this returns `false` after a step, the grid has hit a fixed point:
/// stepping again will produce the exact same generation forever.
pub fn has_changed(previous: &Generation, current: &Generation) -> bool {
    previous.len() != current.len()
        || current.iter().any(|(pos, cell)| {
            previous
                .get(pos)
                .map_or(true, |prev_cell| prev_cell.alive != cell.alive)
        })
}
