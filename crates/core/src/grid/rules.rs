use crate::util::range::NumRange;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Every threshold has to fit in here, since a cell only has 6 neighbors
pub const THRESHOLD_RANGE: NumRange<u8> = NumRange::new(0, 6);

/// The thresholds that decide each cell's next state, based on how many of
/// its neighbors are alive. A live cell survives if its count is within
/// `[min_alive, max_alive]`, and a dead cell comes alive if its count is
/// within `[min_birth, max_birth]`. Everything else ends up dead.
///
/// The setters keep each `min <= max` pair consistent by clamping the new
/// value against its partner. Writing the fields directly skips that, and an
/// inverted band simply never matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_bands"))]
pub struct Rules {
    #[validate(range(min = 0, max = 6))]
    pub min_alive: u8,
    #[validate(range(min = 0, max = 6))]
    pub max_alive: u8,
    #[validate(range(min = 0, max = 6))]
    pub min_birth: u8,
    #[validate(range(min = 0, max = 6))]
    pub max_birth: u8,
}

impl Rules {
    pub const fn new(
        min_alive: u8,
        max_alive: u8,
        min_birth: u8,
        max_birth: u8,
    ) -> Self {
        Self {
            min_alive,
            max_alive,
            min_birth,
            max_birth,
        }
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_range(&self) -> NumRange<u8> {
        NumRange::new(self.min_alive, self.max_alive)
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_range(&self) -> NumRange<u8> {
        NumRange::new(self.min_birth, self.max_birth)
    }

    /// Decide the next state of a cell from its current state and its number
    /// of live neighbors
    pub fn next_state(&self, alive: bool, alive_neighbors: u8) -> bool {
        (alive && self.survival_range().contains(alive_neighbors))
            || (!alive && self.birth_range().contains(alive_neighbors))
    }

    /// Set the lower survival bound, clamped to `[0, max_alive]`. Returns
    /// the value that was actually stored.
    pub fn set_min_alive(&mut self, value: u8) -> u8 {
        self.min_alive = THRESHOLD_RANGE.with_max(self.max_alive).clamp(value);
        self.min_alive
    }

    /// Set the upper survival bound, clamped to `[min_alive, 6]`
    pub fn set_max_alive(&mut self, value: u8) -> u8 {
        self.max_alive = THRESHOLD_RANGE.with_min(self.min_alive).clamp(value);
        self.max_alive
    }

    /// Set the lower birth bound, clamped to `[0, max_birth]`
    pub fn set_min_birth(&mut self, value: u8) -> u8 {
        self.min_birth = THRESHOLD_RANGE.with_max(self.max_birth).clamp(value);
        self.min_birth
    }

    /// Set the upper birth bound, clamped to `[min_birth, 6]`
    pub fn set_max_birth(&mut self, value: u8) -> u8 {
        self.max_birth = THRESHOLD_RANGE.with_min(self.min_birth).clamp(value);
        self.max_birth
    }
}

/// Classic B3/S23, adapted to six neighbors
impl Default for Rules {
    fn default() -> Self {
        Self::new(2, 3, 3, 3)
    }
}

fn validate_bands(rules: &Rules) -> Result<(), ValidationError> {
    if rules.min_alive > rules.max_alive {
        return Err(ValidationError::new("min_alive_exceeds_max_alive"));
    }
    if rules.min_birth > rules.max_birth {
        return Err(ValidationError::new("min_birth_exceeds_max_birth"));
    }
    Ok(())
}
