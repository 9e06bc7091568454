use derive_more::Display;
use std::fmt::{Debug, Display};

/// A type of value that we can create ranges of, where a range has a min and
/// max.
pub trait Rangeable: Copy + Debug + Display + PartialOrd {}

impl Rangeable for u8 {}

/// A range between two numeric values, inclusive on both ends.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Force a value into this range. If it's already in the range, return
    /// that value. If it's outside the range, return the bound (lower or upper)
    /// that's closest to the value.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Narrow the lower bound of this range. Used to keep a paired min/max
    /// consistent, e.g. a max value can never go below the current min.
    pub fn with_min(self, min: T) -> Self {
        Self::new(self.clamp(min), self.max)
    }

    /// Narrow the upper bound of this range. See [Self::with_min].
    pub fn with_max(self, max: T) -> Self {
        Self::new(self.min, self.clamp(max))
    }
}
