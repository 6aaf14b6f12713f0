use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Widened to `u64` so `u32::MAX`-sided rectangles cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
