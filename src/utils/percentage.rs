use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// Share of the total coding time, as reported by the stats source. Values are trusted to be in
/// `0..=100` but nothing here panics when they are not.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Percentage {
    pub fn new(value: f64) -> Percentage {
        Percentage(value)
    }

    /// Number of cells out of `width` this percentage covers. Rounds half up and clamps to
    /// `0..=width`, NaN covers nothing.
    pub fn filled_cells(&self, width: usize) -> usize {
        let cells = (width as f64 * self.0 / 100.).round();
        if cells.is_nan() || cells <= 0. {
            0
        } else if cells >= width as f64 {
            width
        } else {
            cells as usize
        }
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
