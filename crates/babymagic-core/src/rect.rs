// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Smallest width/height (percent) a selection may shrink to.
pub const MIN_SIZE: f64 = 5.0;

/// Upper bound of the normalized space on both axes.
pub const FULL: f64 = 100.0;

/// Slack for float comparisons against the invariants.
pub const EPSILON: f64 = 1e-9;

/// Crop selection in percent of the displayed image box.
///
/// Percentages keep the selection stable when the on-screen image is scaled;
/// pixel values are always derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CropRect {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CropRect {
    /// Centered 80% box every new editing session starts from.
    pub const DEFAULT: CropRect = CropRect {
        x: 10.0,
        y: 10.0,
        width: 80.0,
        height: 80.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when every normalized invariant holds (within float slack).
    pub fn is_valid(&self) -> bool {
        self.x >= -EPSILON
            && self.y >= -EPSILON
            && self.right() <= FULL + EPSILON
            && self.bottom() <= FULL + EPSILON
            && self.width >= MIN_SIZE - EPSILON
            && self.height >= MIN_SIZE - EPSILON
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2},{:.2},{:.2},{:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for CropRect {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| CoreError::InvalidRect(s.to_string()))?;

        match parts.as_slice() {
            [x, y, w, h] => Ok(CropRect::new(*x, *y, *w, *h)),
            _ => Err(CoreError::InvalidRect(s.to_string())),
        }
    }
}
