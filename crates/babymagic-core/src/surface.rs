// Author: Dustin Pilgrim
// License: MIT

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// On-screen size (logical pixels) of the box the image is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A zero or collapsed surface cannot map pointer deltas to percentages.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl FromStr for Surface {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::InvalidSurface(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
        let surface = Surface::new(
            w.trim().parse().map_err(|_| bad())?,
            h.trim().parse().map_err(|_| bad())?,
        );
        if !surface.is_usable() {
            return Err(bad());
        }
        Ok(surface)
    }
}

/// Pointer position in the same logical pixels as [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
