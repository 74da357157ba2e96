// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::error::CoreError;

/// Optional width:height lock, expressed in pixels (width-px / height-px).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AspectConstraint {
    #[default]
    Free,
    Ratio(f64),
}

impl AspectConstraint {
    /// Locked ratio, if any. Non-positive or non-finite ratios count as free.
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            AspectConstraint::Ratio(r) if r.is_finite() && r > 0.0 => Some(r),
            _ => None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.ratio().is_none()
    }
}

impl fmt::Display for AspectConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ratio() {
            Some(r) => write!(f, "{r:.4}"),
            None => f.write_str("free"),
        }
    }
}

impl FromStr for AspectConstraint {
    type Err = CoreError;

    /// Accepts `free`, a preset key (`16:9`), any `W:H` pair, or a bare ratio.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        if t == "free" {
            return Ok(AspectConstraint::Free);
        }

        let bad = || CoreError::InvalidRatio(s.to_string());

        let ratio = match t.split_once(':') {
            Some((w, h)) => {
                let w: f64 = w.trim().parse().map_err(|_| bad())?;
                let h: f64 = h.trim().parse().map_err(|_| bad())?;
                if h == 0.0 {
                    return Err(bad());
                }
                w / h
            }
            None => t.parse::<f64>().map_err(|_| bad())?,
        };

        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(bad());
        }

        Ok(AspectConstraint::Ratio(ratio))
    }
}

/// Ratio choices offered next to the crop editor, in display order.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectPreset {
    #[default]
    Free,
    #[cfg_attr(feature = "clap", value(name = "1:1"))]
    Square,
    #[cfg_attr(feature = "clap", value(name = "3:4"))]
    Portrait,
    #[cfg_attr(feature = "clap", value(name = "9:16"))]
    Tall,
    #[cfg_attr(feature = "clap", value(name = "4:3"))]
    Landscape,
    #[cfg_attr(feature = "clap", value(name = "16:9"))]
    Wide,
}

impl AspectPreset {
    pub const ALL: [AspectPreset; 6] = [
        AspectPreset::Free,
        AspectPreset::Square,
        AspectPreset::Portrait,
        AspectPreset::Tall,
        AspectPreset::Landscape,
        AspectPreset::Wide,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AspectPreset::Free => "free",
            AspectPreset::Square => "1:1",
            AspectPreset::Portrait => "3:4",
            AspectPreset::Tall => "9:16",
            AspectPreset::Landscape => "4:3",
            AspectPreset::Wide => "16:9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectPreset::Free => "Free",
            AspectPreset::Square => "Square (1:1)",
            AspectPreset::Portrait => "Portrait (3:4)",
            AspectPreset::Tall => "Portrait (9:16)",
            AspectPreset::Landscape => "Landscape (4:3)",
            AspectPreset::Wide => "Wide (16:9)",
        }
    }

    pub fn constraint(self) -> AspectConstraint {
        match self {
            AspectPreset::Free => AspectConstraint::Free,
            AspectPreset::Square => AspectConstraint::Ratio(1.0),
            AspectPreset::Portrait => AspectConstraint::Ratio(3.0 / 4.0),
            AspectPreset::Tall => AspectConstraint::Ratio(9.0 / 16.0),
            AspectPreset::Landscape => AspectConstraint::Ratio(4.0 / 3.0),
            AspectPreset::Wide => AspectConstraint::Ratio(16.0 / 9.0),
        }
    }

    pub fn from_key(key: &str) -> Option<AspectPreset> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl From<AspectPreset> for AspectConstraint {
    fn from(p: AspectPreset) -> Self {
        p.constraint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_free_and_pairs() {
        assert_eq!("free".parse::<AspectConstraint>(), Ok(AspectConstraint::Free));
        assert_eq!(" FREE ".parse::<AspectConstraint>(), Ok(AspectConstraint::Free));
        assert_eq!(
            "16:9".parse::<AspectConstraint>(),
            Ok(AspectConstraint::Ratio(16.0 / 9.0))
        );
        assert_eq!("1.5".parse::<AspectConstraint>(), Ok(AspectConstraint::Ratio(1.5)));
    }

    #[test]
    fn rejects_degenerate_ratios() {
        assert!("4:0".parse::<AspectConstraint>().is_err());
        assert!("-1".parse::<AspectConstraint>().is_err());
        assert!("wide".parse::<AspectConstraint>().is_err());
    }

    #[test]
    fn zero_ratio_behaves_as_free() {
        assert!(AspectConstraint::Ratio(0.0).is_free());
        assert_eq!(AspectConstraint::Ratio(2.0).ratio(), Some(2.0));
    }

    #[test]
    fn presets_start_with_free_and_round_trip_keys() {
        assert_eq!(AspectPreset::ALL[0], AspectPreset::Free);
        for p in AspectPreset::ALL {
            assert_eq!(AspectPreset::from_key(p.key()), Some(p));
        }
        assert_eq!(AspectPreset::Tall.constraint(), AspectConstraint::Ratio(9.0 / 16.0));
    }
}
