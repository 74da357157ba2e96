// Author: Dustin Pilgrim
// License: MIT

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a pointer-down grabbed: the body of the selection or one of its corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Move,
    ResizeNw,
    ResizeNe,
    ResizeSw,
    ResizeSe,
}

/// Which edges of the selection follow the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Edges {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

impl DragKind {
    pub const CORNERS: [DragKind; 4] = [
        DragKind::ResizeNw,
        DragKind::ResizeNe,
        DragKind::ResizeSw,
        DragKind::ResizeSe,
    ];

    /// Edge table for resize handles. `Move` owns no edge.
    pub fn edges(self) -> Edges {
        match self {
            DragKind::Move => Edges::default(),
            DragKind::ResizeNw => Edges {
                left: true,
                top: true,
                ..Edges::default()
            },
            DragKind::ResizeNe => Edges {
                right: true,
                top: true,
                ..Edges::default()
            },
            DragKind::ResizeSw => Edges {
                left: true,
                bottom: true,
                ..Edges::default()
            },
            DragKind::ResizeSe => Edges {
                right: true,
                bottom: true,
                ..Edges::default()
            },
        }
    }

    pub fn is_resize(self) -> bool {
        self.edges().any()
    }

    pub fn key(self) -> &'static str {
        match self {
            DragKind::Move => "move",
            DragKind::ResizeNw => "nw",
            DragKind::ResizeNe => "ne",
            DragKind::ResizeSw => "sw",
            DragKind::ResizeSe => "se",
        }
    }
}

impl FromStr for DragKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "move" => Ok(DragKind::Move),
            "nw" => Ok(DragKind::ResizeNw),
            "ne" => Ok(DragKind::ResizeNe),
            "sw" => Ok(DragKind::ResizeSw),
            "se" => Ok(DragKind::ResizeSe),
            _ => Err(CoreError::InvalidHandle(s.to_string())),
        }
    }
}

/// One complete press-move-release, with the pointer displacement in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub kind: DragKind,
    pub dx: f64,
    pub dy: f64,
}

impl FromStr for Gesture {
    type Err = CoreError;

    /// `se:40,-12` → resize from the south-east corner by (+40, -12) pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::InvalidGesture(s.to_string());

        let (kind, delta) = s.split_once(':').ok_or_else(bad)?;
        let kind: DragKind = kind.parse().map_err(|_| bad())?;
        let (dx, dy) = delta.split_once(',').ok_or_else(bad)?;
        let dx: f64 = dx.trim().parse().map_err(|_| bad())?;
        let dy: f64 = dy.trim().parse().map_err(|_| bad())?;

        Ok(Gesture { kind, dx, dy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_own_two_edges_each() {
        for k in DragKind::CORNERS {
            let e = k.edges();
            assert!(e.left ^ e.right);
            assert!(e.top ^ e.bottom);
        }
        assert!(!DragKind::Move.edges().any());
    }

    #[test]
    fn parses_handle_keys() {
        assert_eq!("NW".parse::<DragKind>(), Ok(DragKind::ResizeNw));
        assert_eq!("move".parse::<DragKind>(), Ok(DragKind::Move));
        assert!("n".parse::<DragKind>().is_err());
    }

    #[test]
    fn parses_gesture() {
        let g: Gesture = "se:40,-12.5".parse().unwrap();
        assert_eq!(g.kind, DragKind::ResizeSe);
        assert_eq!((g.dx, g.dy), (40.0, -12.5));
        assert!("se:40".parse::<Gesture>().is_err());
        assert!("up:1,1".parse::<Gesture>().is_err());
    }
}
