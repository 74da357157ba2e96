// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid crop rect \"{0}\" (expected X,Y,W,H in percent)")]
    InvalidRect(String),

    #[error("invalid aspect ratio \"{0}\" (expected free, a preset, or W:H)")]
    InvalidRatio(String),

    #[error("invalid drag handle \"{0}\" (expected move|nw|ne|sw|se)")]
    InvalidHandle(String),

    #[error("invalid surface \"{0}\" (expected WIDTHxHEIGHT)")]
    InvalidSurface(String),

    #[error("invalid gesture \"{0}\" (expected KIND:DX,DY)")]
    InvalidGesture(String),
}
