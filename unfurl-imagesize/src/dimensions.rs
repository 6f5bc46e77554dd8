// ABOUTME: Width/height value type shared by the parser and downstream crates
// ABOUTME: Unknown dimensions are represented by Option, never by zero

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of an image frame.
///
/// A value of this type is only ever produced by a successful parse;
/// "unknown" is `Option<Dimensions>::None`, not a zero-sized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
