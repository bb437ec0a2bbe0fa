//! Movement intent handed over by the input translator.

use std::f32::consts::FRAC_1_SQRT_2;

/// Per-axis movement in [-1, 1]; diagonals are normalised to unit length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub x: f32,
    pub y: f32,
}

impl MoveIntent {
    pub const IDLE: MoveIntent = MoveIntent { x: 0.0, y: 0.0 };

    /// Clamp each axis and shrink vectors longer than one.
    pub fn new(x: f32, y: f32) -> Self {
        let x = if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 };
        let y = if y.is_finite() { y.clamp(-1.0, 1.0) } else { 0.0 };
        let len = x.hypot(y);
        if len > 1.0 {
            Self {
                x: x / len,
                y: y / len,
            }
        } else {
            Self { x, y }
        }
    }

    /// Build from four held directions. Opposite keys cancel.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let x = axis(left, right);
        let y = axis(up, down);
        if x != 0.0 && y != 0.0 {
            Self {
                x: x * FRAC_1_SQRT_2,
                y: y * FRAC_1_SQRT_2,
            }
        } else {
            Self { x, y }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
