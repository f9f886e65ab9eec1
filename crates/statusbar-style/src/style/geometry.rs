//! Geometry primitives shared by the style entities and presentation plans.

use serde::{Deserialize, Serialize};

/// A two-dimensional offset, used for shadow offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0.0, 0.0);

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl From<(f64, f64)> for Offset {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self { dx, dy }
    }
}

/// An axis-aligned rectangle in the bar's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_tuple() {
        assert_eq!(Offset::from((1.0, 2.0)), Offset::new(1.0, 2.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0.0, 10.0, 100.0, 4.0);
        assert_eq!(rect.max_y(), 14.0);
        assert_eq!(rect.mid_y(), 12.0);
    }
}
