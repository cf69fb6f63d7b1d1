//! Screen geometry
//!
//! A widget's on-screen rectangle is captured at the moment it starts
//! expanding and handed to the render layer as an animation anchor.

/// An axis-aligned screen rectangle in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center point as `(x, y)`
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
