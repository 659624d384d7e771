use serde::{Deserialize, Serialize};

/// A point in stage (or menu) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Velocity components, in units per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub x: f32,
    pub y: f32,
}

impl Speed {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The environmental collision box (ECB) for a player on one frame.
///
/// The four points form a diamond. They are stored exactly as the game reports them, so
/// nothing here guarantees that `top.y > bottom.y` or `right.x > left.x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    pub top: Position,
    pub bottom: Position,
    pub left: Position,
    pub right: Position,
}
