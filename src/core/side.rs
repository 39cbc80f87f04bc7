use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The side of a collider a contact happened on, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Side {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The cardinal side `direction` points at most strongly.
    ///
    /// Ties resolve in the order left, right, top, bottom. A zero vector
    /// has no side.
    pub fn from_direction(direction: Vector2) -> Side {
        if direction.is_zero() {
            return Side::None;
        }

        let candidates = [
            (Vector2::LEFT, Side::Left),
            (Vector2::RIGHT, Side::Right),
            (Vector2::UP, Side::Top),
            (Vector2::DOWN, Side::Bottom),
        ];

        let mut best = Side::None;
        let mut max = f32::NEG_INFINITY;
        for (axis, side) in candidates {
            let d = axis.dot(&direction);
            if d > max {
                max = d;
                best = side;
            }
        }
        best
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::None => Side::None,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
