#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a collider participates in collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum CollisionType {
    /// Never collides and never emits collision events
    #[default]
    PreventCollision,

    /// Emits collision events but is never moved and never moves others
    Passive,

    /// Emits events, is moved by and can move other `Active`/`Fixed` colliders
    Active,

    /// Emits events and pushes others, but is never moved (infinite mass)
    Fixed,
}

impl CollisionType {
    /// Whether contact resolution may change this collider's body
    pub fn is_movable(self) -> bool {
        self == CollisionType::Active
    }

    /// Whether this collider receives pre/post collision events
    pub fn emits_events(self) -> bool {
        self != CollisionType::PreventCollision
    }

    /// Whether this collider takes part in the physical response
    pub fn participates(self) -> bool {
        matches!(self, CollisionType::Active | CollisionType::Fixed)
    }
}
