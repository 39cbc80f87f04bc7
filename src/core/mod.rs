pub mod world;
pub mod config;
pub mod storage;
pub mod events;
mod side;

pub use self::world::PhysicsWorld;
pub use self::config::{ResolutionConfig, ResolutionStrategy};
pub use self::storage::{BodyStorage, ColliderStorage, Storage};
pub use self::events::{CollisionEvent, CollisionEventType, EventQueue, EventSink};
pub use self::side::Side;

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a collider in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) u32);
