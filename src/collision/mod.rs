mod box_resolver;
mod collision_filter;
mod contact;
mod resolver;
mod rigid_body_resolver;

pub use self::box_resolver::BoxResolver;
pub use self::collision_filter::{CollisionFilter, CollisionGroup, CollisionMask, GroupMaskFilter};
pub use self::contact::CollisionContact;
pub use self::resolver::{BodyDelta, ContactPair, ContactResolver, Resolution, Resolver};
pub use self::rigid_body_resolver::RigidBodyResolver;
