mod body;
mod collider;
mod collision_type;
mod material;

pub use self::body::Body;
pub use self::collider::Collider;
pub use self::collision_type::CollisionType;
pub use self::material::Material;
