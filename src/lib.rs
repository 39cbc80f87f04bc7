//! Contact resolution for 2D game physics.
//!
//! Given a pair of overlapping colliders and the overlap geometry produced by
//! a narrow phase (minimum translation vector, contact point and normal), a
//! [`CollisionContact`] decides how each body's position, velocity and
//! angular velocity change. Two strategies are available: a cheap positional
//! push-back ([`ResolutionStrategy::Box`]) and an impulse-based response with
//! restitution and Coulomb friction ([`ResolutionStrategy::RigidBody`]).

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, ResolutionConfig, ResolutionStrategy, Side};
pub use crate::bodies::{Body, Collider, CollisionType, Material};
pub use crate::collision::{CollisionContact, Resolver};
pub use crate::math::Vector2;

/// Error types for the contact resolver
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Unknown resolution strategy: {0}")]
        UnknownStrategy(String),
    }
}

/// Result type for contact resolution operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
