use std::fmt;
use std::str::FromStr;

use crate::error::PhysicsError;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Which algorithm resolves contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ResolutionStrategy {
    /// Positional push-back with velocity cancellation along the mtv
    Box,

    /// Impulse-based response with restitution and Coulomb friction
    #[default]
    RigidBody,
}

impl FromStr for ResolutionStrategy {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => Ok(ResolutionStrategy::Box),
            "rigidbody" | "rigid_body" | "rigid-body" => Ok(ResolutionStrategy::RigidBody),
            _ => {
                tracing::warn!(strategy = s, "unknown resolution strategy");
                Err(PhysicsError::UnknownStrategy(s.to_string()))
            }
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolutionStrategy::Box => write!(f, "box"),
            ResolutionStrategy::RigidBody => write!(f, "rigidbody"),
        }
    }
}

/// Configuration handed to the contact resolver.
///
/// Read-only while contacts are being resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ResolutionConfig {
    /// The resolution algorithm
    pub strategy: ResolutionStrategy,

    /// Whether the rigid body strategy changes angular velocity
    pub allow_rigid_body_rotation: bool,
}

impl ResolutionConfig {
    pub fn new(strategy: ResolutionStrategy, allow_rigid_body_rotation: bool) -> Self {
        Self {
            strategy,
            allow_rigid_body_rotation,
        }
    }

    /// Box resolution; rotation has no effect on it
    pub fn box_strategy() -> Self {
        Self::new(ResolutionStrategy::Box, true)
    }

    pub fn rigid_body() -> Self {
        Self::new(ResolutionStrategy::RigidBody, true)
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self::rigid_body()
    }
}
