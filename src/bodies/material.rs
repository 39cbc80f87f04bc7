use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Surface properties of a collider
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Coefficient of restitution, 0-1
    pub bounciness: f32,

    /// Coulomb friction coefficient, >= 0
    pub friction: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(bounciness: f32, friction: f32) -> Self {
        Self { bounciness, friction }
    }

    /// Low friction, moderate bounce
    pub fn ice() -> Self {
        Self::new(0.4, 0.05)
    }

    /// High friction, high bounce
    pub fn rubber() -> Self {
        Self::new(0.7, 0.8)
    }

    /// Medium friction, low bounce
    pub fn wood() -> Self {
        Self::new(0.2, 0.6)
    }

    /// Medium friction, medium bounce
    pub fn metal() -> Self {
        Self::new(0.5, 0.4)
    }

    /// High friction, almost no bounce
    pub fn concrete() -> Self {
        Self::new(0.1, 0.9)
    }

    /// Checks that bounciness is in `[0, 1]` and friction is non-negative
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bounciness) {
            return Err(PhysicsError::InvalidParameter(format!(
                "bounciness must be in [0, 1], got {}",
                self.bounciness
            )));
        }

        if !(self.friction >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "friction must be non-negative, got {}",
                self.friction
            )));
        }

        Ok(())
    }

    /// Effective restitution and friction for a pair of materials
    pub fn combine(&self, other: &Material) -> (f32, f32) {
        (
            self.bounciness.min(other.bounciness),
            self.friction.min(other.friction),
        )
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            bounciness: 0.2,
            friction: 0.99,
        }
    }
}
