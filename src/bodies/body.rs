use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Kinematic state of a 2D body.
///
/// Mass and inertia live on the [`Collider`](crate::bodies::Collider) so a
/// body carries only what contact resolution mutates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// World-space position
    position: Vector2,

    /// Rotation in radians
    rotation: f32,

    /// Linear velocity
    linear_velocity: Vector2,

    /// Angular velocity in radians per second
    angular_velocity: f32,

    /// Positional correction deposited by the resolver, drained on integration
    pending_mtv: Vector2,
}

impl Body {
    /// Creates a body at rest at the given position
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Sets the initial linear velocity
    pub fn with_linear_velocity(mut self, velocity: Vector2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Sets the initial angular velocity
    pub fn with_angular_velocity(mut self, velocity: f32) -> Self {
        self.angular_velocity = velocity;
        self
    }

    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn get_rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    pub fn get_linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.linear_velocity = velocity;
    }

    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: f32) {
        self.angular_velocity = velocity;
    }

    /// Moves the body by `offset` immediately
    pub fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }

    /// Deposits a positional correction to be applied by the next integration step
    pub fn add_mtv(&mut self, mtv: Vector2) {
        self.pending_mtv += mtv;
    }

    /// Returns the accumulated, not yet applied positional correction
    pub fn pending_mtv(&self) -> Vector2 {
        self.pending_mtv
    }

    /// Applies and clears the accumulated positional correction.
    ///
    /// Returns the offset that was applied.
    pub fn apply_mtv(&mut self) -> Vector2 {
        let mtv = std::mem::take(&mut self.pending_mtv);
        self.position += mtv;
        mtv
    }
}
