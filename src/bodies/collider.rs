use crate::bodies::{Body, CollisionType, Material};
use crate::collision::{CollisionGroup, CollisionMask};
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// The collision-facing part of a body: participation mode, mass
/// properties, surface material and the centroid used for lever arms.
///
/// The centroid is stored relative to the owning body, so it follows the
/// body as it moves and rotates.
///
/// Several colliders may point at the same body (a compound body); contacts
/// between them are never resolved against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    body: BodyHandle,
    collision_type: CollisionType,
    mass: f32,
    inertia: f32,
    material: Material,
    offset: Vector2,
    group: CollisionGroup,
    mask: CollisionMask,
}

impl Collider {
    /// Creates a collider for `body` with unit mass and inertia, the default
    /// material and its centroid on the body's origin
    pub fn new(body: BodyHandle, collision_type: CollisionType) -> Self {
        Self {
            body,
            collision_type,
            mass: 1.0,
            inertia: 1.0,
            material: Material::default(),
            offset: Vector2::ZERO,
            group: CollisionGroup::DEFAULT,
            mask: CollisionMask::ALL,
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_inertia(mut self, inertia: f32) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Places the centroid at `offset` in the body's local frame
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the groups this collider belongs to and the groups it collides with
    pub fn with_groups(mut self, group: CollisionGroup, mask: CollisionMask) -> Self {
        self.group = group;
        self.mask = mask;
        self
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn collision_type(&self) -> CollisionType {
        self.collision_type
    }

    pub fn set_collision_type(&mut self, collision_type: CollisionType) {
        self.collision_type = collision_type;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn bounciness(&self) -> f32 {
        self.material.bounciness
    }

    pub fn friction(&self) -> f32 {
        self.material.friction
    }

    /// Centroid in the body's local frame
    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// World-space centroid given the owning body's current pose
    pub fn center(&self, body: &Body) -> Vector2 {
        body.get_position() + self.offset.rotate(body.get_rotation())
    }

    pub fn group(&self) -> CollisionGroup {
        self.group
    }

    pub fn mask(&self) -> CollisionMask {
        self.mask
    }

    /// Inverse mass, zero for `Fixed` colliders
    pub fn inverse_mass(&self) -> f32 {
        if self.collision_type == CollisionType::Fixed {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Inverse moment of inertia, zero for `Fixed` colliders
    pub fn inverse_inertia(&self) -> f32 {
        if self.collision_type == CollisionType::Fixed {
            0.0
        } else {
            1.0 / self.inertia
        }
    }

    /// Rejects non-positive mass or inertia and invalid materials
    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "collider mass must be positive, got {}",
                self.mass
            )));
        }

        if !(self.inertia > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "collider inertia must be positive, got {}",
                self.inertia
            )));
        }

        self.material.validate()
    }
}
