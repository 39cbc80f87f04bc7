use bitflags::bitflags;
use crate::bodies::{Collider, CollisionType};

bitflags! {
    /// A bit mask representing the collision groups a collider belongs to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionGroup: u32 {
        /// Default group (collides with everything)
        const DEFAULT    = 0x00000001;

        /// Level geometry
        const WORLD      = 0x00000002;

        /// Player and NPC actors
        const CHARACTER  = 0x00000004;

        /// Projectiles
        const PROJECTILE = 0x00000008;

        /// Pickups, triggers and other event-only colliders
        const SENSOR     = 0x00000010;

        /// Debris that should not push characters around
        const DEBRIS     = 0x00000020;

        /// All groups
        const ALL        = 0xFFFFFFFF;
    }
}

impl Default for CollisionGroup {
    fn default() -> Self {
        CollisionGroup::DEFAULT
    }
}

/// Type alias for a collision mask (what groups this object collides with)
pub type CollisionMask = CollisionGroup;

/// Decides whether a pair of colliders should be resolved at all
pub trait CollisionFilter: Send + Sync {
    fn should_collide(&self, collider_a: &Collider, collider_b: &Collider) -> bool;
}

/// Rejects pairs involving `PreventCollision`, colliders sharing a body,
/// and pairs whose group/mask do not accept each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupMaskFilter;

impl GroupMaskFilter {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionFilter for GroupMaskFilter {
    fn should_collide(&self, collider_a: &Collider, collider_b: &Collider) -> bool {
        if collider_a.collision_type() == CollisionType::PreventCollision
            || collider_b.collision_type() == CollisionType::PreventCollision
        {
            return false;
        }

        if collider_a.body() == collider_b.body() {
            return false;
        }

        // A collides with B if A's mask includes B's group AND B's mask includes A's group
        collider_a.mask().intersects(collider_b.group()) && collider_b.mask().intersects(collider_a.group())
    }
}
