use tracing::warn;

use crate::bodies::{Body, Collider, CollisionType};
use crate::collision::resolver::{ContactPair, ContactResolver, Resolution, Resolver};
use crate::core::{BodyStorage, ColliderHandle, ColliderStorage, EventSink};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// One overlap between two colliders in one tick, as reported by the
/// narrow phase.
///
/// A contact is resolved once and discarded; it carries no state between
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionContact {
    pub collider_a: ColliderHandle,
    pub collider_b: ColliderHandle,

    /// Minimum translation vector separating the shapes, pointing away from A
    pub mtv: Vector2,

    /// World-space contact point
    pub point: Vector2,

    /// Separation direction pointing away from A; normalized before use
    pub normal: Vector2,
}

impl CollisionContact {
    pub fn new(
        collider_a: ColliderHandle,
        collider_b: ColliderHandle,
        mtv: Vector2,
        point: Vector2,
        normal: Vector2,
    ) -> Self {
        Self {
            collider_a,
            collider_b,
            mtv,
            point,
            normal,
        }
    }

    /// Computes the resolution of this contact without touching any body
    pub fn compute(
        &self,
        resolver: &Resolver,
        colliders: &ColliderStorage<Collider>,
        bodies: &BodyStorage<Body>,
    ) -> Result<Resolution> {
        let collider_a = colliders.get_collider(self.collider_a)?;
        let collider_b = colliders.get_collider(self.collider_b)?;

        if collider_a.collision_type() == CollisionType::PreventCollision
            || collider_b.collision_type() == CollisionType::PreventCollision
        {
            warn!(a = ?self.collider_a, b = ?self.collider_b, "contact with a PreventCollision collider");
            return Err(PhysicsError::InvalidParameter(format!(
                "contact between {:?} and {:?} involves a PreventCollision collider",
                self.collider_a, self.collider_b
            )));
        }

        let pair = ContactPair {
            handle_a: self.collider_a,
            handle_b: self.collider_b,
            collider_a,
            collider_b,
            body_a: bodies.get_body(collider_a.body())?,
            body_b: bodies.get_body(collider_b.body())?,
            mtv: self.mtv,
            point: self.point,
            normal: self.normal,
        };

        Ok(resolver.resolve(&pair))
    }

    /// Resolves this contact: emits pre-collision events for A then B,
    /// applies the body changes, then emits post-collision events for A
    /// then B.
    ///
    /// Nothing is emitted or mutated when an error is returned.
    pub fn resolve<S: EventSink + ?Sized>(
        &self,
        resolver: &Resolver,
        colliders: &ColliderStorage<Collider>,
        bodies: &mut BodyStorage<Body>,
        events: &mut S,
    ) -> Result<()> {
        let resolution = self.compute(resolver, colliders, bodies)?;

        let body_a = colliders.get_collider(self.collider_a)?.body();
        let body_b = colliders.get_collider(self.collider_b)?.body();

        for event in resolution.pre_events {
            events.emit(event);
        }

        if !resolution.delta_a.is_zero() {
            resolution.delta_a.apply(bodies.get_body_mut(body_a)?);
        }
        if !resolution.delta_b.is_zero() {
            resolution.delta_b.apply(bodies.get_body_mut(body_b)?);
        }

        for event in resolution.post_events {
            events.emit(event);
        }

        Ok(())
    }
}
