use tracing::trace;

use crate::bodies::{Body, Collider, CollisionType};
use crate::collision::resolver::{BodyDelta, ContactPair, ContactResolver, Resolution};
use crate::math::Vector2;

/// Positional push-back resolution.
///
/// Each `Active` collider is moved out of the overlap along the mtv (half
/// of it when both sides are `Active`) and loses the part of its velocity
/// that opposes the push. No impulses, no rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxResolver;

impl BoxResolver {
    pub fn new() -> Self {
        Self
    }

    /// Push for `collider` given its own displacement `push` out of the
    /// overlap. Returns the delta and the displacement actually applied.
    fn push_out(collider: &Collider, body: &Body, other: &Collider, push: Vector2) -> (BodyDelta, Vector2) {
        if !collider.collision_type().is_movable()
            || other.collision_type() == CollisionType::Passive
        {
            return (BodyDelta::default(), push);
        }

        let push = if other.collision_type() == CollisionType::Active {
            push * 0.5
        } else {
            push
        };

        let mut delta = BodyDelta {
            position: push,
            ..Default::default()
        };

        // cancel only the velocity component opposing the push
        let dir = push.normalize();
        let velocity = body.get_linear_velocity();
        if dir.dot(&velocity) < 0.0 {
            delta.linear_velocity = dir * dir.dot(&-velocity);
        }

        (delta, push)
    }
}

impl ContactResolver for BoxResolver {
    fn resolve(&self, pair: &ContactPair<'_>) -> Resolution {
        // normal and mtv point away from A, so A is pushed back along -mtv
        let (delta_a, push_a) = Self::push_out(pair.collider_a, pair.body_a, pair.collider_b, -pair.mtv);
        let (delta_b, push_b) = Self::push_out(pair.collider_b, pair.body_b, pair.collider_a, pair.mtv);

        trace!(?delta_a, ?delta_b, "box resolution");

        Resolution {
            pre_events: pair.pre_events(),
            delta_a,
            delta_b,
            post_events: pair.post_events(-push_a, -push_b),
        }
    }
}
