use crate::bodies::{Body, Collider};
use crate::collision::box_resolver::BoxResolver;
use crate::collision::rigid_body_resolver::RigidBodyResolver;
use crate::core::{ColliderHandle, CollisionEvent, ResolutionConfig, ResolutionStrategy, Side};
use crate::math::Vector2;

/// Read-only view of one contact: both colliders, their bodies as they
/// are before resolution, and the overlap geometry.
///
/// `mtv` and `normal` point away from collider A.
#[derive(Debug, Clone, Copy)]
pub struct ContactPair<'a> {
    pub handle_a: ColliderHandle,
    pub handle_b: ColliderHandle,
    pub collider_a: &'a Collider,
    pub collider_b: &'a Collider,
    pub body_a: &'a Body,
    pub body_b: &'a Body,
    pub mtv: Vector2,
    pub point: Vector2,
    pub normal: Vector2,
}

impl ContactPair<'_> {
    /// Side of collider A the contact happened on
    pub fn side(&self) -> Side {
        Side::from_direction(self.mtv)
    }

    /// Whether both colliders belong to the same body
    pub fn is_self_contact(&self) -> bool {
        self.collider_a.body() == self.collider_b.body()
    }

    /// Pre-collision events for A then B.
    ///
    /// Each event's mtv points from the receiving collider toward the other.
    pub fn pre_events(&self) -> Vec<CollisionEvent> {
        let side = self.side();
        vec![
            CollisionEvent::pre(self.handle_a, self.handle_b, side, self.mtv),
            CollisionEvent::pre(self.handle_b, self.handle_a, side.opposite(), -self.mtv),
        ]
    }

    /// Post-collision events for A then B, reporting the given mtvs
    pub fn post_events(&self, mtv_a: Vector2, mtv_b: Vector2) -> Vec<CollisionEvent> {
        let side = self.side();
        vec![
            CollisionEvent::post(self.handle_a, self.handle_b, side, mtv_a),
            CollisionEvent::post(self.handle_b, self.handle_a, side.opposite(), mtv_b),
        ]
    }
}

/// Additive change to one body produced by resolving a contact
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyDelta {
    /// Immediate position change
    pub position: Vector2,

    pub linear_velocity: Vector2,

    pub angular_velocity: f32,

    /// Positional correction deposited with [`Body::add_mtv`]
    pub mtv: Vector2,
}

impl BodyDelta {
    /// True when applying this delta would not touch the body
    pub fn is_zero(&self) -> bool {
        *self == BodyDelta::default()
    }

    pub fn apply(&self, body: &mut Body) {
        if self.position != Vector2::ZERO {
            body.translate(self.position);
        }
        if self.linear_velocity != Vector2::ZERO {
            body.set_linear_velocity(body.get_linear_velocity() + self.linear_velocity);
        }
        if self.angular_velocity != 0.0 {
            body.set_angular_velocity(body.get_angular_velocity() + self.angular_velocity);
        }
        if self.mtv != Vector2::ZERO {
            body.add_mtv(self.mtv);
        }
    }
}

/// Outcome of resolving one contact.
///
/// Pre events are emitted before the deltas are applied, post events after.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub pre_events: Vec<CollisionEvent>,
    pub delta_a: BodyDelta,
    pub delta_b: BodyDelta,
    pub post_events: Vec<CollisionEvent>,
}

impl Resolution {
    /// A resolution that emits nothing and changes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Events only, both bodies untouched
    pub fn events_only(pair: &ContactPair<'_>) -> Self {
        Self {
            pre_events: pair.pre_events(),
            post_events: pair.post_events(pair.mtv, -pair.mtv),
            ..Default::default()
        }
    }
}

/// A contact resolution algorithm
pub trait ContactResolver {
    fn resolve(&self, pair: &ContactPair<'_>) -> Resolution;
}

/// The resolution strategies, selected once from a [`ResolutionConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolver {
    Box(BoxResolver),
    RigidBody(RigidBodyResolver),
}

impl Resolver {
    pub fn new(config: &ResolutionConfig) -> Self {
        match config.strategy {
            ResolutionStrategy::Box => Resolver::Box(BoxResolver::new()),
            ResolutionStrategy::RigidBody => {
                Resolver::RigidBody(RigidBodyResolver::new(config.allow_rigid_body_rotation))
            }
        }
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        match self {
            Resolver::Box(_) => ResolutionStrategy::Box,
            Resolver::RigidBody(_) => ResolutionStrategy::RigidBody,
        }
    }
}

impl From<ResolutionConfig> for Resolver {
    fn from(config: ResolutionConfig) -> Self {
        Self::new(&config)
    }
}

impl ContactResolver for Resolver {
    fn resolve(&self, pair: &ContactPair<'_>) -> Resolution {
        match self {
            Resolver::Box(resolver) => resolver.resolve(pair),
            Resolver::RigidBody(resolver) => resolver.resolve(pair),
        }
    }
}
