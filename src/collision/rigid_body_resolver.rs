use tracing::{debug, trace};

use crate::bodies::CollisionType;
use crate::collision::resolver::{BodyDelta, ContactPair, ContactResolver, Resolution};

/// Impulse-based resolution with restitution and Coulomb friction.
///
/// Single contact, single iteration: a normal impulse from Hecker's
/// formula, then a friction impulse clamped to the friction cone. Position
/// error is not corrected here; the mtv is deposited on the bodies with
/// [`Body::add_mtv`](crate::bodies::Body::add_mtv) and applied by the
/// integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigidBodyResolver {
    /// Whether impulses change angular velocity
    allow_rotation: bool,
}

impl RigidBodyResolver {
    pub fn new(allow_rotation: bool) -> Self {
        Self { allow_rotation }
    }

    pub fn allows_rotation(&self) -> bool {
        self.allow_rotation
    }
}

impl Default for RigidBodyResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ContactResolver for RigidBodyResolver {
    fn resolve(&self, pair: &ContactPair<'_>) -> Resolution {
        if pair.is_self_contact() {
            debug!(a = ?pair.handle_a, b = ?pair.handle_b, "skipping self contact");
            return Resolution::none();
        }

        let type_a = pair.collider_a.collision_type();
        let type_b = pair.collider_b.collision_type();

        if type_a == CollisionType::Passive || type_b == CollisionType::Passive {
            debug!(a = ?pair.handle_a, b = ?pair.handle_b, "passive contact, events only");
            return Resolution::events_only(pair);
        }

        let a_fixed = type_a == CollisionType::Fixed;
        let b_fixed = type_b == CollisionType::Fixed;
        if a_fixed && b_fixed {
            return Resolution::events_only(pair);
        }

        let inv_mass_a = pair.collider_a.inverse_mass();
        let inv_mass_b = pair.collider_b.inverse_mass();
        let inv_inertia_a = pair.collider_a.inverse_inertia();
        let inv_inertia_b = pair.collider_b.inverse_inertia();

        let (restitution, friction) = pair.collider_a.material().combine(pair.collider_b.material());

        let normal = pair.normal.normalize();
        let tangent = normal.perpendicular().normalize();

        // lever arms from each centroid to the contact point
        let r_a = pair.point - pair.collider_a.center(pair.body_a);
        let r_b = pair.point - pair.collider_b.center(pair.body_b);

        let vel_a = pair.body_a.get_linear_velocity() + r_a.angular_cross(pair.body_a.get_angular_velocity());
        let vel_b = pair.body_b.get_linear_velocity() + r_b.angular_cross(pair.body_b.get_angular_velocity());
        let rel_vel = vel_b - vel_a;

        let rv_normal = rel_vel.dot(&normal);
        let rv_tangent = rel_vel.dot(&tangent);

        let r_a_tangent = r_a.dot(&tangent);
        let r_a_normal = r_a.dot(&normal);
        let r_b_tangent = r_b.dot(&tangent);
        let r_b_normal = r_b.dot(&normal);

        if rv_normal > 0.0 {
            debug!(a = ?pair.handle_a, b = ?pair.handle_b, rv_normal, "separating contact");
            return Resolution::events_only(pair);
        }

        let normal_mass = inv_mass_a
            + inv_mass_b
            + inv_inertia_a * r_a_tangent * r_a_tangent
            + inv_inertia_b * r_b_tangent * r_b_tangent;

        if normal_mass <= 0.0 {
            return Resolution::events_only(pair);
        }

        let impulse = -(1.0 + restitution) * rv_normal / normal_mass;

        let mut delta_a = BodyDelta::default();
        let mut delta_b = BodyDelta::default();

        if !a_fixed {
            delta_a.linear_velocity -= normal * (impulse * inv_mass_a);
            if self.allow_rotation {
                delta_a.angular_velocity -= impulse * inv_inertia_a * r_a.cross(&normal);
            }
        }
        if !b_fixed {
            delta_b.linear_velocity += normal * (impulse * inv_mass_b);
            if self.allow_rotation {
                delta_b.angular_velocity += impulse * inv_inertia_b * r_b.cross(&normal);
            }
        }

        // the movable side takes the whole correction, two movable sides split it
        if a_fixed {
            delta_b.mtv = pair.mtv;
        } else if b_fixed {
            delta_a.mtv = -pair.mtv;
        } else {
            delta_b.mtv = pair.mtv * 0.5;
            delta_a.mtv = pair.mtv * -0.5;
        }

        trace!(impulse, restitution, rv_normal, "normal impulse");

        if friction != 0.0 && rv_tangent != 0.0 {
            // follow the actual sliding direction rather than the fixed tangent
            let t = (rel_vel - normal * rel_vel.dot(&normal)).normalize();

            let tangent_mass = inv_mass_a
                + inv_mass_b
                + r_a_normal * r_a_normal * inv_inertia_a
                + r_b_normal * r_b_normal * inv_inertia_b;
            let jt = rel_vel.dot(&t) / tangent_mass;

            let max_friction = impulse * friction;
            let friction_impulse = if jt.abs() <= max_friction {
                -(t * jt)
            } else {
                t * -max_friction
            };

            if !a_fixed {
                delta_a.linear_velocity -= friction_impulse * inv_mass_a;
                if self.allow_rotation {
                    delta_a.angular_velocity -= friction_impulse.dot(&t) * inv_inertia_a * r_a.cross(&t);
                }
            }
            if !b_fixed {
                delta_b.linear_velocity += friction_impulse * inv_mass_b;
                if self.allow_rotation {
                    delta_b.angular_velocity += friction_impulse.dot(&t) * inv_inertia_b * r_b.cross(&t);
                }
            }

            trace!(jt, max_friction, "friction impulse");
        }

        Resolution {
            pre_events: pair.pre_events(),
            delta_a,
            delta_b,
            post_events: pair.post_events(pair.mtv, -pair.mtv),
        }
    }
}
