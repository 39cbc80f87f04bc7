use crate::bodies::Body;
use crate::integration::Integrator;

/// Semi-implicit Euler step for contact-resolved bodies.
///
/// Positional corrections deposited by the resolver are applied first, then
/// the body moves with its (already resolved) velocities.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&mut self, body: &mut Body, dt: f32) {
        body.apply_mtv();

        let position = body.get_position() + body.get_linear_velocity() * dt;
        body.set_position(position);

        let rotation = body.get_rotation() + body.get_angular_velocity() * dt;
        body.set_rotation(rotation);
    }
}
