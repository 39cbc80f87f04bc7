use crate::bodies::Body;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances a body over a time step
    fn integrate(&mut self, body: &mut Body, dt: f32);
}
