use tracing::debug;

use crate::bodies::{Body, Collider};
use crate::collision::{CollisionContact, CollisionFilter, GroupMaskFilter, Resolver};
use crate::core::{
    BodyHandle, BodyStorage, ColliderHandle, ColliderStorage, CollisionEvent, EventQueue,
    ResolutionConfig, Storage,
};
use crate::error::PhysicsError;
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::Result;

/// Owns bodies and colliders and resolves the contacts reported for them
/// each tick.
///
/// Overlap detection is not part of the world: callers pass in the
/// contacts their narrow phase produced.
pub struct PhysicsWorld {
    /// All bodies in the world
    bodies: BodyStorage<Body>,

    /// All colliders in the world
    colliders: ColliderStorage<Collider>,

    config: ResolutionConfig,

    /// Resolver built from `config`
    resolver: Resolver,

    /// Decides which reported pairs reach the resolver
    filter: Box<dyn CollisionFilter>,

    integrator: Box<dyn Integrator>,

    /// Queue of collision events
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsWorld {
    /// Creates a new world with the default configuration
    pub fn new() -> Self {
        Self::with_config(ResolutionConfig::default())
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: ResolutionConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            colliders: ColliderStorage::new(),
            config,
            resolver: Resolver::new(&config),
            filter: Box::new(GroupMaskFilter::new()),
            integrator: Box::new(SymplecticEulerIntegrator::new()),
            events: EventQueue::new(),
            time: 0.0,
        }
    }

    /// Replaces the pair filter
    pub fn set_filter(&mut self, filter: Box<dyn CollisionFilter>) {
        self.filter = filter;
    }

    /// Replaces the integrator
    pub fn set_integrator(&mut self, integrator: Box<dyn Integrator>) {
        self.integrator = integrator;
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    pub fn get_config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Replaces the configuration and rebuilds the resolver
    pub fn set_config(&mut self, config: ResolutionConfig) {
        self.config = config;
        self.resolver = Resolver::new(&config);
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Removes a body and every collider attached to it
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let attached: Vec<ColliderHandle> = self
            .colliders
            .iter()
            .filter(|(_, collider)| collider.body() == handle)
            .map(|(c_handle, _)| c_handle)
            .collect();

        let body = self.bodies.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;

        for c_handle in attached {
            self.colliders.remove(c_handle);
        }

        Ok(body)
    }

    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Validates and adds a collider. Its body must already be in the world.
    pub fn add_collider(&mut self, collider: Collider) -> Result<ColliderHandle> {
        collider.validate()?;
        self.bodies.get_body(collider.body())?;
        Ok(self.colliders.add(collider))
    }

    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<Collider> {
        self.colliders.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Collider with handle {:?} not found", handle))
        })
    }

    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&Collider> {
        self.colliders.get_collider(handle)
    }

    pub fn get_collider_mut(&mut self, handle: ColliderHandle) -> Result<&mut Collider> {
        self.colliders.get_collider_mut(handle)
    }

    /// Resolves a single contact, bypassing the pair filter
    pub fn resolve_contact(&mut self, contact: &CollisionContact) -> Result<()> {
        contact.resolve(&self.resolver, &self.colliders, &mut self.bodies, &mut self.events)
    }

    /// Resolves contacts in the order given, skipping pairs the filter
    /// rejects. Returns how many contacts were resolved.
    ///
    /// Stops at the first error; contacts before it stay resolved.
    pub fn resolve_contacts(&mut self, contacts: &[CollisionContact]) -> Result<usize> {
        let mut resolved = 0;

        for contact in contacts {
            let collider_a = self.colliders.get_collider(contact.collider_a)?;
            let collider_b = self.colliders.get_collider(contact.collider_b)?;

            if !self.filter.should_collide(collider_a, collider_b) {
                debug!(a = ?contact.collider_a, b = ?contact.collider_b, "pair filtered out");
                continue;
            }

            self.resolve_contact(contact)?;
            resolved += 1;
        }

        Ok(resolved)
    }

    /// Advances every body by `dt`, applying pending positional corrections
    pub fn integrate(&mut self, dt: f32) {
        for (_, body) in self.bodies.iter_mut() {
            self.integrator.integrate(body, dt);
        }
        self.time += dt;
    }

    /// Resolves this tick's contacts, then integrates.
    ///
    /// Events left over from the previous tick are discarded first, so after
    /// a step the queue holds only this tick's events.
    pub fn step(&mut self, contacts: &[CollisionContact], dt: f32) -> Result<usize> {
        self.events.clear();

        let resolved = self.resolve_contacts(contacts)?;
        self.integrate(dt);
        Ok(resolved)
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes and returns all queued collision events, oldest first
    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        self.events.drain()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
