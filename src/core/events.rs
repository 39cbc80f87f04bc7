use crate::core::{ColliderHandle, Side};
use crate::math::Vector2;
use std::collections::VecDeque;

/// Types of collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionEventType {
    /// Emitted before a contact mutates any body
    PreCollision,

    /// Emitted after a contact has been resolved
    PostCollision,
}

/// A collision event reported to one participant of a contact.
///
/// `side` and `mtv` are expressed from the point of view of `collider`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub event_type: CollisionEventType,

    /// The collider receiving the event
    pub collider: ColliderHandle,

    /// The other participant of the contact
    pub other: ColliderHandle,

    pub side: Side,

    pub mtv: Vector2,
}

impl CollisionEvent {
    pub fn pre(collider: ColliderHandle, other: ColliderHandle, side: Side, mtv: Vector2) -> Self {
        Self {
            event_type: CollisionEventType::PreCollision,
            collider,
            other,
            side,
            mtv,
        }
    }

    pub fn post(collider: ColliderHandle, other: ColliderHandle, side: Side, mtv: Vector2) -> Self {
        Self {
            event_type: CollisionEventType::PostCollision,
            collider,
            other,
            side,
            mtv,
        }
    }
}

/// Receives collision events synchronously, in emission order
pub trait EventSink {
    fn emit(&mut self, event: CollisionEvent);
}

impl EventSink for Vec<CollisionEvent> {
    fn emit(&mut self, event: CollisionEvent) {
        self.push(event);
    }
}

/// A FIFO queue of collision events
#[derive(Debug, Default)]
pub struct EventQueue {
    collision_events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.collision_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty()
    }

    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    /// Removes and returns every queued event, oldest first
    pub fn drain(&mut self) -> Vec<CollisionEvent> {
        self.collision_events.drain(..).collect()
    }

    /// Gets all collision events of a specific type
    pub fn get_collision_events_of_type(&self, event_type: CollisionEventType) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all events delivered to a specific collider
    pub fn get_collision_events_for_collider(&self, collider: ColliderHandle) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.collider == collider)
            .collect()
    }
}

impl EventSink for EventQueue {
    fn emit(&mut self, event: CollisionEvent) {
        self.add_collision_event(event);
    }
}
