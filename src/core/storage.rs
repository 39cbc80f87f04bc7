use std::collections::HashMap;
use crate::core::{BodyHandle, ColliderHandle};
use crate::error::PhysicsError;
use crate::Result;

/// Generic arena of physics objects addressed by handle
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item to the storage and returns its handle
    fn add(&mut self, item: T) -> H;

    fn get(&self, handle: H) -> Option<&T>;

    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    fn remove(&mut self, handle: H) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);

    /// Returns all live handles
    fn handles(&self) -> Vec<H>;

    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a where T: 'a;

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a where T: 'a;
}

/// Implements [`Storage`] for a handle-keyed `HashMap` arena.
macro_rules! handle_storage {
    ($storage:ident, $handle:ident) => {
        impl<T> Storage<T, $handle> for $storage<T> {
            fn new() -> Self {
                Self {
                    items: HashMap::new(),
                    next_id: 1, // 0 is never handed out
                }
            }

            fn add(&mut self, item: T) -> $handle {
                let handle = $handle(self.next_id);
                self.next_id += 1;
                self.items.insert(handle, item);
                handle
            }

            fn get(&self, handle: $handle) -> Option<&T> {
                self.items.get(&handle)
            }

            fn get_mut(&mut self, handle: $handle) -> Option<&mut T> {
                self.items.get_mut(&handle)
            }

            fn remove(&mut self, handle: $handle) -> Option<T> {
                self.items.remove(&handle)
            }

            fn len(&self) -> usize {
                self.items.len()
            }

            fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            fn clear(&mut self) {
                self.items.clear();
            }

            fn handles(&self) -> Vec<$handle> {
                let mut handles: Vec<$handle> = self.items.keys().copied().collect();
                handles.sort();
                handles
            }

            fn iter<'a>(&'a self) -> impl Iterator<Item = ($handle, &'a T)> + 'a where T: 'a {
                self.items.iter().map(|(h, item)| (*h, item))
            }

            fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = ($handle, &'a mut T)> + 'a where T: 'a {
                self.items.iter_mut().map(|(h, item)| (*h, item))
            }
        }

        impl<T> Default for $storage<T> {
            fn default() -> Self {
                <Self as Storage<T, $handle>>::new()
            }
        }
    };
}

/// Storage for bodies
#[derive(Debug)]
pub struct BodyStorage<T> {
    items: HashMap<BodyHandle, T>,
    next_id: u32,
}

handle_storage!(BodyStorage, BodyHandle);

impl<T> BodyStorage<T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

/// Storage for colliders
#[derive(Debug)]
pub struct ColliderStorage<T> {
    items: HashMap<ColliderHandle, T>,
    next_id: u32,
}

handle_storage!(ColliderStorage, ColliderHandle);

impl<T> ColliderStorage<T> {
    /// Gets a collider by its handle, returning an error if not found
    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Collider with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a collider by its handle, returning an error if not found
    pub fn get_collider_mut(&mut self, handle: ColliderHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Collider with handle {:?} not found", handle)))
    }
}
