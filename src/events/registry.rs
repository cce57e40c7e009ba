use std::sync::Arc;

use crate::batch::BodyHandle;
use crate::events::ContactListener;
use crate::utils::hashmap::HashMap;

/// Body-identity → listener table.
///
/// Insertion and removal happen between steps, from the engine-owning side;
/// the pipeline only reads the table while dispatching. Registering a body
/// that already has a listener replaces it (last write wins).
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<BodyHandle, Arc<dyn ContactListener>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ListenerRegistry {
            listeners: HashMap::default(),
        }
    }

    /// Registers `listener` for `body`, replacing any previous registration.
    pub fn insert(&mut self, body: BodyHandle, listener: Arc<dyn ContactListener>) {
        let _ = self.listeners.insert(body, listener);
    }

    /// Removes the listener of `body`, returning whether one was registered.
    pub fn remove(&mut self, body: BodyHandle) -> bool {
        self.listeners.remove(&body).is_some()
    }

    /// The listener registered for `body`, if any.
    #[inline]
    pub fn get(&self, body: BodyHandle) -> Option<&Arc<dyn ContactListener>> {
        self.listeners.get(&body)
    }

    /// Number of registered listeners.
    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
