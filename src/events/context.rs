use std::sync::Arc;

use crate::batch::{BodyHandle, ContactBatch, ProbeError};
use crate::events::{ContactListener, ListenerRegistry};
use crate::pipeline::{Counters, EventPipeline};

/// Entry point wiring body listeners to the contact-event pipeline.
///
/// The context is an explicit object owned by whoever wires the engine's
/// per-step callback; there is no process-wide state. Its lifecycle is driven
/// by the listener count: registering the first listener starts the pipeline
/// (buffer allocation and the one-time relative-velocity probe), removing the
/// last one tears it down and releases the buffers. A later registration
/// starts it again.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use contact_events::batch::{BodyHandle, ContactBatch};
/// use contact_events::events::{CollisionView, ContactEvents, ContactListener};
///
/// struct Prints;
/// impl ContactListener for Prints {
///     fn on_contact_begin(&self, view: &CollisionView) {
///         println!("begin: {}", view);
///     }
///     fn on_contact_end(&self, view: &CollisionView) {
///         println!("end: {}", view);
///     }
/// }
///
/// let mut events = ContactEvents::new();
/// events.register(BodyHandle(1), Arc::new(Prints)).unwrap();
///
/// // Per physics step, hand over the engine-produced groups:
/// let groups = Vec::new();
/// events.handle_batch(&ContactBatch::new(&groups));
///
/// events.unregister(BodyHandle(1));
/// assert!(!events.is_running());
/// ```
pub struct ContactEvents {
    registry: ListenerRegistry,
    pipeline: Option<EventPipeline>,
}

impl ContactEvents {
    /// Creates an idle context with no listeners and no running pipeline.
    pub fn new() -> Self {
        ContactEvents {
            registry: ListenerRegistry::new(),
            pipeline: None,
        }
    }

    /// Registers `listener` for `body`, starting the pipeline if this is the
    /// first registration.
    ///
    /// A listener already registered for `body` is replaced. The only failure
    /// is the relative-velocity probe of a first registration; the registry
    /// is left untouched in that case.
    pub fn register(
        &mut self,
        body: BodyHandle,
        listener: Arc<dyn ContactListener>,
    ) -> Result<(), ProbeError> {
        if self.pipeline.is_none() {
            self.pipeline = Some(EventPipeline::new()?);
            log::debug!("contact-event pipeline started");
        }
        self.registry.insert(body, listener);
        Ok(())
    }

    /// Unregisters the listener of `body`, stopping the pipeline when the
    /// last listener is removed. Unknown bodies are a no-op.
    pub fn unregister(&mut self, body: BodyHandle) {
        if !self.registry.remove(body) {
            return;
        }
        if self.registry.is_empty() && self.pipeline.take().is_some() {
            log::debug!("contact-event pipeline stopped");
        }
    }

    /// Whether the pipeline is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    /// The engine's per-step callback: aggregates `batch` and dispatches
    /// begin/end events to the registered listeners.
    ///
    /// Synchronous: all callbacks have run when this returns, and nothing of
    /// `batch` is retained. A batch arriving while no listener is registered
    /// is ignored.
    pub fn handle_batch(&mut self, batch: &ContactBatch<'_>) {
        if let Some(pipeline) = &mut self.pipeline {
            pipeline.step(batch, &self.registry);
        }
    }

    /// Diagnostic timing counters of the running pipeline, if any.
    #[inline]
    pub fn counters(&self) -> Option<&Counters> {
        self.pipeline.as_ref().map(EventPipeline::counters)
    }
}

impl Default for ContactEvents {
    fn default() -> Self {
        Self::new()
    }
}
