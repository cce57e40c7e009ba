use std::sync::Arc;

use crate::batch::{BodyHandle, SubContactFlags};
use crate::events::{ContactListener, ContactRecord, ListenerRegistry};

/// Delivers the discrete records of one step to the registered listeners.
///
/// `records` must be the discrete prefix produced by
/// [`sort_and_count_discrete`](crate::pipeline::sort_and_count_discrete). For
/// each record, the primary body's listener receives the record's view and
/// the secondary body's listener the flipped view — each side exactly once.
/// Bodies without a listener are skipped silently; that is the steady state
/// for untracked bodies, not an error.
///
/// Consecutive records for the same ordered body pair (the common case after
/// sorting, since a group's sub-contacts end up adjacent) reuse the
/// previously resolved listeners instead of probing the registry again.
pub fn dispatch_discrete(records: &[ContactRecord], registry: &ListenerRegistry) {
    let mut cached_pair: Option<(BodyHandle, BodyHandle)> = None;
    let mut this_listener: Option<Arc<dyn ContactListener>> = None;
    let mut other_listener: Option<Arc<dyn ContactListener>> = None;

    for record in records {
        let view = record.view;
        let pair = (view.this_body(), view.other_body());
        if cached_pair != Some(pair) {
            this_listener = registry.get(pair.0).cloned();
            other_listener = registry.get(pair.1).cloned();
            cached_pair = Some(pair);
        }

        if record.flags.contains(SubContactFlags::BEGIN) {
            if let Some(listener) = &this_listener {
                listener.on_contact_begin(&view);
            }
            if let Some(listener) = &other_listener {
                listener.on_contact_begin(&view.as_flipped());
            }
        }
        if record.flags.contains(SubContactFlags::END) {
            if let Some(listener) = &this_listener {
                listener.on_contact_end(&view);
            }
            if let Some(listener) = &other_listener {
                listener.on_contact_end(&view.as_flipped());
            }
        }
    }
}
