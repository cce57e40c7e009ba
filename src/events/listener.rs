use crate::events::CollisionView;

/// Capability implemented by consumers interested in begin/end contact
/// events of one body.
///
/// Callbacks run synchronously on the thread advancing the physics step; a
/// listener must not block, or it stalls the step. Listeners that accumulate
/// state do so through interior mutability.
pub trait ContactListener {
    /// Called once per begin record involving the registered body, with the
    /// view framed from that body's perspective.
    fn on_contact_begin(&self, view: &CollisionView);

    /// Called once per end record involving the registered body, with the
    /// view framed from that body's perspective.
    fn on_contact_end(&self, view: &CollisionView);
}
