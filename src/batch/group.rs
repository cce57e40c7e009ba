use crate::batch::{BodyHandle, SubContact};
use crate::math::Vector;

/// All sub-contacts between one ordered pair of colliding bodies in one
/// physics step.
///
/// Groups are produced and owned by the physics engine; the event pipeline
/// only borrows them for the duration of one step and never retains a
/// reference past it.
///
/// The group-level relative velocity is part of the engine's internal
/// representation and is deliberately kept out of the public accessor
/// surface. It is read through [`RelativeVelocityReader`], which locates the
/// field once at pipeline start. The `#[repr(C)]` layout is part of that
/// reader's contract.
///
/// [`RelativeVelocityReader`]: crate::batch::RelativeVelocityReader
#[derive(Clone, Debug)]
#[repr(C)]
pub struct ContactGroup {
    body: BodyHandle,
    other_body: BodyHandle,
    // Read exclusively through `RelativeVelocityReader`, which the dead-code
    // analysis cannot see.
    #[allow(dead_code)]
    relative_velocity: Vector,
    contacts: Vec<SubContact>,
}

impl ContactGroup {
    /// Creates a group between `body` and `other_body`.
    ///
    /// `relative_velocity` is the velocity of `body` relative to
    /// `other_body`, measured at group granularity.
    pub fn new(
        body: BodyHandle,
        other_body: BodyHandle,
        relative_velocity: Vector,
        contacts: Vec<SubContact>,
    ) -> Self {
        ContactGroup {
            body,
            other_body,
            relative_velocity,
            contacts,
        }
    }

    /// The primary body of this group.
    #[inline]
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// The secondary body of this group.
    #[inline]
    pub fn other_body(&self) -> BodyHandle {
        self.other_body
    }

    /// The ordered sub-contacts of this group.
    #[inline]
    pub fn sub_contacts(&self) -> &[SubContact] {
        &self.contacts
    }

    /// Number of sub-contacts in this group.
    #[inline]
    pub fn sub_contact_count(&self) -> usize {
        self.contacts.len()
    }
}

/// Read-only view over the contact groups produced by one physics step.
///
/// This is the value handed to the pipeline by the engine callback. It only
/// borrows the engine's storage; nothing derived from it may outlive the
/// callback.
#[derive(Copy, Clone, Debug)]
pub struct ContactBatch<'a> {
    groups: &'a [ContactGroup],
}

impl<'a> ContactBatch<'a> {
    /// Wraps the groups of one physics step.
    #[inline]
    pub fn new(groups: &'a [ContactGroup]) -> Self {
        ContactBatch { groups }
    }

    /// Number of contact groups in this batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether this batch contains no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The underlying group slice.
    #[inline]
    pub fn groups(&self) -> &'a [ContactGroup] {
        self.groups
    }

    /// Iterates over the groups of this batch.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a ContactGroup> {
        self.groups.iter()
    }
}
