use crate::batch::ColliderHandle;
use crate::math::Vector;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Transition flags of a sub-contact relative to the previous physics step.
///
/// An empty flag set marks an ongoing ("stay") contact.
pub struct SubContactFlags(u8);

bitflags::bitflags! {
    impl SubContactFlags: u8 {
        /// The two colliders started touching during this step.
        const BEGIN = 1;
        /// The two colliders stopped touching during this step.
        const END = 1 << 1;
    }
}

impl SubContactFlags {
    /// Whether this sub-contact is a begin or end transition rather than an
    /// ongoing contact.
    #[inline]
    pub fn is_discrete(self) -> bool {
        self.intersects(Self::BEGIN | Self::END)
    }
}

/// A single colliding collider-pair's contact datum within a contact group.
///
/// The engine emits one sub-contact per pair of colliding shapes; several
/// sub-contacts between the same two bodies each produce their own event
/// record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubContact {
    /// The collider attached to the group's primary body.
    pub collider: ColliderHandle,
    /// The collider attached to the group's secondary body.
    pub other_collider: ColliderHandle,
    /// Sum of the impulses applied at this sub-contact's contact points.
    pub impulse: Vector,
    /// Number of contact points between the two colliders.
    pub contact_count: u32,
    /// Begin/end transition flags.
    pub flags: SubContactFlags,
}

impl SubContact {
    /// Whether the colliders started touching during this step.
    #[inline]
    pub fn is_begin(&self) -> bool {
        self.flags.contains(SubContactFlags::BEGIN)
    }

    /// Whether the colliders stopped touching during this step.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.flags.contains(SubContactFlags::END)
    }
}
