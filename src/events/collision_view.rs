use core::fmt;

use crate::batch::{BodyHandle, ColliderHandle, ContactGroup, SubContact, SubContactFlags};
use crate::math::Vector;

/// Snapshot of one sub-contact, framed from the perspective of one of its two
/// bodies.
///
/// A view captures enough of the originating contact group and sub-contact
/// (body and collider identities, summed impulse, relative velocity,
/// transition flags) for a listener to answer geometry and velocity queries
/// after the engine has discarded the step's groups.
///
/// Views are created from the primary body's perspective; [`as_flipped`]
/// reinterprets the same snapshot from the secondary body's side — this/other
/// swapped, relative velocity negated — without copying the underlying
/// sub-contact data.
///
/// [`as_flipped`]: CollisionView::as_flipped
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionView {
    body: BodyHandle,
    other_body: BodyHandle,
    collider: ColliderHandle,
    other_collider: ColliderHandle,
    impulse: Vector,
    relative_velocity: Vector,
    contact_count: u32,
    flags: SubContactFlags,
    flipped: bool,
}

impl CollisionView {
    pub(crate) fn new(group: &ContactGroup, sub: &SubContact, relative_velocity: Vector) -> Self {
        CollisionView {
            body: group.body(),
            other_body: group.other_body(),
            collider: sub.collider,
            other_collider: sub.other_collider,
            impulse: sub.impulse,
            relative_velocity,
            contact_count: sub.contact_count,
            flags: sub.flags,
            flipped: false,
        }
    }

    /// The body this view is framed from.
    #[inline]
    pub fn this_body(&self) -> BodyHandle {
        if self.flipped {
            self.other_body
        } else {
            self.body
        }
    }

    /// The body on the other side of the contact.
    #[inline]
    pub fn other_body(&self) -> BodyHandle {
        if self.flipped {
            self.body
        } else {
            self.other_body
        }
    }

    /// The collider attached to [`this_body`](Self::this_body).
    #[inline]
    pub fn this_collider(&self) -> ColliderHandle {
        if self.flipped {
            self.other_collider
        } else {
            self.collider
        }
    }

    /// The collider attached to [`other_body`](Self::other_body).
    #[inline]
    pub fn other_collider(&self) -> ColliderHandle {
        if self.flipped {
            self.collider
        } else {
            self.other_collider
        }
    }

    /// Sum of the impulses applied at this sub-contact's contact points.
    #[inline]
    pub fn impulse(&self) -> Vector {
        self.impulse
    }

    /// Velocity of [`this_body`](Self::this_body) relative to
    /// [`other_body`](Self::other_body); the sign follows the view's
    /// orientation.
    #[inline]
    pub fn relative_velocity(&self) -> Vector {
        if self.flipped {
            -self.relative_velocity
        } else {
            self.relative_velocity
        }
    }

    /// Overrides the relative velocity, expressed in the primary (unflipped)
    /// body's frame.
    #[inline]
    pub fn set_relative_velocity(&mut self, velocity: Vector) {
        self.relative_velocity = velocity;
    }

    /// Number of contact points between the two colliders.
    #[inline]
    pub fn contact_count(&self) -> u32 {
        self.contact_count
    }

    /// The transition flags of the underlying sub-contact.
    #[inline]
    pub fn flags(&self) -> SubContactFlags {
        self.flags
    }

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

    /// Whether this contact is neither beginning nor ending this step.
    #[inline]
    pub fn is_ongoing(&self) -> bool {
        !self.flags.is_discrete()
    }

    /// Whether this view is framed from the secondary body's perspective.
    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Returns the same snapshot framed from the other body's perspective.
    #[inline]
    pub fn as_flipped(mut self) -> Self {
        self.flipped = !self.flipped;
        self
    }
}

impl Default for CollisionView {
    fn default() -> Self {
        CollisionView {
            body: BodyHandle(0),
            other_body: BodyHandle(0),
            collider: ColliderHandle(0),
            other_collider: ColliderHandle(0),
            impulse: Vector::zeros(),
            relative_velocity: Vector::zeros(),
            contact_count: 0,
            flags: SubContactFlags::empty(),
            flipped: false,
        }
    }
}

impl fmt::Display for CollisionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_begin() {
            "BEGIN"
        } else if self.is_end() {
            "END"
        } else {
            "ONGOING"
        };
        write!(
            f,
            "This(body {}, collider {}) - Other(body {}, collider {}) {}",
            self.this_body().raw(),
            self.this_collider().raw(),
            self.other_body().raw(),
            self.other_collider().raw(),
            kind
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::batch::{BodyHandle, ColliderHandle, ContactGroup, SubContact, SubContactFlags};
    use crate::math::Vector;

    use super::CollisionView;

    fn view() -> CollisionView {
        let group = ContactGroup::new(
            BodyHandle(1),
            BodyHandle(2),
            Vector::zeros(),
            Vec::new(),
        );
        let sub = SubContact {
            collider: ColliderHandle(10),
            other_collider: ColliderHandle(20),
            impulse: Vector::new(0.0, 9.0, 0.0),
            contact_count: 4,
            flags: SubContactFlags::BEGIN,
        };
        CollisionView::new(&group, &sub, Vector::new(1.0, -2.0, 3.0))
    }

    #[test]
    fn flipping_swaps_sides_and_negates_velocity() {
        let flipped = view().as_flipped();
        assert_eq!(flipped.this_body(), BodyHandle(2));
        assert_eq!(flipped.other_body(), BodyHandle(1));
        assert_eq!(flipped.this_collider(), ColliderHandle(20));
        assert_eq!(flipped.other_collider(), ColliderHandle(10));
        assert_eq!(flipped.relative_velocity(), Vector::new(-1.0, 2.0, -3.0));
        assert!(flipped.flipped());
    }

    #[test]
    fn double_flip_is_identity() {
        let twice = view().as_flipped().as_flipped();
        assert_eq!(twice, view());
    }

    #[test]
    fn flipping_preserves_impulse_and_flags() {
        let flipped = view().as_flipped();
        assert_eq!(flipped.impulse(), Vector::new(0.0, 9.0, 0.0));
        assert!(flipped.is_begin());
        assert!(!flipped.is_end());
        assert_eq!(flipped.contact_count(), 4);
    }
}
