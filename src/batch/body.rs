/// The stable integer identity of a simulated rigid body.
///
/// Handles are assigned by the physics engine and remain valid for the
/// lifetime of the body. Two handles are equal if and only if they refer to
/// the same body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// The raw integer identity of this body.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The stable integer identity of one collision shape attached to a body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct ColliderHandle(pub u32);

impl ColliderHandle {
    /// The raw integer identity of this collider.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}
