//! Raw access to the engine-side relative-velocity field.

use core::mem;

use crate::batch::{BodyHandle, ContactGroup};
use crate::math::{Real, Vector};

// Arbitrary, distinct, and exactly representable at `f32` precision so the
// probe compares equal in both scalar modes.
const SENTINEL_A: [Real; 3] = [-362491.0, 904617.0, -156883.0];
const SENTINEL_B: [Real; 3] = [733229.0, -41947.0, 589571.0];

/// Failure to locate the relative-velocity field inside [`ContactGroup`].
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProbeError {
    /// No byte offset held the sentinel pattern in both probe rounds.
    #[error("relative-velocity probe did not find the field in the group layout")]
    FieldNotFound,
    /// Several byte offsets held the sentinel patterns.
    #[error("relative-velocity probe matched several offsets; the group layout is ambiguous")]
    AmbiguousLayout,
}

/// Reads the private relative-velocity field of [`ContactGroup`] through a
/// byte offset discovered once at pipeline start.
///
/// # Contract
///
/// The engine keeps the group-level relative velocity out of the public
/// accessor surface. [`probe`](Self::probe) rediscovers the field at runtime:
/// it builds two probe groups whose velocity is set to distinct sentinel
/// vectors and scans the struct's bytes for them; both rounds must agree on
/// exactly one `Real`-aligned offset. Everything else in the two probes is
/// bit-identical, so no other region of the struct can match both sentinels
/// and a successful probe identifies the field itself.
///
/// The cached offset is valid for every `ContactGroup` in the process since
/// the type is `#[repr(C)]`. A failed probe is fatal for pipeline
/// initialization: a wrong offset would silently corrupt the velocity of
/// every dispatched event.
///
/// This type is the only place in the crate performing raw-memory reads.
#[derive(Copy, Clone, Debug)]
pub struct RelativeVelocityReader {
    offset: usize,
}

impl RelativeVelocityReader {
    /// Performs the one-time field discovery.
    pub fn probe() -> Result<Self, ProbeError> {
        let mut first = Vec::new();
        let mut second = Vec::new();
        Self::candidates(&SENTINEL_A, &mut first);
        Self::candidates(&SENTINEL_B, &mut second);

        let mut agreed = first
            .iter()
            .copied()
            .filter(|offset| second.contains(offset));

        match (agreed.next(), agreed.next()) {
            (Some(offset), None) => {
                log::debug!("relative-velocity field located at byte offset {}", offset);
                Ok(RelativeVelocityReader { offset })
            }
            (None, _) => Err(ProbeError::FieldNotFound),
            (Some(_), Some(_)) => Err(ProbeError::AmbiguousLayout),
        }
    }

    /// Reads the relative velocity of `group`.
    #[inline]
    pub fn read(&self, group: &ContactGroup) -> Vector {
        // SAFETY: `offset` was validated by `probe` against two independent
        // sentinel rounds, and `ContactGroup` is `repr(C)`, so it designates
        // the in-bounds, `Real`-aligned relative-velocity field of every
        // instance of the type.
        let [x, y, z] = unsafe {
            (group as *const ContactGroup)
                .cast::<u8>()
                .add(self.offset)
                .cast::<[Real; 3]>()
                .read()
        };
        Vector::new(x, y, z)
    }

    /// Scans one probe group for `sentinel`, pushing every matching
    /// `Real`-aligned byte offset.
    fn candidates(sentinel: &[Real; 3], found: &mut Vec<usize>) {
        let probe = ContactGroup::new(
            BodyHandle(0),
            BodyHandle(1),
            Vector::new(sentinel[0], sentinel[1], sentinel[2]),
            Vec::new(),
        );

        let base = (&probe as *const ContactGroup).cast::<u8>();
        let end = mem::size_of::<ContactGroup>() - mem::size_of::<[Real; 3]>();
        let mut offset = 0;
        while offset <= end {
            // SAFETY: the window stays within the probe allocation and is
            // `Real`-aligned (the base pointer is, and the scan advances by
            // `align_of::<Real>()`). A window overlapping non-velocity data
            // only yields a candidate if it happens to match the sentinel,
            // which the two-round agreement in `probe` rules out.
            let candidate = unsafe { base.add(offset).cast::<[Real; 3]>().read() };
            if candidate == *sentinel {
                found.push(offset);
            }
            offset += mem::align_of::<Real>();
        }
    }
}
