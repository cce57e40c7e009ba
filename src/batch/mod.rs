//! Engine-facing contact data: body identities, sub-contacts, contact
//! groups, and the raw relative-velocity accessor.

pub use self::body::{BodyHandle, ColliderHandle};
pub use self::group::{ContactBatch, ContactGroup};
pub use self::raw::{ProbeError, RelativeVelocityReader};
pub use self::sub_contact::{SubContact, SubContactFlags};

mod body;
mod group;
mod raw;
mod sub_contact;
