//! Identifier newtypes for stored records.

use core::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                u64::from(id.0)
            }
        }
    };
}

record_id!(
    /// Opaque player identity supplied by the transport (e.g. a chat user id).
    PlayerId(u64)
);
record_id!(
    /// Store-assigned mission identifier.
    MissionId(u64)
);
record_id!(CrewId(u64));
record_id!(AllianceId(u64));
record_id!(
    /// Catalog identifier of a shop item.
    ItemId(u32)
);
