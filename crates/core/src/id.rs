//! Strongly-typed identifiers used across commands and events.
//!
//! Every id is a UUID underneath. The text form is always the 36-character
//! hyphenated one, both when printing and when parsing.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;
use crate::verbatim::Verbatim;

/// Length of the canonical hyphenated UUID text (`8-4-4-4-12`).
pub const HYPHENATED_LEN: usize = 36;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh, time-ordered (v7) id.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for Verbatim<$name> {
            fn from(value: $name) -> Self {
                Verbatim::from_parts(value, value.to_string())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hyphenated(s)
                    .map(Self)
                    .map_err(|message| ParseError::new(stringify!($name), message))
            }
        }
    };
}

fn parse_hyphenated(s: &str) -> Result<Uuid, String> {
    if s.len() != HYPHENATED_LEN {
        return Err(format!(
            "expected {HYPHENATED_LEN} characters in hyphenated form, got {}",
            s.len()
        ));
    }
    Uuid::try_parse(s).map_err(|e| e.to_string())
}

uuid_id!(
    /// Identifier of a recorded event (generated at translation time).
    EventId
);
uuid_id!(
    /// Identifier of a platform user (talent, sponsor or representative).
    UserId
);
uuid_id!(
    /// Identifier of an uploaded talent video.
    VideoId
);
uuid_id!(
    /// Identifier of a call for talent videos.
    CallId
);
uuid_id!(PlaylistId);
uuid_id!(ProposalId);
uuid_id!(
    /// Identifier of a saved talent search.
    SearchId
);
uuid_id!(
    /// Identifier of one video submission to a call.
    SubmissionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_ids_are_distinct() {
        let ids: HashSet<EventId> = (0..1_000).map(|_| EventId::new()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn parse_rejects_garbage_with_kind() {
        let err = UserId::from_str("not-a-uuid").unwrap_err();
        assert_eq!(err.kind(), "UserId");
    }

    #[test]
    fn parse_rejects_simple_form() {
        assert!(CallId::from_str("8c1f9d361b7e4a599a0e6f1d2b3c4d5e").is_err());
        assert!(CallId::from_str("8c1f9d36-1b7e-4a59-9a0e-6f1d2b3c4d5e").is_ok());
    }

    #[test]
    fn serializes_as_bare_uuid_string() {
        let id = VideoId::from_str("8c1f9d36-1b7e-4a59-9a0e-6f1d2b3c4d5e").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("8c1f9d36-1b7e-4a59-9a0e-6f1d2b3c4d5e"));
        assert_eq!(id.to_string(), "8c1f9d36-1b7e-4a59-9a0e-6f1d2b3c4d5e");
    }
}
