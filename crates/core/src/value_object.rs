//! Value objects of the talent domain: equality by value, not identity.
//!
//! The enumerated values below are the closed vocabularies that commands may use.
//! Each one exposes its accepted spellings through `NAMES`, which is what the
//! schema registry feeds into its `oneof` rules, so the contract and the typed
//! value can never disagree.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two instances with
/// the same values are the same thing.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

macro_rules! string_enum {
    ($(#[$meta:meta])* $t:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $t {
            $($variant,)+
        }

        impl $t {
            /// Accepted spellings, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    other => Err(ParseError::new(
                        $kind,
                        format!("{other:?} is not one of {}", Self::NAMES.join(" ")),
                    )),
                }
            }
        }
    };
}

string_enum!(
    /// Role a user registers with.
    UserType,
    "UserType",
    [Talent, Sponsor, Representative]
);

string_enum!(
    /// What two matched users intend to do together.
    MatchType,
    "MatchType",
    [Contract, Collaborate, Sponsor, Train, Mediate]
);

string_enum!(
    /// Answer to a collaboration proposal.
    ProposalResponse,
    "ProposalResponse",
    [Accept, Reject]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_declaration_order() {
        assert_eq!(UserType::NAMES, &["Talent", "Sponsor", "Representative"]);
        assert_eq!(
            MatchType::NAMES,
            &["Contract", "Collaborate", "Sponsor", "Train", "Mediate"]
        );
        assert_eq!(ProposalResponse::NAMES, &["Accept", "Reject"]);
    }

    #[test]
    fn parse_and_display_agree() {
        for name in MatchType::NAMES {
            let parsed: MatchType = name.parse().unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "talent".parse::<UserType>().unwrap_err();
        assert_eq!(err.kind(), "UserType");
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_value(ProposalResponse::Reject).unwrap();
        assert_eq!(json, serde_json::json!("Reject"));
        let back: UserType = serde_json::from_value(serde_json::json!("Sponsor")).unwrap();
        assert_eq!(back, UserType::Sponsor);
    }
}
