//! `talentpitch-core` — shared building blocks of the translation engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the closed value vocabularies, source-preserving parsed
//! values, and the error model.

pub mod error;
pub mod id;
pub mod value_object;
pub mod verbatim;

pub use error::{ParseError, TranslateError, TranslateResult, Violation, Violations};
pub use id::{
    CallId, EventId, PlaylistId, ProposalId, SearchId, SubmissionId, UserId, VideoId,
};
pub use value_object::{MatchType, ProposalResponse, UserType, ValueObject};
pub use verbatim::Verbatim;
