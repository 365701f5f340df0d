//! Schema registry and validator.
//!
//! Contracts are pure data ([`Contract`] = ordered fields, each with a list of
//! [`Rule`]s). The [`SchemaRegistry`] maps command type names to contracts, and
//! [`validator::check`] evaluates a field map against one, collecting every
//! violation.

pub mod contract;
pub mod contracts;
pub mod registry;
pub mod rule;
pub mod validator;

pub use contract::{Contract, FieldRules};
pub use registry::SchemaRegistry;
pub use rule::Rule;
