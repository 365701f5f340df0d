//! Commands (requested actions) and events (recorded facts).
//!
//! - [`Command`]: the untyped shape callers hand in, plus one convenience
//!   constructor per command type.
//! - [`TypedCommand`]: the closed, strongly-typed form a command takes once its
//!   fields have been checked.
//! - [`Event`] / [`DomainEvent`]: the immutable record produced by translation.

pub mod command;
pub mod commands;
pub mod domain;
pub mod event;

pub use command::Command;
pub use commands::TypedCommand;
pub use domain::DomainEvent;
pub use event::Event;
