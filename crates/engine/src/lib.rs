//! Command-to-event translation engine.
//!
//! This crate contains no IO: [`Dispatcher::translate`] is a pure, synchronous
//! function of a command to an event (or an error), safe to call from any number
//! of threads at once.

pub mod builders;
pub mod dispatcher;

pub use dispatcher::{DECODE_RULE, Dispatcher};
pub use talentpitch_core::{TranslateError, TranslateResult};
