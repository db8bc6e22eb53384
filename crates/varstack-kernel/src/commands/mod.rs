//! Command handlers.
//!
//! One module per command, mirroring the dispatch table. Every handler takes
//! the store plus the tokens after the keyword, and returns an [`Outcome`].
//! Handlers never error toward the peer: malformed or incomplete arguments
//! produce a silent no-op.
//!
//! [`Outcome`]: crate::outcome::Outcome

pub mod dup;
pub mod exit;
pub mod get;
pub mod pop;
pub mod set;
