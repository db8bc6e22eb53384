//! varstack-kernel: the interpreter core.
//!
//! This crate provides:
//!
//! - **Store**: named variables holding versioned arrays (stacks of
//!   array snapshots, never fewer than one version)
//! - **Command**: the closed keyword set and its parse error
//! - **Dispatch**: keyword → handler resolution
//! - **Commands**: the five handlers (`get`, `set`, `dup`, `pop`, `exit`)
//!
//! The kernel is pure state-in, outcome-out: it does no I/O of its own.
//! The session crate owns the handshake and the line loop.

pub mod command;
pub mod commands;
pub mod dispatch;
pub mod outcome;
pub mod store;

pub use command::{Keyword, UnknownCommand};
pub use dispatch::dispatch;
pub use outcome::Outcome;
pub use store::{VarStore, VersionStack, SENTINEL};
