//! dup — push a copy of a variable's current version onto its stack.
//!
//! `dup <name>` grows the version stack by exactly one. An unknown name is
//! initialized with a single empty version first, yielding a two-entry stack
//! of two empty arrays. No output.

use crate::outcome::Outcome;
use crate::store::VarStore;

pub fn run(store: &mut VarStore, args: &[&str]) -> Outcome {
    if let Some(name) = args.first() {
        store.push_copy(name);
    }
    Outcome::silent()
}
