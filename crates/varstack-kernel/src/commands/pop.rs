//! pop — drop a variable's current version, restoring the previous one.
//!
//! `pop <name>` removes the top version if the stack has more than one;
//! otherwise it is a no-op. Never errors, never empties a stack. No output.

use crate::outcome::Outcome;
use crate::store::VarStore;

pub fn run(store: &mut VarStore, args: &[&str]) -> Outcome {
    if let Some(name) = args.first() {
        store.pop_version(name);
    }
    Outcome::silent()
}
