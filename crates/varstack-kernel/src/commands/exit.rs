//! exit — terminate the session immediately with success.
//!
//! Any arguments are ignored, matching the other handlers' permissiveness.

use crate::outcome::Outcome;
use crate::store::VarStore;

pub fn run(_store: &mut VarStore, _args: &[&str]) -> Outcome {
    Outcome::exit()
}
