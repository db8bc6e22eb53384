//! Command dispatch — the single execution path for all commands.
//!
//! The first token of a command line selects the handler; the remaining
//! tokens are passed through as its arguments. Empty token lists dispatch
//! to nothing.
//!
//! ```text
//! line ──▶ tokens ──▶ Keyword::from_str(tokens[0])
//!                          │
//!               ┌──────┬───┼──────┬───────┐
//!               │      │   │      │       │
//!              get    set dup    pop    exit
//! ```

use crate::command::{Keyword, UnknownCommand};
use crate::commands;
use crate::outcome::Outcome;
use crate::store::VarStore;

/// Dispatch one tokenized command line against the store.
///
/// Returns `Err` for keywords outside the dispatch table so the caller
/// decides how to report them; the session layer ignores them with a debug
/// log. Handlers themselves never fail: malformed arguments are silent
/// no-ops.
pub fn dispatch(store: &mut VarStore, tokens: &[&str]) -> Result<Outcome, UnknownCommand> {
    let Some((first, args)) = tokens.split_first() else {
        return Ok(Outcome::silent());
    };

    let keyword: Keyword = first.parse()?;
    tracing::trace!(command = %first, args = args.len(), "dispatching");

    Ok(match keyword {
        Keyword::Get => commands::get::run(store, args),
        Keyword::Set => commands::set::run(store, args),
        Keyword::Dup => commands::dup::run(store, args),
        Keyword::Pop => commands::pop::run(store, args),
        Keyword::Exit => commands::exit::run(store, args),
    })
}
