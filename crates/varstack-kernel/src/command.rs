//! Command keywords — the closed set of operations the interpreter accepts.
//!
//! The dispatch table is a fixed enum rather than a string-keyed map, so an
//! unrecognized keyword is a representable error the caller can handle
//! instead of a fatal lookup failure.

use std::str::FromStr;

use thiserror::Error;

/// Error for a keyword outside the fixed dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// The five supported command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `get size <name>` / `get at <index> <name>` — read the top version.
    Get,
    /// `set size <name> <n>` / `set at <index> <name> <value>` — mutate it.
    Set,
    /// `dup <name>` — push a copy of the top version.
    Dup,
    /// `pop <name>` — drop the top version (never below one).
    Pop,
    /// `exit` — terminate the session.
    Exit,
}

impl FromStr for Keyword {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Keyword::Get),
            "set" => Ok(Keyword::Set),
            "dup" => Ok(Keyword::Dup),
            "pop" => Ok(Keyword::Pop),
            "exit" => Ok(Keyword::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
