//! Outcome — the structured result of one dispatched command.
//!
//! Every handler produces at most one output line for the peer (only the
//! `get` forms ever do) plus a continue/exit decision. Failure states are
//! never reported to the peer: malformed arguments are silent no-ops and
//! out-of-range reads fall back to the `0` sentinel, so there is no error
//! channel here.

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Line to print to the peer, without trailing newline.
    pub out: Option<String>,
    /// Whether the session should terminate after this command.
    pub exit: bool,
}

impl Outcome {
    /// No output, keep going. The result of every mutating or malformed
    /// command.
    pub fn silent() -> Self {
        Self::default()
    }

    /// One output line, keep going.
    pub fn line(out: impl Into<String>) -> Self {
        Self {
            out: Some(out.into()),
            exit: false,
        }
    }

    /// No output, terminate the session.
    pub fn exit() -> Self {
        Self {
            out: None,
            exit: true,
        }
    }
}
