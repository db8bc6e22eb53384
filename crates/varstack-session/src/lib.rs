//! varstack session protocol — the handshake plus the blocking command loop.
//!
//! The protocol is line-oriented text, one command per line:
//! 1. The session emits the literal line `ready` and flushes.
//! 2. It reads one line; anything other than exactly `ready` terminates the
//!    session gracefully (no diagnostic, success exit).
//! 3. It then reads a line at a time, splits it on whitespace, and
//!    dispatches until end-of-input or an `exit` command. Only `get`
//!    commands produce output, at most one line each.
//!
//! A [`Session`] is constructed over any `BufRead`/`Write` pair, so tests
//! drive it with in-memory buffers instead of capturing process I/O. The
//! loop is single-threaded and fully serialized: each command is read,
//! dispatched, and printed before the next line is touched, and the only
//! blocking point is the line read.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use varstack_kernel::{dispatch, VarStore};

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `ready` emitted, waiting for the peer's `ready` response.
    AwaitingHandshake,
    /// Handshake accepted; reading command lines.
    Running,
    /// Session over: refused handshake, end-of-input, or `exit`.
    Terminated,
}

/// One interpreter session over a reader/writer pair.
///
/// Owns the variable store for the lifetime of the session; there is no
/// persistence across sessions and no shared global state.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: VarStore,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session awaiting the startup handshake.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            store: VarStore::new(),
            state: SessionState::AwaitingHandshake,
        }
    }

    /// Run the session to completion: handshake, then one command per line.
    ///
    /// A refused handshake is a graceful termination, not an error; `Err` is
    /// reserved for I/O failures on the underlying streams.
    pub fn run(&mut self) -> Result<()> {
        if self.handshake()? {
            self.command_loop()?;
        }
        Ok(())
    }

    /// Run the command loop without a handshake.
    ///
    /// Used by the transcript replay mode, where the input is a recorded
    /// command file rather than a live peer.
    pub fn run_script(&mut self) -> Result<()> {
        self.state = SessionState::Running;
        self.command_loop()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session's variable store.
    pub fn store(&self) -> &VarStore {
        &self.store
    }

    /// Emit `ready` and require the literal `ready` back.
    fn handshake(&mut self) -> Result<bool> {
        writeln!(self.output, "ready").context("writing handshake")?;
        self.output.flush().context("flushing handshake")?;

        let accepted = matches!(self.read_line()?, Some(ref line) if line == "ready");
        if accepted {
            self.state = SessionState::Running;
            tracing::debug!("handshake accepted");
        } else {
            self.state = SessionState::Terminated;
            tracing::debug!("handshake refused, terminating");
        }
        Ok(accepted)
    }

    /// Read, dispatch, and print until end-of-input or `exit`.
    fn command_loop(&mut self) -> Result<()> {
        while self.state == SessionState::Running {
            match self.read_line()? {
                Some(line) => self.handle_line(&line)?,
                None => self.state = SessionState::Terminated,
            }
        }
        Ok(())
    }

    /// Tokenize and dispatch one line.
    ///
    /// Empty lines and unknown keywords are skipped without output; the
    /// latter are logged so a misbehaving harness is diagnosable.
    fn handle_line(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match dispatch(&mut self.store, &tokens) {
            Ok(outcome) => {
                if let Some(out) = outcome.out {
                    writeln!(self.output, "{out}").context("writing result")?;
                    self.output.flush().context("flushing result")?;
                }
                if outcome.exit {
                    self.state = SessionState::Terminated;
                }
            }
            Err(unknown) => {
                tracing::debug!(command = %unknown.0, "ignoring unknown command");
            }
        }
        Ok(())
    }

    /// Read one line, stripping the trailing newline. `None` at end-of-input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf).context("reading line")?;
        if n == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_over(input: &str) -> (Vec<String>, SessionState) {
        let mut output = Vec::new();
        let mut session = Session::new(input.as_bytes(), &mut output);
        session.run().expect("session should run");
        let state = session.state();
        let lines = String::from_utf8(output)
            .expect("output is utf8")
            .lines()
            .map(str::to_string)
            .collect();
        (lines, state)
    }

    #[test]
    fn emits_ready_before_reading() {
        let (lines, state) = session_over("");
        assert_eq!(lines, ["ready"]);
        assert_eq!(state, SessionState::Terminated);
    }

    #[test]
    fn refused_handshake_terminates_without_processing() {
        let (lines, state) = session_over("nope\nget size x\n");
        assert_eq!(lines, ["ready"]);
        assert_eq!(state, SessionState::Terminated);
    }

    #[test]
    fn handshake_must_match_exactly() {
        let (lines, _) = session_over("ready please\nget size x\n");
        assert_eq!(lines, ["ready"]);
    }

    #[test]
    fn accepted_handshake_enters_command_loop() {
        let (lines, state) = session_over("ready\nget size x\n");
        assert_eq!(lines, ["ready", "0"]);
        assert_eq!(state, SessionState::Terminated);
    }

    #[test]
    fn exit_stops_the_loop_mid_stream() {
        let (lines, _) = session_over("ready\nexit\nget size x\n");
        assert_eq!(lines, ["ready"]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let (lines, _) = session_over("ready\n\n   \nget size x\n");
        assert_eq!(lines, ["ready", "0"]);
    }

    #[test]
    fn unknown_commands_are_skipped_and_the_loop_continues() {
        let (lines, _) = session_over("ready\nfrobnicate x\nget size x\n");
        assert_eq!(lines, ["ready", "0"]);
    }

    #[test]
    fn crlf_input_is_tolerated() {
        let (lines, _) = session_over("ready\r\nget size x\r\n");
        assert_eq!(lines, ["ready", "0"]);
    }

    #[test]
    fn run_script_skips_the_handshake() {
        let mut output = Vec::new();
        let mut session = Session::new("set size a 2\nget size a\n".as_bytes(), &mut output);
        session.run_script().expect("script should run");
        assert_eq!(String::from_utf8(output).expect("utf8"), "2\n");
    }

    #[test]
    fn store_is_inspectable_after_the_run() {
        let mut output = Vec::new();
        let mut session = Session::new("ready\nset size a 3\ndup a\n".as_bytes(), &mut output);
        session.run().expect("session should run");
        assert_eq!(session.store().depth("a"), 2);
        assert_eq!(session.store().top("a"), ["0", "0", "0"]);
    }
}
