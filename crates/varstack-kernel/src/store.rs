//! The Variable Store — named variables holding versioned arrays.
//!
//! Each variable maps to a stack of array snapshots:
//! - Only the topmost snapshot is current for reads and writes
//! - `push_copy`/`pop_version` grow and shrink the stack
//! - The stack never drops below one version
//!
//! A variable that was never written behaves, for reads, as if it held a
//! single empty version. It is only persisted into the store once a write
//! operation touches it.

use std::collections::HashMap;

/// Sentinel element used for size padding and out-of-range reads.
pub const SENTINEL: &str = "0";

/// One variable's stack of array snapshots.
///
/// Invariant: there is always at least one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStack {
    versions: Vec<Vec<String>>,
}

impl VersionStack {
    /// Create a stack holding a single empty version.
    fn new() -> Self {
        Self {
            versions: vec![Vec::new()],
        }
    }

    /// The current (topmost) version.
    pub fn top(&self) -> &[String] {
        self.versions.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace the current version with `array`.
    pub fn replace_top(&mut self, array: Vec<String>) {
        if let Some(top) = self.versions.last_mut() {
            *top = array;
        }
    }

    /// Push a copy of the current version onto the stack.
    pub fn push_copy(&mut self) {
        let copy = self.top().to_vec();
        self.versions.push(copy);
    }

    /// Remove the current version unless it is the last remaining one.
    pub fn pop_version(&mut self) {
        if self.versions.len() > 1 {
            self.versions.pop();
        }
    }

    /// Number of versions on the stack.
    pub fn depth(&self) -> usize {
        self.versions.len()
    }
}

impl Default for VersionStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapping from variable name to its version stack.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    vars: HashMap<String, VersionStack>,
}

impl VarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version for `name`, or the empty array if unknown.
    ///
    /// Pure read: never persists the variable.
    pub fn top(&self, name: &str) -> &[String] {
        self.vars.get(name).map(VersionStack::top).unwrap_or_default()
    }

    /// Replace the current version for `name`, creating the variable with a
    /// single-version stack if it did not exist.
    pub fn write_top(&mut self, name: &str, array: Vec<String>) {
        self.entry(name).replace_top(array);
    }

    /// Duplicate the current version for `name` onto its stack.
    ///
    /// An unknown name is initialized first, yielding a two-entry stack of
    /// two empty arrays.
    pub fn push_copy(&mut self, name: &str) {
        self.entry(name).push_copy();
    }

    /// Remove the current version for `name` unless it is the last one.
    ///
    /// Never errors and never empties a stack. An unknown name is persisted
    /// with its single empty version, matching the write-back behavior of
    /// the other mutating operations.
    pub fn pop_version(&mut self, name: &str) {
        self.entry(name).pop_version();
    }

    /// Number of versions for `name` (1 for the lazy default of an unknown
    /// name).
    pub fn depth(&self, name: &str) -> usize {
        self.vars.get(name).map(VersionStack::depth).unwrap_or(1)
    }

    /// Check whether `name` has been persisted by a write operation.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Stack for `name`, persisting the lazy default if needed.
    fn entry(&mut self, name: &str) -> &mut VersionStack {
        self.vars
            .entry(name.to_string())
            .or_insert_with(VersionStack::new)
    }
}
