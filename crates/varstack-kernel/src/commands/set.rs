//! set — mutate the current version of a variable.
//!
//! Sub-forms, selected by the first argument:
//! - `set size <name> <n>` truncates the top version or right-pads it with
//!   `0` elements to exactly `n` entries
//! - `set at <index> <name> <value>` replaces the element at `index` with
//!   `value`, stored verbatim as the token
//!
//! A non-integer size or index is a silent no-op. An in-range `set at`
//! mutates in place; an out-of-range index leaves the array unchanged but
//! the write-back still happens, so the variable is persisted either way.

use crate::outcome::Outcome;
use crate::store::{VarStore, SENTINEL};

pub fn run(store: &mut VarStore, args: &[&str]) -> Outcome {
    match args {
        ["size", name, n, ..] => resize(store, name, n),
        ["at", index, name, value, ..] => write_at(store, index, name, value),
        _ => {}
    }
    Outcome::silent()
}

fn resize(store: &mut VarStore, name: &str, n: &str) {
    let Ok(size) = n.parse::<usize>() else {
        return;
    };

    let mut array = store.top(name).to_vec();
    array.resize(size, SENTINEL.to_string());
    store.write_top(name, array);
}

fn write_at(store: &mut VarStore, index: &str, name: &str, value: &str) {
    let Ok(index) = index.parse::<i64>() else {
        return;
    };

    let mut array = store.top(name).to_vec();
    if let Ok(i) = usize::try_from(index) {
        if i < array.len() {
            array[i] = value.to_string();
        }
    }
    store.write_top(name, array);
}
