//! get — read the current version of a variable.
//!
//! Sub-forms, selected by the first argument:
//! - `get size <name>` prints the element count of the top version
//! - `get at <index> <name>` prints the element at `index`, or the `0`
//!   sentinel when the index is out of range
//!
//! An unknown variable reads as a single empty version; reads never persist
//! it. A non-integer index prints nothing at all.

use crate::outcome::Outcome;
use crate::store::{VarStore, SENTINEL};

pub fn run(store: &mut VarStore, args: &[&str]) -> Outcome {
    match args {
        ["size", name, ..] => Outcome::line(store.top(name).len().to_string()),
        ["at", index, name, ..] => at(store, index, name),
        _ => Outcome::silent(),
    }
}

fn at(store: &VarStore, index: &str, name: &str) -> Outcome {
    let Ok(index) = index.parse::<i64>() else {
        return Outcome::silent();
    };

    let array = store.top(name);
    match usize::try_from(index) {
        Ok(i) if i < array.len() => Outcome::line(array[i].clone()),
        _ => Outcome::line(SENTINEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_unknown_variable_is_zero() {
        let mut store = VarStore::new();
        let outcome = run(&mut store, &["size", "missing"]);
        assert_eq!(outcome.out.as_deref(), Some("0"));
        assert!(!store.contains("missing"));
    }

    #[test]
    fn size_reports_top_version_length() {
        let mut store = VarStore::new();
        store.write_top("x", vec!["a".into(), "b".into(), "c".into()]);
        let outcome = run(&mut store, &["size", "x"]);
        assert_eq!(outcome.out.as_deref(), Some("3"));
    }

    #[test]
    fn at_prints_element_in_range() {
        let mut store = VarStore::new();
        store.write_top("x", vec!["7".into(), "hello".into()]);
        assert_eq!(run(&mut store, &["at", "1", "x"]).out.as_deref(), Some("hello"));
    }

    #[test]
    fn at_out_of_range_prints_sentinel() {
        let mut store = VarStore::new();
        store.write_top("x", vec!["a".into()]);
        assert_eq!(run(&mut store, &["at", "5", "x"]).out.as_deref(), Some("0"));
        assert_eq!(run(&mut store, &["at", "-1", "x"]).out.as_deref(), Some("0"));
    }

    #[test]
    fn at_on_unknown_variable_prints_sentinel() {
        let mut store = VarStore::new();
        assert_eq!(run(&mut store, &["at", "0", "missing"]).out.as_deref(), Some("0"));
        assert!(!store.contains("missing"));
    }

    #[test]
    fn at_with_non_integer_index_prints_nothing() {
        let mut store = VarStore::new();
        store.write_top("x", vec!["a".into()]);
        assert_eq!(run(&mut store, &["at", "zero", "x"]), Outcome::silent());
    }

    #[test]
    fn too_few_arguments_are_silent() {
        let mut store = VarStore::new();
        assert_eq!(run(&mut store, &[]), Outcome::silent());
        assert_eq!(run(&mut store, &["size"]), Outcome::silent());
        assert_eq!(run(&mut store, &["at", "0"]), Outcome::silent());
    }

    #[test]
    fn unrecognized_sub_form_is_silent() {
        let mut store = VarStore::new();
        assert_eq!(run(&mut store, &["length", "x"]), Outcome::silent());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let mut store = VarStore::new();
        store.write_top("x", vec!["a".into()]);
        assert_eq!(run(&mut store, &["size", "x", "trailing"]).out.as_deref(), Some("1"));
        assert_eq!(run(&mut store, &["at", "0", "x", "trailing"]).out.as_deref(), Some("a"));
    }
}
