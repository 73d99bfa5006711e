//! Shared helpers for the integration tests.

#![allow(dead_code)]

use combinatorial::{Argument, ValueSet};

/// Collects the signed integers of a value set, in order.
pub fn ints(values: &ValueSet) -> Vec<i64> {
    values.iter().filter_map(Argument::as_int).collect()
}

/// Collects the unsigned integers of a value set, in order.
pub fn uints(values: &ValueSet) -> Vec<u64> {
    values.iter().filter_map(Argument::as_uint).collect()
}

pub fn args<T: Into<Argument>>(items: impl IntoIterator<Item = T>) -> Vec<Argument> {
    items.into_iter().map(Into::into).collect()
}

pub const ADD_DECLARATION: &str = r#"
method: Add
parameters:
  - name: a
    range: { domain: signed, from: 1, count: 3 }
  - name: b
    range: { domain: unsigned, from: 10, to: 0, step: 5 }
  - name: c
    values: [1, "x", null]
"#;
