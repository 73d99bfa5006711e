//! Humanization of argument values.
//!
//! Turns a value into its canonical display text:
//!
//! | value       | text                 |
//! |-------------|----------------------|
//! | null / None | `null`               |
//! | string      | `"s"` (unescaped)    |
//! | character   | `'c'`                |
//! | sequence    | `[e1,e2,...]`        |
//! | other       | its `Display` output |
//!
//! Quoting applies to every element, so a string nested in a sequence is
//! still quoted. Whether a value is a sequence is decided by the
//! [`Humanize`] implementation of its type, not by inspecting a type name.

use crate::value::Argument;
use std::fmt::Write;

/// Types that can render themselves as display-name text.
pub trait Humanize {
    /// Appends the humanized text to `out`.
    fn humanize_into(&self, out: &mut String);

    fn humanize(&self) -> String {
        let mut out = String::new();
        self.humanize_into(&mut out);
        out
    }
}

/// Humanizes a single value.
///
/// ```rust
/// use combinatorial::humanize::humanize;
/// use combinatorial::value::Argument;
/// let v = Argument::from(vec![Argument::from(1), Argument::from("a"), Argument::Null]);
/// assert_eq!(humanize(&v), r#"[1,"a",null]"#);
/// ```
pub fn humanize<T: Humanize + ?Sized>(value: &T) -> String {
    value.humanize()
}

/// Writes `items` as `[e1,e2,...]`.
pub(crate) fn humanize_sequence<'a, T, I>(items: I, out: &mut String)
where
    T: Humanize + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    out.push('[');
    join_into(items, out);
    out.push(']');
}

/// Writes `items` separated by commas, without brackets.
pub(crate) fn join_into<'a, T, I>(items: I, out: &mut String)
where
    T: Humanize + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.humanize_into(out);
    }
}

impl Humanize for Argument {
    fn humanize_into(&self, out: &mut String) {
        match self {
            Argument::Null => out.push_str("null"),
            Argument::Str(s) => s.as_str().humanize_into(out),
            Argument::Char(c) => c.humanize_into(out),
            Argument::Sequence(items) => humanize_sequence(items, out),
            Argument::Bool(b) => b.humanize_into(out),
            Argument::Int(n) => n.humanize_into(out),
            Argument::UInt(n) => n.humanize_into(out),
            Argument::Float(n) => n.humanize_into(out),
            Argument::Other(s) => out.push_str(s),
        }
    }
}

impl Humanize for str {
    fn humanize_into(&self, out: &mut String) {
        out.push('"');
        out.push_str(self);
        out.push('"');
    }
}

impl Humanize for String {
    fn humanize_into(&self, out: &mut String) {
        self.as_str().humanize_into(out);
    }
}

impl Humanize for char {
    fn humanize_into(&self, out: &mut String) {
        out.push('\'');
        out.push(*self);
        out.push('\'');
    }
}

macro_rules! impl_humanize_display {
    ($($ty:ty),+) => {
        $(
            impl Humanize for $ty {
                fn humanize_into(&self, out: &mut String) {
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{}", self);
                }
            }
        )+
    };
}

impl_humanize_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: Humanize> Humanize for Option<T> {
    fn humanize_into(&self, out: &mut String) {
        match self {
            Some(value) => value.humanize_into(out),
            None => out.push_str("null"),
        }
    }
}

impl<T: Humanize> Humanize for [T] {
    fn humanize_into(&self, out: &mut String) {
        humanize_sequence(self, out);
    }
}

impl<T: Humanize> Humanize for Vec<T> {
    fn humanize_into(&self, out: &mut String) {
        humanize_sequence(self, out);
    }
}

impl<T: Humanize, const N: usize> Humanize for [T; N] {
    fn humanize_into(&self, out: &mut String) {
        humanize_sequence(self, out);
    }
}

impl<T: Humanize + ?Sized> Humanize for &T {
    fn humanize_into(&self, out: &mut String) {
        (**self).humanize_into(out);
    }
}

impl<T: Humanize + ?Sized> Humanize for Box<T> {
    fn humanize_into(&self, out: &mut String) {
        (**self).humanize_into(out);
    }
}
