use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A single actual argument of a generated test invocation.
///
/// This is the dynamic "any value" of a test declaration: range expansion
/// produces `Int`/`UInt` arguments, explicit value lists may hold anything.
///
/// # Examples
///
/// ```rust
/// use combinatorial::value::Argument;
/// let a = Argument::from("hello");
/// assert_eq!(a.type_name(), "Str");
/// let nested = Argument::from(vec![1, 2]);
/// assert!(nested.is_sequence());
/// assert!(Argument::default().is_null());
/// ```
///
/// The serde form is untagged and one-way for two variants: `Char` and
/// `Other` serialize as plain strings and read back as `Str`, so their
/// humanized text changes after a round trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Char(char),
    Sequence(Vec<Argument>),
    /// An arbitrary value, already rendered through its own `to_string`.
    Other(String),
}

impl Argument {
    /// Returns the type name of the argument.
    pub fn type_name(&self) -> &'static str {
        match self {
            Argument::Null => "Null",
            Argument::Bool(_) => "Bool",
            Argument::Int(_) => "Int",
            Argument::UInt(_) => "UInt",
            Argument::Float(_) => "Float",
            Argument::Str(_) => "Str",
            Argument::Char(_) => "Char",
            Argument::Sequence(_) => "Sequence",
            Argument::Other(_) => "Other",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Null)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Argument::Sequence(_))
    }

    /// Returns the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Argument]> {
        match self {
            Argument::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Argument::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Argument::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Wraps any displayable value as an opaque argument.
    pub fn other(value: impl fmt::Display) -> Self {
        Argument::Other(value.to_string())
    }
}

/// Renders the humanized form: strings quoted, sequences bracketed.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Null => write!(f, "null"),
            Argument::Bool(b) => write!(f, "{}", b),
            Argument::Int(n) => write!(f, "{}", n),
            Argument::UInt(n) => write!(f, "{}", n),
            Argument::Float(n) => write!(f, "{}", n),
            Argument::Str(s) => write!(f, "\"{}\"", s),
            Argument::Char(c) => write!(f, "'{}'", c),
            Argument::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Argument::Other(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for Argument {
                fn from(n: $ty) -> Self {
                    Argument::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64);

impl From<f32> for Argument {
    fn from(n: f32) -> Self {
        Argument::Float(f64::from(n))
    }
}

impl From<f64> for Argument {
    fn from(n: f64) -> Self {
        Argument::Float(n)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Bool(b)
    }
}

impl From<char> for Argument {
    fn from(c: char) -> Self {
        Argument::Char(c)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Str(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Str(s)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Argument::Null, Into::into)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(items: Vec<T>) -> Self {
        Argument::Sequence(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// VALUE SET
// ============================================================================

/// The ordered, fully materialized values one parameter can take.
///
/// Order is the expansion order and is never changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet(Vec<Argument>);

impl ValueSet {
    pub fn new(values: Vec<Argument>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Argument] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Argument> {
        self.0
    }
}

impl Index<usize> for ValueSet {
    type Output = Argument;

    fn index(&self, index: usize) -> &Argument {
        &self.0[index]
    }
}

impl<T: Into<Argument>> FromIterator<T> for ValueSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ValueSet {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
