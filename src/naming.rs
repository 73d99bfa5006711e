//! Display names for generated test invocations.
//!
//! A display name is `method(arg1,arg2,...)` where each argument is
//! humanized independently. When the target method takes a single
//! catch-all array parameter, the whole tuple is that one argument and is
//! rendered as one bracketed sequence instead of being spread.

use crate::humanize::{join_into, Humanize};
use crate::value::Argument;
use serde::{Deserialize, Serialize};

/// How an argument tuple maps onto the method's declared parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterShape {
    /// The tuple holds one value per declared parameter.
    #[default]
    Spread,
    /// The method declares exactly one parameter, an array of arbitrary
    /// values, and the whole tuple is that array.
    CollapsedArray,
}

/// Computes the display name for one invocation.
///
/// Returns `None` when there is no argument tuple, meaning the host runner
/// should fall back to its default naming.
///
/// ```rust
/// use combinatorial::naming::{compute_display_name, ParameterShape};
/// use combinatorial::value::Argument;
/// let args = [Argument::from(1), Argument::from(2)];
/// assert_eq!(
///     compute_display_name("Foo", Some(&args[..]), ParameterShape::Spread).as_deref(),
///     Some("Foo(1,2)")
/// );
/// assert_eq!(
///     compute_display_name("Foo", Some(&args[..]), ParameterShape::CollapsedArray).as_deref(),
///     Some("Foo([1,2])")
/// );
/// assert_eq!(compute_display_name("Foo", None, ParameterShape::Spread), None);
/// ```
pub fn compute_display_name(
    method_name: &str,
    arguments: Option<&[Argument]>,
    shape: ParameterShape,
) -> Option<String> {
    let arguments = arguments?;
    Some(format_display_name(method_name, arguments, shape))
}

/// Same as [`compute_display_name`] for heterogeneous typed arguments.
///
/// ```rust
/// use combinatorial::humanize::Humanize;
/// use combinatorial::naming::{display_name_of, ParameterShape};
/// let args: [&dyn Humanize; 3] = [&1, &"a", &'c'];
/// assert_eq!(
///     display_name_of("Foo", Some(&args[..]), ParameterShape::Spread).as_deref(),
///     Some(r#"Foo(1,"a",'c')"#)
/// );
/// ```
pub fn display_name_of(
    method_name: &str,
    arguments: Option<&[&dyn Humanize]>,
    shape: ParameterShape,
) -> Option<String> {
    let arguments = arguments?;
    Some(format_display_name(method_name, arguments, shape))
}

fn format_display_name<T: Humanize>(
    method_name: &str,
    arguments: &[T],
    shape: ParameterShape,
) -> String {
    let mut out = String::with_capacity(method_name.len() + 2);
    out.push_str(method_name);
    out.push('(');
    match shape {
        ParameterShape::Spread => join_into(arguments, &mut out),
        ParameterShape::CollapsedArray => arguments.humanize_into(&mut out),
    }
    out.push(')');
    tracing::trace!(method = method_name, display_name = %out, "computed display name");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tuple_is_empty_parens() {
        let name = compute_display_name("Foo", Some(&[] as &[Argument]), ParameterShape::Spread);
        assert_eq!(name.as_deref(), Some("Foo()"));
        let name = compute_display_name("Foo", Some(&[] as &[Argument]), ParameterShape::CollapsedArray);
        assert_eq!(name.as_deref(), Some("Foo([])"));
    }

    #[test]
    fn null_arguments_render() {
        let args = [Argument::Null, Argument::from("a")];
        let name = compute_display_name("Foo", Some(&args[..]), ParameterShape::Spread);
        assert_eq!(name.as_deref(), Some(r#"Foo(null,"a")"#));
    }

    #[test]
    fn shape_parses_kebab_case() {
        let shape: ParameterShape = serde_json::from_str("\"collapsed-array\"").expect("valid json");
        assert_eq!(shape, ParameterShape::CollapsedArray);
    }
}
