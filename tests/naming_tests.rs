//! Display-name and humanization tests.

mod common;

use combinatorial::humanize::Humanize;
use combinatorial::{compute_display_name, display_name_of, humanize, Argument, ParameterShape};
use common::args;

#[cfg(test)]
mod humanize_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalars() {
        assert_eq!(humanize(&Argument::Null), "null");
        assert_eq!(humanize(&Argument::from("ab")), "\"ab\"");
        assert_eq!(humanize(&Argument::from('x')), "'x'");
        assert_eq!(humanize(&Argument::from(5)), "5");
        assert_eq!(humanize(&Argument::from(5u32)), "5");
        assert_eq!(humanize(&Argument::from(-1.5)), "-1.5");
        assert_eq!(humanize(&Argument::from(true)), "true");
    }

    #[test]
    fn test_mixed_sequence() {
        let value = Argument::Sequence(vec![Argument::from(1), Argument::from("a"), Argument::Null]);
        assert_eq!(humanize(&value), "[1,\"a\",null]");
    }

    #[test]
    fn test_deep_nesting_keeps_order_and_quotes() {
        let value = Argument::from(vec![
            Argument::from(vec![Argument::from(vec![Argument::from('z')])]),
            Argument::from(vec![Argument::from("b"), Argument::from("a")]),
            Argument::Sequence(vec![]),
        ]);
        assert_eq!(humanize(&value), r#"[[['z']],["b","a"],[]]"#);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(humanize(""), "\"\"");
    }

    #[test]
    fn test_typed_values() {
        let none: Option<&str> = None;
        assert_eq!(none.humanize(), "null");
        assert_eq!(vec![1u8, 2, 3].humanize(), "[1,2,3]");
        assert_eq!(String::from("s").humanize(), "\"s\"");
    }

    #[test]
    fn test_repeatable() {
        let value = Argument::from(vec![Some("x"), None]);
        assert_eq!(humanize(&value), humanize(&value));
    }
}

#[cfg(test)]
mod display_name_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_tuple_has_no_label() {
        assert_eq!(compute_display_name("Foo", None, ParameterShape::Spread), None);
        assert_eq!(
            compute_display_name("Foo", None, ParameterShape::CollapsedArray),
            None
        );
    }

    #[test]
    fn test_spread_parameters() {
        let tuple = args([1, 2]);
        assert_eq!(
            compute_display_name("Foo", Some(&tuple[..]), ParameterShape::Spread).as_deref(),
            Some("Foo(1,2)")
        );
    }

    #[test]
    fn test_collapsed_array_parameter() {
        let tuple = args([1, 2, 3]);
        assert_eq!(
            compute_display_name("Foo", Some(&tuple[..]), ParameterShape::CollapsedArray)
                .as_deref(),
            Some("Foo([1,2,3])")
        );
    }

    #[test]
    fn test_array_argument_in_spread_position() {
        let tuple = vec![Argument::from(vec![1, 2]), Argument::from("s")];
        assert_eq!(
            compute_display_name("Bar", Some(&tuple[..]), ParameterShape::Spread).as_deref(),
            Some(r#"Bar([1,2],"s")"#)
        );
    }

    #[test]
    fn test_typed_arguments() {
        let list = vec!["a", "b"];
        let tuple: [&dyn Humanize; 3] = [&7u32, &list, &None::<i32>];
        assert_eq!(
            display_name_of("Baz", Some(&tuple[..]), ParameterShape::Spread).as_deref(),
            Some(r#"Baz(7,["a","b"],null)"#)
        );
    }
}
