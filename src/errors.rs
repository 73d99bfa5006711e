//! Combinatorial Error Handling
//!
//! Every failure in this crate is a validation error raised while a declaration
//! is being turned into values. Nothing here is retried or partially recovered:
//! the caller is expected to refuse to register the offending test.
//!
//! Errors derive `thiserror::Error` for display and `miette::Diagnostic` for
//! stable codes and help text, so a test harness can render them with
//! `miette`'s fancy reporter.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// RANGE ERRORS
// ============================================================================

/// A malformed range specification.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range error: count must be at least 1, got {count}")]
    #[diagnostic(
        code(combinatorial::range::invalid_count),
        help("a range of zero values would produce zero test cases")
    )]
    InvalidCount { count: i64 },

    #[error("Range error: step must not be zero")]
    #[diagnostic(
        code(combinatorial::range::invalid_step),
        help("use a positive step to count up or a negative step to count down")
    )]
    InvalidStep,

    #[error("Range error: step {step} cannot walk from {from} to {to}")]
    #[diagnostic(
        code(combinatorial::range::invalid_direction),
        help("a positive step requires to >= from; a negative step requires to <= from")
    )]
    InvalidDirection { from: i64, to: i64, step: i64 },

    #[error("Range error: {count} values starting at {from} overflow the {domain} domain")]
    #[diagnostic(
        code(combinatorial::range::overflow),
        help("lower the start value or the count")
    )]
    Overflow {
        domain: &'static str,
        from: i64,
        count: i64,
    },
}

// ============================================================================
// DECLARATION ERRORS
// ============================================================================

/// A parameter declaration that could not be loaded or resolved.
#[derive(Error, Diagnostic, Debug)]
pub enum DeclarationError {
    #[error("Declaration error: could not parse {format}: {message}")]
    #[diagnostic(code(combinatorial::declaration::parse))]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Declaration error: parameter '{parameter}' declares both {first} and {second}")]
    #[diagnostic(
        code(combinatorial::declaration::conflict),
        help("keep exactly one of the two fields")
    )]
    Conflict {
        parameter: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Declaration error: parameter '{parameter}' is missing {what}")]
    #[diagnostic(code(combinatorial::declaration::missing))]
    Missing {
        parameter: String,
        what: &'static str,
    },

    #[error("Declaration error: parameter '{parameter}' has an empty value list")]
    #[diagnostic(
        code(combinatorial::declaration::empty_values),
        help("an empty value list would produce zero test cases")
    )]
    EmptyValues { parameter: String },

    #[error("Declaration error: parameter '{parameter}' field {field} = {value} is outside the {domain} domain")]
    #[diagnostic(code(combinatorial::declaration::domain))]
    Domain {
        parameter: String,
        field: &'static str,
        value: i64,
        domain: &'static str,
    },

    #[error("Declaration error: could not read '{path}'")]
    #[diagnostic(code(combinatorial::declaration::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Declaration error: parameter '{parameter}' has an invalid range")]
    #[diagnostic(code(combinatorial::declaration::parameter))]
    Parameter {
        parameter: String,
        #[source]
        #[diagnostic_source]
        source: RangeError,
    },
}

impl DeclarationError {
    pub(crate) fn yaml(err: serde_yaml::Error) -> Self {
        DeclarationError::Parse {
            format: "YAML",
            message: err.to_string(),
        }
    }

    pub(crate) fn json(err: serde_json::Error) -> Self {
        DeclarationError::Parse {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

// ============================================================================
// UMBRELLA ERROR
// ============================================================================

/// Any error this crate can return.
#[derive(Error, Diagnostic, Debug)]
pub enum CombinatorialError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Declaration(#[from] DeclarationError),
}
