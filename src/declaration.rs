//! Parameter declarations.
//!
//! Declarations are the configuration layer of the crate: a method name, the
//! shape of its parameter list, and one value source per parameter. They can
//! be written in YAML or JSON and are resolved into concrete value sets before
//! any test runs.
//!
//! ```yaml
//! method: Add
//! parameters:
//!   - name: a
//!     range: { domain: signed, from: 1, count: 3 }
//!   - name: b
//!     range: { domain: unsigned, from: 10, to: 0, step: 5 }
//!   - name: c
//!     values: [1, "x", null]
//! ```

use crate::errors::DeclarationError;
use crate::naming::{compute_display_name, ParameterShape};
use crate::provider::{CombinatorialRange, CombinatorialValues, ValuesProvider};
use crate::range::RangeSpec;
use crate::value::{Argument, ValueSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One test method and the value sources of its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDeclaration {
    pub method: String,
    #[serde(default)]
    pub shape: ParameterShape,
    pub parameters: Vec<ParameterDeclaration>,
}

/// One parameter. Exactly one of `range` and `values` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Argument>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Signed,
    Unsigned,
}

/// A range as written in a declaration, before domain checks.
///
/// Either `count` or `to` must be set; `step` is only meaningful with `to`
/// and defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeDeclaration {
    pub domain: Domain,
    pub from: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
}

/// A declaration whose parameters have been expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMethod {
    pub method: String,
    pub shape: ParameterShape,
    pub parameters: Vec<ResolvedParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameter {
    pub name: String,
    pub values: ValueSet,
}

impl MethodDeclaration {
    pub fn from_yaml_str(source: &str) -> Result<Self, DeclarationError> {
        serde_yaml::from_str(source).map_err(DeclarationError::yaml)
    }

    pub fn from_json_str(source: &str) -> Result<Self, DeclarationError> {
        serde_json::from_str(source).map_err(DeclarationError::json)
    }

    /// Loads a declaration file; `.json` files are read as JSON, everything
    /// else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeclarationError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| DeclarationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }

    /// Expands every parameter in declaration order, stopping at the first
    /// invalid one.
    pub fn resolve(&self) -> Result<ResolvedMethod, DeclarationError> {
        let parameters = self
            .parameters
            .iter()
            .map(ParameterDeclaration::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            method = %self.method,
            parameters = parameters.len(),
            "resolved declaration"
        );
        Ok(ResolvedMethod {
            method: self.method.clone(),
            shape: self.shape,
            parameters,
        })
    }
}

impl ParameterDeclaration {
    pub fn resolve(&self) -> Result<ResolvedParameter, DeclarationError> {
        let values = match (&self.range, &self.values) {
            (Some(_), Some(_)) => return Err(self.conflict("range", "values")),
            (None, None) => return Err(self.missing("range or values")),
            (Some(range), None) => {
                let spec = self.range_spec(range)?;
                let provider =
                    CombinatorialRange::new(spec).map_err(|source| DeclarationError::Parameter {
                        parameter: self.name.clone(),
                        source,
                    })?;
                provider.values().clone()
            }
            (None, Some(values)) => CombinatorialValues::new(values.iter().cloned())
                .ok_or_else(|| DeclarationError::EmptyValues {
                    parameter: self.name.clone(),
                })?
                .values()
                .clone(),
        };
        Ok(ResolvedParameter {
            name: self.name.clone(),
            values,
        })
    }

    fn range_spec(&self, range: &RangeDeclaration) -> Result<RangeSpec, DeclarationError> {
        match (range.to, range.count) {
            (Some(_), Some(_)) => Err(self.conflict("to", "count")),
            (None, None) => Err(self.missing("count or to")),
            (None, Some(count)) => {
                if range.step.is_some() {
                    return Err(self.conflict("count", "step"));
                }
                Ok(match range.domain {
                    Domain::Signed => RangeSpec::signed_count(
                        self.narrow(range.domain, "from", range.from)?,
                        self.narrow(range.domain, "count", count)?,
                    ),
                    Domain::Unsigned => RangeSpec::unsigned_count(
                        self.narrow(range.domain, "from", range.from)?,
                        self.narrow(range.domain, "count", count)?,
                    ),
                })
            }
            (Some(to), None) => {
                let step = range.step.unwrap_or(1);
                Ok(match range.domain {
                    Domain::Signed => RangeSpec::signed_stepped(
                        self.narrow(range.domain, "from", range.from)?,
                        self.narrow(range.domain, "to", to)?,
                        self.narrow(range.domain, "step", step)?,
                    ),
                    Domain::Unsigned => RangeSpec::unsigned_stepped(
                        self.narrow(range.domain, "from", range.from)?,
                        self.narrow(range.domain, "to", to)?,
                        self.narrow(range.domain, "step", step)?,
                    ),
                })
            }
        }
    }

    fn narrow<T: TryFrom<i64>>(
        &self,
        domain: Domain,
        field: &'static str,
        value: i64,
    ) -> Result<T, DeclarationError> {
        T::try_from(value).map_err(|_| DeclarationError::Domain {
            parameter: self.name.clone(),
            field,
            value,
            domain: match domain {
                Domain::Signed => "signed",
                Domain::Unsigned => "unsigned",
            },
        })
    }

    fn conflict(&self, first: &'static str, second: &'static str) -> DeclarationError {
        DeclarationError::Conflict {
            parameter: self.name.clone(),
            first,
            second,
        }
    }

    fn missing(&self, what: &'static str) -> DeclarationError {
        DeclarationError::Missing {
            parameter: self.name.clone(),
            what,
        }
    }
}

impl ResolvedMethod {
    /// Display name for one argument tuple of this method.
    pub fn display_name(&self, arguments: Option<&[Argument]>) -> Option<String> {
        compute_display_name(&self.method, arguments, self.shape)
    }

    pub fn parameter(&self, name: &str) -> Option<&ResolvedParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(yaml: &str) -> ParameterDeclaration {
        serde_yaml::from_str(yaml).expect("valid yaml")
    }

    #[test]
    fn step_defaults_to_one() {
        let resolved = param("{ name: a, range: { domain: signed, from: 3, to: 5 } }")
            .resolve()
            .expect("valid range");
        let ints: Vec<i64> = resolved.values.iter().filter_map(Argument::as_int).collect();
        assert_eq!(ints, vec![3, 4, 5]);
    }

    #[test]
    fn count_with_step_conflicts() {
        let err = param("{ name: a, range: { domain: signed, from: 3, count: 2, step: 2 } }")
            .resolve();
        assert!(matches!(
            err,
            Err(DeclarationError::Conflict { first: "count", second: "step", .. })
        ));
    }

    #[test]
    fn negative_unsigned_is_out_of_domain() {
        let err = param("{ name: b, range: { domain: unsigned, from: -1, count: 2 } }").resolve();
        assert!(matches!(
            err,
            Err(DeclarationError::Domain { field: "from", value: -1, domain: "unsigned", .. })
        ));
    }
}
