//! Value providers.
//!
//! A provider is attached to one test parameter and hands the cross-product
//! stage that parameter's values. Providers validate and materialize at
//! construction time so a malformed declaration fails before any test runs.

use crate::errors::RangeError;
use crate::range::RangeSpec;
use crate::value::{Argument, ValueSet};

/// Supplies the ordered values for one test parameter.
pub trait ValuesProvider {
    fn values(&self) -> &ValueSet;
}

/// Values produced by expanding a numeric range.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinatorialRange {
    spec: RangeSpec,
    values: ValueSet,
}

impl CombinatorialRange {
    /// Validates `spec` and expands it eagerly.
    pub fn new(spec: RangeSpec) -> Result<Self, RangeError> {
        let values = spec.expand()?;
        Ok(Self { spec, values })
    }

    /// `count` consecutive `i32` values starting at `from`.
    pub fn signed(from: i32, count: i32) -> Result<Self, RangeError> {
        Self::new(RangeSpec::signed_count(from, count))
    }

    pub fn signed_stepped(from: i32, to: i32, step: i32) -> Result<Self, RangeError> {
        Self::new(RangeSpec::signed_stepped(from, to, step))
    }

    /// `count` consecutive `u32` values starting at `from`.
    pub fn unsigned(from: u32, count: u32) -> Result<Self, RangeError> {
        Self::new(RangeSpec::unsigned_count(from, count))
    }

    pub fn unsigned_stepped(from: u32, to: u32, step: u32) -> Result<Self, RangeError> {
        Self::new(RangeSpec::unsigned_stepped(from, to, step))
    }

    pub fn spec(&self) -> &RangeSpec {
        &self.spec
    }
}

impl ValuesProvider for CombinatorialRange {
    fn values(&self) -> &ValueSet {
        &self.values
    }
}

/// An explicit list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinatorialValues {
    values: ValueSet,
}

impl CombinatorialValues {
    /// Returns `None` for an empty list, which would yield no test cases.
    pub fn new<I, T>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument>,
    {
        let values: ValueSet = values.into_iter().collect();
        if values.is_empty() {
            None
        } else {
            Some(Self { values })
        }
    }
}

impl ValuesProvider for CombinatorialValues {
    fn values(&self) -> &ValueSet {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_provider_is_stable() {
        let provider = CombinatorialRange::unsigned_stepped(10, 0, 5).expect("valid range");
        let first = provider.values().clone();
        assert_eq!(provider.values(), &first);
        let uints: Vec<u64> = first.iter().filter_map(Argument::as_uint).collect();
        assert_eq!(uints, vec![10, 5, 0]);
    }

    #[test]
    fn range_provider_fails_fast() {
        assert_eq!(
            CombinatorialRange::signed(0, 0),
            Err(RangeError::InvalidCount { count: 0 })
        );
        assert_eq!(
            CombinatorialRange::signed_stepped(1, 5, -1),
            Err(RangeError::InvalidDirection { from: 1, to: 5, step: -1 })
        );
    }

    #[test]
    fn values_provider_rejects_empty() {
        assert!(CombinatorialValues::new(Vec::<i32>::new()).is_none());
        let provider = CombinatorialValues::new(["a", "b"]).expect("non-empty");
        assert_eq!(provider.values().len(), 2);
    }

    #[test]
    fn providers_are_object_safe() {
        let providers: Vec<Box<dyn ValuesProvider>> = vec![
            Box::new(CombinatorialRange::signed(1, 2).expect("valid range")),
            Box::new(CombinatorialValues::new([true]).expect("non-empty")),
        ];
        let lens: Vec<usize> = providers.iter().map(|p| p.values().len()).collect();
        assert_eq!(lens, vec![2, 1]);
    }
}
