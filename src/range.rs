//! Range expansion.
//!
//! A [`RangeSpec`] describes the values of one test parameter as a numeric
//! range. Expansion is eager: the whole [`ValueSet`] is materialized so the
//! cross-product stage gets random access and a known count.
//!
//! The signed and unsigned domains are deliberately separate types with
//! separate algorithms. Signed ranges use a closed-form count with truncating
//! division; unsigned ranges iterate and stop before the running value would
//! wrap around the domain.

use crate::errors::RangeError;
use crate::value::ValueSet;
use serde::Serialize;

/// A range over one of the two supported integer domains.
///
/// Serializes in the declaration layout (`domain`, `from`, then `count` or
/// `to` and `step`). Reading ranges back goes through
/// [`RangeDeclaration`](crate::declaration::RangeDeclaration), which applies
/// the default step and rejects conflicting fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum RangeSpec {
    Signed(SignedRange),
    Unsigned(UnsignedRange),
}

/// A range over `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignedRange {
    ByCount { from: i32, count: i32 },
    Stepped { from: i32, to: i32, step: i32 },
}

/// A range over `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UnsignedRange {
    ByCount { from: u32, count: u32 },
    Stepped { from: u32, to: u32, step: u32 },
}

impl RangeSpec {
    pub fn signed_count(from: i32, count: i32) -> Self {
        RangeSpec::Signed(SignedRange::ByCount { from, count })
    }

    pub fn signed_stepped(from: i32, to: i32, step: i32) -> Self {
        RangeSpec::Signed(SignedRange::Stepped { from, to, step })
    }

    pub fn unsigned_count(from: u32, count: u32) -> Self {
        RangeSpec::Unsigned(UnsignedRange::ByCount { from, count })
    }

    pub fn unsigned_stepped(from: u32, to: u32, step: u32) -> Self {
        RangeSpec::Unsigned(UnsignedRange::Stepped { from, to, step })
    }

    pub fn domain(&self) -> &'static str {
        match self {
            RangeSpec::Signed(_) => "signed",
            RangeSpec::Unsigned(_) => "unsigned",
        }
    }

    /// Checks the specification without materializing any values.
    pub fn validate(&self) -> Result<(), RangeError> {
        match self {
            RangeSpec::Signed(range) => range.validate(),
            RangeSpec::Unsigned(range) => range.validate(),
        }
    }

    /// Expands the specification into its ordered value set.
    pub fn expand(&self) -> Result<ValueSet, RangeError> {
        let values = match self {
            RangeSpec::Signed(range) => range.expand()?.into_iter().collect::<ValueSet>(),
            RangeSpec::Unsigned(range) => range.expand()?.into_iter().collect::<ValueSet>(),
        };
        tracing::debug!(domain = self.domain(), len = values.len(), "expanded range");
        Ok(values)
    }
}

impl From<SignedRange> for RangeSpec {
    fn from(range: SignedRange) -> Self {
        RangeSpec::Signed(range)
    }
}

impl From<UnsignedRange> for RangeSpec {
    fn from(range: UnsignedRange) -> Self {
        RangeSpec::Unsigned(range)
    }
}

// ============================================================================
// SIGNED DOMAIN
// ============================================================================

impl SignedRange {
    pub fn validate(&self) -> Result<(), RangeError> {
        match *self {
            SignedRange::ByCount { from, count } => {
                check_count(i64::from(count))?;
                if i64::from(from) + i64::from(count) - 1 > i64::from(i32::MAX) {
                    return Err(RangeError::Overflow {
                        domain: "signed",
                        from: i64::from(from),
                        count: i64::from(count),
                    });
                }
                Ok(())
            }
            SignedRange::Stepped { from, to, step } => {
                let direction_ok = match step {
                    0 => return Err(RangeError::InvalidStep),
                    s if s > 0 => to >= from,
                    _ => to <= from,
                };
                if direction_ok {
                    Ok(())
                } else {
                    Err(RangeError::InvalidDirection {
                        from: i64::from(from),
                        to: i64::from(to),
                        step: i64::from(step),
                    })
                }
            }
        }
    }

    /// Expands into `from + i * step` for `i` in `0..count`.
    ///
    /// For stepped ranges `count = (to - from) / step + 1` with truncating
    /// division, so a final step that would pass `to` adds no value.
    pub fn expand(&self) -> Result<Vec<i32>, RangeError> {
        self.validate()?;
        let (from, count, step) = match *self {
            SignedRange::ByCount { from, count } => (i64::from(from), i64::from(count), 1),
            SignedRange::Stepped { from, to, step } => {
                let (from, to, step) = (i64::from(from), i64::from(to), i64::from(step));
                (from, (to - from) / step + 1, step)
            }
        };
        // Every value lies within the validated bounds, so narrowing cannot fail.
        Ok((0..count)
            .map(|i| (from + i * step) as i32)
            .collect())
    }
}

// ============================================================================
// UNSIGNED DOMAIN
// ============================================================================

impl UnsignedRange {
    pub fn validate(&self) -> Result<(), RangeError> {
        match *self {
            UnsignedRange::ByCount { from, count } => {
                check_count(i64::from(count))?;
                if from.checked_add(count - 1).is_none() {
                    return Err(RangeError::Overflow {
                        domain: "unsigned",
                        from: i64::from(from),
                        count: i64::from(count),
                    });
                }
                Ok(())
            }
            UnsignedRange::Stepped { step, .. } => {
                if step == 0 {
                    Err(RangeError::InvalidStep)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Expands by walking from `from` toward `to`.
    ///
    /// Ascending when `from < to`, otherwise descending. Both ends are
    /// inclusive. The walk stops as soon as the next value would leave the
    /// `[min(from, to), max(from, to)]` band or leave the `u32` domain.
    pub fn expand(&self) -> Result<Vec<u32>, RangeError> {
        self.validate()?;
        let (from, to, step) = match *self {
            UnsignedRange::ByCount { from, count } => {
                return Ok((0..count).map(|i| from + i).collect());
            }
            UnsignedRange::Stepped { from, to, step } => (from, to, step),
        };

        let mut values = Vec::new();
        let mut current = Some(from);
        if from < to {
            while let Some(i) = current.filter(|&i| i <= to) {
                values.push(i);
                current = i.checked_add(step);
            }
        } else {
            while let Some(i) = current.filter(|&i| i >= to && i <= from) {
                values.push(i);
                current = i.checked_sub(step);
            }
        }
        Ok(values)
    }
}

fn check_count(count: i64) -> Result<(), RangeError> {
    if count < 1 {
        Err(RangeError::InvalidCount { count })
    } else {
        Ok(())
    }
}
