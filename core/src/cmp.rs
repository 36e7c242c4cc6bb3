//! Equality and ordering of bit sequences.
//!
//! Ordering is only defined between sequences of the same width and signedness. The named
//! comparisons report anything else as [`BitsError::IncompatibleOperands`]; [`PartialOrd`]
//! reports it as `None`.

use std::cmp::Ordering;

use crate::{
    error::{BitsError, Result},
    BitSequence,
};

/// Fails unless both operands share width and signedness.
pub(crate) fn ensure_compatible(lhs: &BitSequence, rhs: &BitSequence) -> Result<()> {
    if lhs.width() != rhs.width() || lhs.is_signed() != rhs.is_signed() {
        return Err(BitsError::IncompatibleOperands {
            lhs_width: lhs.width(),
            lhs_signed: lhs.is_signed(),
            rhs_width: rhs.width(),
            rhs_signed: rhs.is_signed(),
        });
    }
    Ok(())
}

impl BitSequence {
    /// True iff both sequences have the same signedness, width and bits. Never fails.
    pub fn equals(&self, other: &Self) -> bool {
        self.is_signed() == other.is_signed() && self.bits() == other.bits()
    }

    /// Bit-level "greater than".
    ///
    /// For signed sequences a differing sign bit decides on its own. Otherwise the first
    /// differing bit, most significant first, decides; identical sequences are not greater.
    pub fn greater_than(&self, other: &Self) -> Result<bool> {
        ensure_compatible(self, other)?;

        if self.is_signed() && self.msb() != other.msb() {
            // the operand with the sign bit set is the negative one
            return Ok(other.msb());
        }

        let first_difference = self.iter().zip(other.iter()).find(|(a, b)| a != b);
        Ok(matches!(first_difference, Some((true, false))))
    }

    /// Neither greater than nor equal to `other`.
    pub fn less_than(&self, other: &Self) -> Result<bool> {
        Ok(!self.greater_than(other)? && !self.equals(other))
    }
}

impl PartialOrd for BitSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.equals(other) {
            return Some(Ordering::Equal);
        }
        match self.greater_than(other) {
            Ok(true) => Some(Ordering::Greater),
            Ok(false) => Some(Ordering::Less),
            Err(_) => None,
        }
    }
}
