//! Addition and subtraction on [`BitSequence`] values.
//!
//! Both operators run the bits through the ripple-carry adder in [`logic`](crate::logic) and
//! wrap the outcome in a freshly validated sequence. A carry out of the most significant position
//! means overflow for unsigned operands; signed operands instead overflow when the sign of the
//! result contradicts the signs of the operands.

use std::fmt;

use crate::{
    cmp::ensure_compatible,
    error::{BitsError, Result},
    logic,
    trace::ArithTrace,
    BitSequence, LOG_TARGET,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Subtract => '-',
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithOp::Add => write!(f, "add"),
            ArithOp::Subtract => write!(f, "subtract"),
        }
    }
}

impl BitSequence {
    /// Sum of two sequences of equal width and signedness.
    ///
    /// Fails with [`BitsError::Overflow`] if the sum does not fit the shared width.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        let _span = tracing::debug_span!(
            target: LOG_TARGET,
            "add",
            width = self.width(),
            signed = self.is_signed()
        )
        .entered();

        ensure_compatible(self, rhs)?;

        let width = self.width();
        let mut sum = logic::ripple_add(self.bits(), rhs.bits(), false);

        let overflow = if self.is_signed() {
            // a carry out of the sign position alone is not an overflow
            keep_low_bits(&mut sum, width);
            self.msb() == rhs.msb() && sum[0] != self.msb()
        } else {
            sum.len() > width
        };
        if overflow {
            return Err(self.overflow(ArithOp::Add, rhs));
        }

        self.finish(ArithOp::Add, rhs, sum)
    }

    /// Difference of two sequences of equal width and signedness.
    ///
    /// Unsigned subtraction requires `self` to be strictly greater than `rhs` and fails with
    /// [`BitsError::Underflow`] otherwise. Signed subtraction fails with [`BitsError::Overflow`]
    /// when the difference leaves the representable range.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        let _span = tracing::debug_span!(
            target: LOG_TARGET,
            "subtract",
            width = self.width(),
            signed = self.is_signed()
        )
        .entered();

        ensure_compatible(self, rhs)?;

        if !self.is_signed() && !self.greater_than(rhs)? {
            let err = BitsError::Underflow {
                minuend: self.decimal(),
                subtrahend: rhs.decimal(),
            };
            tracing::debug!(target: LOG_TARGET, %err, "subtraction rejected");
            return Err(err);
        }

        let width = self.width();
        let mut difference = logic::ripple_subtract(self.bits(), rhs.bits());
        keep_low_bits(&mut difference, width);

        if self.is_signed() && self.msb() != rhs.msb() && difference[0] != self.msb() {
            return Err(self.overflow(ArithOp::Subtract, rhs));
        }

        self.finish(ArithOp::Subtract, rhs, difference)
    }

    fn finish(&self, op: ArithOp, rhs: &Self, bits: Vec<bool>) -> Result<Self> {
        let result = BitSequence::from_bits(bits, self.is_signed())?;
        tracing::debug!(
            target: LOG_TARGET,
            "{}",
            ArithTrace::new(op, self, rhs, &result)
        );
        Ok(result)
    }

    fn overflow(&self, op: ArithOp, rhs: &Self) -> BitsError {
        let err = BitsError::Overflow {
            op: op.symbol(),
            lhs: self.decimal(),
            rhs: rhs.decimal(),
            width: self.width(),
        };
        tracing::debug!(target: LOG_TARGET, %err, "{op} rejected");
        err
    }
}

/// Drops leading bits until only the `width` least significant remain.
fn keep_low_bits(bits: &mut Vec<bool>, width: usize) {
    if bits.len() > width {
        bits.drain(..bits.len() - width);
    }
}
