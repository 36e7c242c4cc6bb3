//! Human-readable rendering of a single arithmetic step.
//!
//! [`ArithTrace`] is emitted at debug level by the operators in [`arith`](crate::arith); it is a
//! diagnostic aid and its layout carries no stability guarantee.

use std::fmt;

use crate::{arith::ArithOp, BitSequence};

const INDENT: &str = "        ";

/// Operands, operator and result of one addition or subtraction, in aligned columns.
#[derive(Debug, Clone, Copy)]
pub struct ArithTrace<'a> {
    pub op: ArithOp,
    pub lhs: &'a BitSequence,
    pub rhs: &'a BitSequence,
    pub result: &'a BitSequence,
}

impl<'a> ArithTrace<'a> {
    pub fn new(
        op: ArithOp,
        lhs: &'a BitSequence,
        rhs: &'a BitSequence,
        result: &'a BitSequence,
    ) -> Self {
        Self {
            op,
            lhs,
            rhs,
            result,
        }
    }
}

impl fmt::Display for ArithTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signedness = if self.lhs.is_signed() {
            "signed"
        } else {
            "unsigned"
        };
        let op = self.op.symbol();

        writeln!(
            f,
            "For binary sequences ({signedness}) of {} bits:",
            self.lhs.width()
        )?;
        writeln!(f)?;
        writeln!(f, "{INDENT}    {}", self.lhs)?;
        writeln!(f, "{INDENT}{op}   {}", self.rhs)?;
        writeln!(f, "{INDENT}    {}", "-".repeat(self.lhs.width()))?;
        writeln!(f, "{INDENT}=   {}", self.result)?;
        writeln!(f)?;
        write!(
            f,
            "{INDENT}({} {op} {} = {})",
            self.lhs.decimal(),
            self.rhs.decimal(),
            self.result.decimal()
        )
    }
}
