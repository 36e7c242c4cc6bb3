//! Gate-level building blocks for binary arithmetic.
//!
//! Every function here works on bits stored most-significant first, the same order a
//! [`BitSequence`](crate::BitSequence) uses. Multi-bit operations walk the inputs from the least
//! significant end and thread a carry through a chain of full-adders, exactly as a ripple-carry
//! circuit would.

/// Exclusive-or of two bits.
#[inline]
pub fn xor(a: bool, b: bool) -> bool {
    (a || b) && !(a && b)
}

/// Sums two bits without a carry-in. Returns `(sum, carry_out)`.
#[inline]
pub fn half_adder(a: bool, b: bool) -> (bool, bool) {
    (xor(a, b), a && b)
}

/// Sums two bits and a carry-in by chaining two half-adders. Returns `(sum, carry_out)`.
#[inline]
pub fn full_adder(carry_in: bool, a: bool, b: bool) -> (bool, bool) {
    let (partial_sum, partial_carry) = half_adder(a, b);
    let (sum, carry) = half_adder(carry_in, partial_sum);
    (sum, carry || partial_carry)
}

/// Adds two equal-length bit vectors with a ripple-carry adder.
///
/// If a carry is left after the most significant position it is prepended, so the result is
/// either `a.len()` or `a.len() + 1` bits long.
///
/// # Panics
///
/// If `a` and `b` differ in length; operands are never padded implicitly.
pub fn ripple_add(a: &[bool], b: &[bool], carry_in: bool) -> Vec<bool> {
    assert_eq!(
        a.len(),
        b.len(),
        "ripple_add operands must have the same number of bits"
    );

    let mut result = Vec::with_capacity(a.len() + 1);
    let mut carry = carry_in;
    for (&bit_a, &bit_b) in a.iter().rev().zip(b.iter().rev()) {
        let (sum, carry_out) = full_adder(carry, bit_a, bit_b);
        result.push(sum);
        carry = carry_out;
    }
    if carry {
        result.push(true);
    }

    result.reverse();
    result
}

/// Bitwise NOT.
pub fn invert(bits: &[bool]) -> Vec<bool> {
    bits.iter().map(|bit| !bit).collect()
}

/// Two's complement: invert every bit, then add one.
///
/// The result always has `bits.len()` bits. The only input that carries out of the most
/// significant position is the all-zero pattern, whose complement is itself.
pub fn twos_complement(bits: &[bool]) -> Vec<bool> {
    if bits.is_empty() {
        return Vec::new();
    }

    let mut one = vec![false; bits.len()];
    one[bits.len() - 1] = true;

    let mut result = ripple_add(&invert(bits), &one, false);
    if result.len() > bits.len() {
        result.remove(0);
    }
    result
}

/// Subtracts `b` from `a` by adding the two's complement of `b`.
///
/// Like [`ripple_add`], the result may carry one extra leading bit; callers truncate as their
/// signedness requires.
pub fn ripple_subtract(a: &[bool], b: &[bool]) -> Vec<bool> {
    ripple_add(a, &twos_complement(b), false)
}
