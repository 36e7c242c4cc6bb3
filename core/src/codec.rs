//! Conversions between bit vectors, decimal integers, and canonical bit-strings.
//!
//! Nothing in this module checks that a decimal value fits its width: [`encode`] silently wraps
//! oversized magnitudes. [`BitSequence`](crate::BitSequence) runs the range check after every
//! encode.

use crate::{
    constants::{MAX_WIDTH, ONE_DIGIT, ZERO_DIGIT},
    error::{BitsError, Result},
    logic::twos_complement,
};

/// Fails unless `width` is a constructible bit width.
pub fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(BitsError::InvalidWidth { width });
    }
    Ok(())
}

/// Encodes `value` into `width` bits, most significant first.
///
/// The magnitude is decomposed positionally from `2^(width-1)` down to `2^0`; negative signed
/// values are then turned into their two's complement.
pub fn encode(value: i128, width: usize, signed: bool) -> Vec<bool> {
    let is_negative = signed && value < 0;
    let mut residual = value.unsigned_abs();

    let mut bits = Vec::with_capacity(width);
    for position in (0..width).rev() {
        let power = 1u128 << position;
        bits.push(residual >= power);
        residual %= power;
    }

    if is_negative {
        twos_complement(&bits)
    } else {
        bits
    }
}

/// Decodes bits into a decimal value, reading the leading bit as a sign bit when `signed`.
pub fn decode(bits: &[bool], signed: bool) -> i128 {
    debug_assert!(bits.len() <= MAX_WIDTH);

    match bits.first() {
        Some(true) if signed => -positional_value(&twos_complement(bits)),
        _ => positional_value(bits),
    }
}

fn positional_value(bits: &[bool]) -> i128 {
    bits.iter()
        .fold(0i128, |acc, &bit| (acc << 1) | i128::from(bit))
}

/// Smallest and largest decimal value representable in `width` bits.
pub fn representable_range(width: usize, signed: bool) -> Result<(i128, i128)> {
    check_width(width)?;

    if signed {
        let mut min_pattern = vec![false; width];
        min_pattern[0] = true;
        let mut max_pattern = vec![true; width];
        max_pattern[0] = false;

        Ok((decode(&min_pattern, true), decode(&max_pattern, true)))
    } else {
        Ok((0, decode(&vec![true; width], false)))
    }
}

/// Canonical textual form: one `'0'`/`'1'` per bit, most significant first.
pub fn to_bit_string(bits: &[bool]) -> String {
    bits.iter()
        .map(|&bit| if bit { ONE_DIGIT } else { ZERO_DIGIT })
        .collect()
}

/// Parses a bit-string that must be exactly `width` characters of `'0'` and `'1'`.
pub fn parse_bit_str(s: &str, width: usize) -> Result<Vec<bool>> {
    let actual = s.chars().count();
    if actual != width {
        return Err(BitsError::LengthMismatch {
            expected: width,
            actual,
        });
    }

    s.chars()
        .enumerate()
        .map(|(index, digit)| match digit {
            ZERO_DIGIT => Ok(false),
            ONE_DIGIT => Ok(true),
            _ => Err(BitsError::InvalidDigit { index, digit }),
        })
        .collect()
}
