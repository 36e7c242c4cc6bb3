//! The [`BitSequence`] value type.
//!
//! A `BitSequence` is validated on every construction path and never mutated afterwards:
//! arithmetic and comparison live in [`arith`](crate::arith) and [`cmp`](crate::cmp) and always
//! produce fresh values.

use std::{fmt, iter::Copied, slice};

use binseq_config::ArithConfig;

use crate::{
    codec,
    error::{BitsError, Result},
    repr::RawBit,
    LOG_TARGET,
};

/// A fixed-width binary number, most significant bit first.
///
/// The decimal value and the representable bounds are derived once at construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
    signed: bool,
    decimal: i128,
    min_representable: i128,
    max_representable: i128,
}

impl BitSequence {
    /// Encodes `value` into `width` bits.
    ///
    /// Fails with [`BitsError::OutOfRange`] if `value` cannot be represented with the given width
    /// and signedness.
    pub fn from_int(value: i128, width: usize, signed: bool) -> Result<Self> {
        codec::check_width(width).inspect_err(log_rejection)?;

        let bits = codec::encode(value, width, signed);
        Self::validated(bits, signed, value)
    }

    /// Parses a bit-string of exactly `width` characters.
    pub fn from_bit_str(s: &str, width: usize, signed: bool) -> Result<Self> {
        codec::check_width(width).inspect_err(log_rejection)?;

        let bits = codec::parse_bit_str(s, width).inspect_err(log_rejection)?;
        let decimal = codec::decode(&bits, signed);
        Self::validated(bits, signed, decimal)
    }

    /// Takes ownership of a list of bits; the width is the length of the list.
    pub fn from_bits(bits: impl Into<Vec<bool>>, signed: bool) -> Result<Self> {
        let bits = bits.into();
        codec::check_width(bits.len()).inspect_err(log_rejection)?;

        let decimal = codec::decode(&bits, signed);
        Self::validated(bits, signed, decimal)
    }

    /// Builds a sequence from loosely typed bits, rejecting anything that is not a boolean.
    ///
    /// Integers and strings are never coerced, `RawBit::Int(1)` is as invalid as
    /// `RawBit::Str("true".into())`.
    pub fn from_raw_bits(raw: &[RawBit], signed: bool) -> Result<Self> {
        let bits = raw
            .iter()
            .enumerate()
            .map(|(index, bit)| bit.as_bool().ok_or(BitsError::InvalidBit { index }))
            .collect::<Result<Vec<_>>>()
            .inspect_err(log_rejection)?;

        Self::from_bits(bits, signed)
    }

    /// Encodes `value` using the width and signedness from `config`.
    pub fn with_config(value: i128, config: &ArithConfig) -> Result<Self> {
        Self::from_int(value, config.width, config.signed)
    }

    /// Parses a bit-string using the width and signedness from `config`.
    pub fn from_bit_str_with_config(s: &str, config: &ArithConfig) -> Result<Self> {
        Self::from_bit_str(s, config.width, config.signed)
    }

    fn validated(bits: Vec<bool>, signed: bool, decimal: i128) -> Result<Self> {
        let width = bits.len();
        let (min, max) = codec::representable_range(width, signed)?;

        if decimal < min || decimal > max {
            let err = BitsError::OutOfRange {
                value: decimal,
                width,
                min,
                max,
            };
            log_rejection(&err);
            return Err(err);
        }

        Ok(Self {
            bits,
            signed,
            decimal,
            min_representable: min,
            max_representable: max,
        })
    }

    /// Number of bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// The cached decimal value.
    pub fn decimal(&self) -> i128 {
        self.decimal
    }

    /// Bits in most-significant-first order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The most significant bit, which is the sign bit of signed sequences.
    pub fn msb(&self) -> bool {
        self.bits[0]
    }

    pub fn is_negative(&self) -> bool {
        self.signed && self.msb()
    }

    /// `(min, max)` decimal values representable with this width and signedness.
    pub fn bounds(&self) -> (i128, i128) {
        (self.min_representable, self.max_representable)
    }

    /// Iterates over the bits, most significant first.
    pub fn iter(&self) -> Copied<slice::Iter<'_, bool>> {
        self.bits.iter().copied()
    }
}

fn log_rejection(err: &BitsError) {
    tracing::trace!(target: LOG_TARGET, %err, "rejected bit sequence");
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::to_bit_string(&self.bits))
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signedness = if self.signed { "signed" } else { "unsigned" };
        write!(
            f,
            "BitSequence({self}, width={}, {signedness})",
            self.width()
        )
    }
}

impl From<&BitSequence> for i128 {
    fn from(sequence: &BitSequence) -> Self {
        sequence.decimal
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = Copied<slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (bit-string, decimal, bits)
    fn unsigned_cases() -> Vec<(&'static str, i128, Vec<bool>)> {
        vec![
            ("10100010", 162, vec![true, false, true, false, false, false, true, false]),
            ("01011101", 93, vec![false, true, false, true, true, true, false, true]),
            ("11111111", 255, vec![true; 8]),
            ("00000000", 0, vec![false; 8]),
            ("01110101", 117, vec![false, true, true, true, false, true, false, true]),
            ("01001000", 72, vec![false, true, false, false, true, false, false, false]),
        ]
    }

    fn signed_cases() -> Vec<(&'static str, i128)> {
        vec![
            ("10000000", -128),
            ("10000001", -127),
            ("10000010", -126),
            ("00000000", 0),
            ("01111110", 126),
            ("01111101", 125),
        ]
    }

    #[test]
    fn test_str_sequences() {
        for (s, decimal, bits) in unsigned_cases() {
            let sequence = BitSequence::from_bit_str(s, 8, false).unwrap();
            assert_eq!(sequence.decimal(), decimal, "decimal for {s}");
            assert_eq!(sequence.bits(), &bits[..], "bits for {s}");
        }
        for (s, decimal) in signed_cases() {
            let sequence = BitSequence::from_bit_str(s, 8, true).unwrap();
            assert_eq!(sequence.decimal(), decimal, "decimal for {s}");
        }
    }

    #[test]
    fn test_bool_sequences() {
        for (s, decimal, bits) in unsigned_cases() {
            let sequence = BitSequence::from_bits(bits, false).unwrap();
            assert_eq!(sequence.decimal(), decimal);
            assert_eq!(sequence.to_string(), s);
        }
    }

    #[test]
    fn test_dec_sequences() {
        for (s, decimal, bits) in unsigned_cases() {
            let sequence = BitSequence::from_int(decimal, 8, false).unwrap();
            assert_eq!(sequence.to_string(), s);
            assert_eq!(sequence.iter().collect::<Vec<_>>(), bits);
        }
        for (s, decimal) in signed_cases() {
            let sequence = BitSequence::from_int(decimal, 8, true).unwrap();
            assert_eq!(sequence.to_string(), s);
        }
    }

    #[test]
    fn test_range_boundaries() {
        assert!(BitSequence::from_int(255, 8, false).is_ok());
        assert!(BitSequence::from_int(0, 8, false).is_ok());
        assert!(BitSequence::from_int(127, 8, true).is_ok());
        assert!(BitSequence::from_int(-128, 8, true).is_ok());

        assert_eq!(
            BitSequence::from_int(256, 8, false),
            Err(BitsError::OutOfRange {
                value: 256,
                width: 8,
                min: 0,
                max: 255
            })
        );
        assert_eq!(
            BitSequence::from_int(-1, 8, false),
            Err(BitsError::OutOfRange {
                value: -1,
                width: 8,
                min: 0,
                max: 255
            })
        );
        assert!(matches!(
            BitSequence::from_int(128, 8, true),
            Err(BitsError::OutOfRange { value: 128, .. })
        ));
        assert!(matches!(
            BitSequence::from_int(-129, 8, true),
            Err(BitsError::OutOfRange { value: -129, .. })
        ));
    }

    #[test]
    fn test_full_64_bit_range() {
        let max = BitSequence::from_int(u64::MAX as i128, 64, false).unwrap();
        assert_eq!(max.to_string(), "1".repeat(64));

        let min = BitSequence::from_int(i64::MIN as i128, 64, true).unwrap();
        assert_eq!(min.to_string(), format!("1{}", "0".repeat(63)));

        assert!(BitSequence::from_int(u64::MAX as i128 + 1, 64, false).is_err());
    }

    #[test]
    fn test_invalid_widths() {
        assert_eq!(
            BitSequence::from_int(0, 0, false),
            Err(BitsError::InvalidWidth { width: 0 })
        );
        assert_eq!(
            BitSequence::from_bits(Vec::<bool>::new(), true),
            Err(BitsError::InvalidWidth { width: 0 })
        );
        assert_eq!(
            BitSequence::from_bit_str(&"0".repeat(65), 65, false),
            Err(BitsError::InvalidWidth { width: 65 })
        );
    }

    #[test]
    fn test_bit_str_errors() {
        assert_eq!(
            BitSequence::from_bit_str("1010001", 8, false),
            Err(BitsError::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            BitSequence::from_bit_str("1010001x", 8, false),
            Err(BitsError::InvalidDigit {
                index: 7,
                digit: 'x'
            })
        );
    }

    #[test]
    fn test_raw_bits_are_strict() {
        let raw = [RawBit::Bool(true), RawBit::Bool(false), RawBit::Bool(true)];
        let sequence = BitSequence::from_raw_bits(&raw, false).unwrap();
        assert_eq!(sequence.decimal(), 5);

        let raw = [RawBit::Bool(true), RawBit::Int(0), RawBit::Bool(true)];
        assert_eq!(
            BitSequence::from_raw_bits(&raw, false),
            Err(BitsError::InvalidBit { index: 1 })
        );

        let raw = [RawBit::Str("1".to_string())];
        assert_eq!(
            BitSequence::from_raw_bits(&raw, false),
            Err(BitsError::InvalidBit { index: 0 })
        );
    }

    #[test]
    fn test_config_constructors() {
        let config = ArithConfig::default();
        let sequence = BitSequence::with_config(162, &config).unwrap();
        assert_eq!(sequence.width(), 8);
        assert!(!sequence.is_signed());

        let config = ArithConfig {
            width: 4,
            signed: true,
        };
        let sequence = BitSequence::from_bit_str_with_config("1011", &config).unwrap();
        assert_eq!(sequence.decimal(), -5);
        assert!(sequence.is_negative());
    }

    #[test]
    fn test_sign_bit_matches_negativity() {
        for value in -8..8 {
            let sequence = BitSequence::from_int(value, 4, true).unwrap();
            assert_eq!(sequence.msb(), value < 0);
            assert_eq!(sequence.is_negative(), value < 0);
        }
    }

    #[test]
    fn test_accessors_and_formatting() {
        let sequence = BitSequence::from_int(-3, 4, true).unwrap();
        assert_eq!(sequence.bounds(), (-8, 7));
        assert_eq!(i128::from(&sequence), -3);
        assert_eq!(sequence.to_string(), "1101");
        assert_eq!(format!("{sequence:?}"), "BitSequence(1101, width=4, signed)");
        assert_eq!((&sequence).into_iter().filter(|&bit| bit).count(), 3);
    }
}
