//! Serialized form of a [`BitSequence`].
//!
//! Sequences serialize as `{"bits": "10100010", "width": 8, "signed": false}`. On the way back in,
//! `bits` may also be an integer or a list of booleans, mirroring the three construction paths.
//! A missing `width` is inferred from a list, otherwise taken from [`ArithConfig::default`], as is
//! a missing `signed`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use binseq_config::ArithConfig;

use crate::{
    error::{BitsError, Result},
    BitSequence,
};

/// A bit as it arrives from a loosely typed source, before it has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBit {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl RawBit {
    /// The bit value, only if this is an actual boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawBit::Bool(bit) => Some(*bit),
            RawBit::Int(_) | RawBit::Str(_) => None,
        }
    }
}

impl From<bool> for RawBit {
    fn from(bit: bool) -> Self {
        RawBit::Bool(bit)
    }
}

#[derive(Serialize)]
struct SerializedSequence {
    bits: String,
    width: usize,
    signed: bool,
}

// u64 is tried after i64 so unsigned 64-bit values above i64::MAX still parse.
#[derive(Deserialize)]
#[serde(untagged)]
enum BitsSource {
    Int(i64),
    UInt(u64),
    Str(String),
    List(Vec<RawBit>),
}

#[derive(Deserialize)]
struct SequenceRepr {
    bits: BitsSource,
    width: Option<usize>,
    signed: Option<bool>,
}

impl SequenceRepr {
    fn into_sequence(self) -> Result<BitSequence> {
        let defaults = ArithConfig::default();
        let signed = self.signed.unwrap_or(defaults.signed);
        let width = self.width.unwrap_or(defaults.width);

        match self.bits {
            BitsSource::Int(value) => BitSequence::from_int(value.into(), width, signed),
            BitsSource::UInt(value) => BitSequence::from_int(value.into(), width, signed),
            BitsSource::Str(s) => BitSequence::from_bit_str(&s, width, signed),
            BitsSource::List(raw) => {
                if let Some(width) = self.width {
                    if width != raw.len() {
                        return Err(BitsError::LengthMismatch {
                            expected: width,
                            actual: raw.len(),
                        });
                    }
                }
                BitSequence::from_raw_bits(&raw, signed)
            }
        }
    }
}

impl Serialize for BitSequence {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerializedSequence {
            bits: self.to_string(),
            width: self.width(),
            signed: self.is_signed(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BitSequence {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = SequenceRepr::deserialize(deserializer)?;
        repr.into_sequence().map_err(de::Error::custom)
    }
}
