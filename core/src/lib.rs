//! Fixed-width binary numbers with explicit bit-level arithmetic.
//!
//! A [`BitSequence`] holds its bits most-significant first, together with a signedness flag that
//! decides whether the leading bit is read as a two's-complement sign bit. Arithmetic never falls
//! back to machine integers: sums are produced by a ripple-carry adder built from half- and
//! full-adders, and differences by adding the two's complement of the subtrahend.
//!
//! ```rust
//! use binseq_core::BitSequence;
//!
//! let a = BitSequence::from_int(93, 8, false).unwrap();
//! let b = BitSequence::from_bit_str("10100010", 8, false).unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.to_string(), "11111111");
//! assert_eq!(sum.decimal(), 255);
//! ```

pub mod arith;
pub mod cmp;
pub mod codec;
pub mod constants;
pub mod error;
pub mod logic;
pub mod repr;
pub mod sequence;
pub mod trace;

pub use binseq_config::ArithConfig;
pub use error::{BitsError, Result};
pub use repr::RawBit;
pub use sequence::BitSequence;

pub(crate) const LOG_TARGET: &str = "binseq";
