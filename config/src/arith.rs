use std::fmt;

use serde::Deserialize;

use super::Config;

/// Defaults applied when a bit sequence is built without an explicit width or signedness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    pub width: usize,
    pub signed: bool,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            width: 8,
            signed: false,
        }
    }
}

impl fmt::Display for ArithConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signedness = if self.signed { "signed" } else { "unsigned" };
        write!(f, "{}-bit {signedness}", self.width)
    }
}

impl Config for ArithConfig {
    const PREFIX: &'static str = "ARITH";
}
