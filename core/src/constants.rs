/// Widest sequence that can be constructed. Decimal values are cached as `i128`, which covers the
/// full unsigned range at this width.
pub const MAX_WIDTH: usize = 64;

pub const ZERO_DIGIT: char = '0';
pub const ONE_DIGIT: char = '1';
