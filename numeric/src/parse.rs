//! Numeric token parsing

use bigdecimal::BigDecimal;

/// Parse a token as an exact decimal, if it is one
///
/// Accepts integers, decimals, signs, and exponent notation. No trimming
/// or normalization: a token with surrounding whitespace is not a number.
pub fn parse_token(token: &str) -> Option<BigDecimal> {
    token.parse().ok()
}

/// Check if a token parses as a number
pub fn is_number(token: &str) -> bool {
    parse_token(token).is_some()
}
