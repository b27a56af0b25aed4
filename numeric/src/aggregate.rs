//! Aggregation folds over mixed token sequences

use bigdecimal::{BigDecimal, One, Zero};

use crate::parse::parse_token;

/// Sum of the numeric tokens in `tokens`
///
/// Tokens that do not parse as numbers are skipped silently; an empty or
/// all-invalid sequence sums to 0.
pub fn sum_of_tokens<I>(tokens: I) -> BigDecimal
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| parse_token(token.as_ref()))
        .fold(BigDecimal::zero(), |acc, value| acc + value)
}

/// Product of the numeric tokens in `tokens`
///
/// Tokens that do not parse as numbers are skipped silently; an empty or
/// all-invalid sequence multiplies out to 1.
pub fn product_of_tokens<I>(tokens: I) -> BigDecimal
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| parse_token(token.as_ref()))
        .fold(BigDecimal::one(), |acc, value| acc * value)
}

/// The n-th triangular number
pub fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}
