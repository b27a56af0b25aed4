//! Exact numeric helpers for the Eldra games.
//!
//! Stat sheets and save data carry numbers as strings, mixed with entries
//! that are not numbers at all. These helpers fold the numeric tokens with
//! arbitrary-precision decimals, so arbitrarily large or precise values
//! survive aggregation without float rounding.

mod aggregate;
mod parse;

pub use aggregate::{product_of_tokens, sum_of_tokens, triangular};
pub use parse::{is_number, parse_token};
