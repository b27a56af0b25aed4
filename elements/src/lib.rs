//! Elemental rules for the Eldra creature games.
//!
//! This crate owns the fixed element chart and the combat rules derived
//! from it. It sits below the game clients the same way the chart sits
//! below every battle screen:
//!
//! ```text
//! eldra-elements (chart + rules)  ← THIS CRATE
//!        │
//!        ├─> battle/damage resolution in the game apps
//!        └─> team building and matchup display
//! ```
//!
//! # Main Types
//!
//! - [`Element`] - the fourteen elements, with lenient and strict parsing
//! - [`Effectiveness`] - outcome of an attack matchup (Strong/Weak/Neutral)
//! - [`ElementRule`] / [`ELEMENT_CHART`] - the published chart, one row per
//!   attacker
//!
//! # Main Operations
//!
//! - [`Element::damage_multiplier`] - exact multiplier (2, 0.5, or 1) for an
//!   attacker/defender pair
//! - [`damage_multiplier_by_name`] - the same lookup keyed by raw strings,
//!   neutral for anything unrecognized
//! - [`resistance_accuracy_rule`] - effect-chance floor when resistance
//!   outweighs accuracy
//! - [`query`] - matchup scans over the whole chart
//!
//! # Example Usage
//!
//! ```ignore
//! use eldra_elements::{damage_multiplier_by_name, Element};
//!
//! let multiplier = Element::Terra.damage_multiplier(Element::Electric);
//! assert_eq!(multiplier.to_string(), "2");
//!
//! // Untyped data from a save file falls back to neutral.
//! let neutral = damage_multiplier_by_name("PLASMA", "TERRA");
//! assert_eq!(neutral.to_string(), "1");
//! ```

use bigdecimal::BigDecimal;

pub mod accuracy;
pub mod chart;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use accuracy::resistance_accuracy_rule;
pub use chart::{damage_multiplier_by_name, render_chart, ElementRule, ELEMENT_CHART};
pub use types::{Effectiveness, Element, ParseElementError};

/// Parse a decimal literal known to be valid at compile time.
pub(crate) fn dec(repr: &str) -> BigDecimal {
    repr.parse().expect("valid decimal literal")
}
