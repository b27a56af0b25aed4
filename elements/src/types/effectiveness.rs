//! Matchup outcomes and their damage multipliers

use bigdecimal::BigDecimal;

use crate::dec;

/// Outcome of an attack matchup
///
/// Every attacker/defender pair resolves to exactly one of these; the
/// multipliers are fixed at 2, 0.5, and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    /// Double damage
    Strong,
    /// Half damage
    Weak,
    /// Normal damage, including every unlisted pair
    Neutral,
}

impl Effectiveness {
    /// Exact damage multiplier for this outcome
    pub fn multiplier(&self) -> BigDecimal {
        match self {
            Effectiveness::Strong => dec("2"),
            Effectiveness::Weak => dec("0.5"),
            Effectiveness::Neutral => dec("1"),
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::Strong => "Strong",
            Effectiveness::Weak => "Weak",
            Effectiveness::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
