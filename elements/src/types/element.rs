//! The element enumeration

use std::str::FromStr;

use thiserror::Error;

/// The fourteen elements of the Eldra games
///
/// Discriminants index [`ELEMENT_CHART`](crate::ELEMENT_CHART) rows, so the
/// order here is the order the chart is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    Terra = 0,
    Flame = 1,
    Sea = 2,
    Nature = 3,
    Electric = 4,
    Ice = 5,
    Metal = 6,
    Dark = 7,
    Light = 8,
    War = 9,
    Pure = 10,
    Legend = 11,
    Primal = 12,
    Wind = 13,
}

/// Error returned when strict parsing meets a name outside the enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown element: {0}")]
pub struct ParseElementError(pub String);

impl Element {
    /// All fourteen elements, in chart order
    pub const ALL: [Element; 14] = [
        Element::Terra,
        Element::Flame,
        Element::Sea,
        Element::Nature,
        Element::Electric,
        Element::Ice,
        Element::Metal,
        Element::Dark,
        Element::Light,
        Element::War,
        Element::Pure,
        Element::Legend,
        Element::Primal,
        Element::Wind,
    ];

    /// Get all elements as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Parse from an element name (case-insensitive)
    ///
    /// Returns `None` for anything outside the enumeration; callers holding
    /// untyped data treat that as neutral, not as an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "TERRA" => Some(Element::Terra),
            "FLAME" => Some(Element::Flame),
            "SEA" => Some(Element::Sea),
            "NATURE" => Some(Element::Nature),
            "ELECTRIC" => Some(Element::Electric),
            "ICE" => Some(Element::Ice),
            "METAL" => Some(Element::Metal),
            "DARK" => Some(Element::Dark),
            "LIGHT" => Some(Element::Light),
            "WAR" => Some(Element::War),
            "PURE" => Some(Element::Pure),
            "LEGEND" => Some(Element::Legend),
            "PRIMAL" => Some(Element::Primal),
            "WIND" => Some(Element::Wind),
            _ => None,
        }
    }

    /// Canonical name, spelled the way the published chart spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Terra => "TERRA",
            Element::Flame => "FLAME",
            Element::Sea => "SEA",
            Element::Nature => "NATURE",
            Element::Electric => "ELECTRIC",
            Element::Ice => "ICE",
            Element::Metal => "METAL",
            Element::Dark => "DARK",
            Element::Light => "LIGHT",
            Element::War => "WAR",
            Element::Pure => "PURE",
            Element::Legend => "LEGEND",
            Element::Primal => "PRIMAL",
            Element::Wind => "WIND",
        }
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_name(s).ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
