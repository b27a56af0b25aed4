//! Matchup scans derived from the element chart

use crate::types::Element;

/// All elements whose attacks deal double damage to `defender`
pub fn threats_to(defender: Element) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|attacker| attacker.strong_against().contains(&defender))
        .collect()
}

/// All elements whose attacks deal half damage to `defender`
pub fn resisted_by(defender: Element) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|attacker| attacker.weak_against().contains(&defender))
        .collect()
}

/// Check if any attacker in `attackers` deals double damage to `defender`
pub fn any_strong_against(attackers: &[Element], defender: Element) -> bool {
    attackers
        .iter()
        .any(|attacker| attacker.strong_against().contains(&defender))
}

/// Check if every attacker in `attackers` deals half damage to `defender`
pub fn all_resisted_by(attackers: &[Element], defender: Element) -> bool {
    if attackers.is_empty() {
        return false;
    }
    attackers
        .iter()
        .all(|attacker| attacker.weak_against().contains(&defender))
}
