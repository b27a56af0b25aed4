//! Effect-chance floor when resistance outweighs accuracy

use bigdecimal::BigDecimal;

use crate::dec;

/// Net effect chance after resistance, floored at 0.15
///
/// Computes `resistance - accuracy`; any difference at or below 0.15 is
/// floored to exactly 0.15, so resistance can never fully negate an
/// effect.
pub fn resistance_accuracy_rule(resistance: &BigDecimal, accuracy: &BigDecimal) -> BigDecimal {
    let floor = dec("0.15");
    let difference = resistance - accuracy;
    if difference <= floor {
        floor
    } else {
        difference
    }
}
