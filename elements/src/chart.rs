//! The published element chart and multiplier lookups

use bigdecimal::BigDecimal;

use crate::types::{Effectiveness, Element};

/// One attacker's row in the chart
#[derive(Debug)]
pub struct ElementRule {
    pub attacker: Element,
    /// Elements this attacker deals double damage to
    pub strong_against: &'static [Element],
    /// Elements this attacker deals half damage to
    pub weak_against: &'static [Element],
}

/// The full effectiveness chart, one row per attacker, in discriminant order
///
/// Each direction is encoded explicitly. The chart is not symmetric and is
/// kept exactly as published: DARK halves against TERRA while TERRA's row
/// does not mention DARK, and WIND is the one element strong against
/// itself.
pub static ELEMENT_CHART: [ElementRule; 14] = [
    ElementRule {
        attacker: Element::Terra,
        strong_against: &[Element::Electric, Element::Dark],
        weak_against: &[Element::Metal, Element::War],
    },
    ElementRule {
        attacker: Element::Flame,
        strong_against: &[Element::Nature, Element::Ice],
        weak_against: &[Element::Sea, Element::War],
    },
    ElementRule {
        attacker: Element::Sea,
        strong_against: &[Element::Flame, Element::War],
        weak_against: &[Element::Nature, Element::Electric],
    },
    ElementRule {
        attacker: Element::Nature,
        strong_against: &[Element::Sea, Element::Light],
        weak_against: &[Element::Flame, Element::Ice],
    },
    ElementRule {
        attacker: Element::Electric,
        strong_against: &[Element::Sea, Element::Metal],
        weak_against: &[Element::Terra, Element::Light],
    },
    ElementRule {
        attacker: Element::Ice,
        strong_against: &[Element::Nature, Element::War],
        weak_against: &[Element::Flame, Element::Metal],
    },
    ElementRule {
        attacker: Element::Metal,
        strong_against: &[Element::Terra, Element::Ice],
        weak_against: &[Element::Electric, Element::Dark],
    },
    ElementRule {
        attacker: Element::Dark,
        strong_against: &[Element::Metal, Element::Light],
        weak_against: &[Element::Terra],
    },
    ElementRule {
        attacker: Element::Light,
        strong_against: &[Element::Electric, Element::Dark],
        weak_against: &[Element::Nature],
    },
    ElementRule {
        attacker: Element::War,
        strong_against: &[Element::Terra, Element::Flame],
        weak_against: &[Element::Sea, Element::Ice],
    },
    ElementRule {
        attacker: Element::Pure,
        strong_against: &[Element::Legend],
        weak_against: &[Element::Primal],
    },
    ElementRule {
        attacker: Element::Legend,
        strong_against: &[Element::Primal],
        weak_against: &[Element::Pure],
    },
    ElementRule {
        attacker: Element::Primal,
        strong_against: &[Element::Pure],
        weak_against: &[Element::Legend],
    },
    ElementRule {
        attacker: Element::Wind,
        strong_against: &[Element::Wind],
        weak_against: &[],
    },
];

impl Element {
    /// This element's chart row
    pub fn rule(&self) -> &'static ElementRule {
        &ELEMENT_CHART[*self as usize]
    }

    /// Elements this one deals double damage to
    pub fn strong_against(&self) -> &'static [Element] {
        self.rule().strong_against
    }

    /// Elements this one deals half damage to
    pub fn weak_against(&self) -> &'static [Element] {
        self.rule().weak_against
    }

    /// Effectiveness of an attack of this element against `defender`
    pub fn effectiveness(&self, defender: Element) -> Effectiveness {
        let rule = self.rule();
        if rule.strong_against.contains(&defender) {
            Effectiveness::Strong
        } else if rule.weak_against.contains(&defender) {
            Effectiveness::Weak
        } else {
            Effectiveness::Neutral
        }
    }

    /// Exact damage multiplier (2, 0.5, or 1) against `defender`
    pub fn damage_multiplier(&self, defender: Element) -> BigDecimal {
        self.effectiveness(defender).multiplier()
    }
}

/// Multiplier lookup keyed by raw element names (case-insensitive)
///
/// Any name outside the enumeration, on either side, yields the neutral
/// multiplier rather than an error; save files and scripted encounters
/// carry untyped element strings.
pub fn damage_multiplier_by_name(attacker: &str, defender: &str) -> BigDecimal {
    match (Element::from_name(attacker), Element::from_name(defender)) {
        (Some(attacker), Some(defender)) => attacker.damage_multiplier(defender),
        _ => Effectiveness::Neutral.multiplier(),
    }
}

/// Render the chart as a plain-text table, one row per attacker
pub fn render_chart() -> String {
    const HEADERS: [&str; 3] = ["ATTACKING ELEMENT", "DOUBLE DAMAGE", "HALF DAMAGE"];

    let rows: Vec<[String; 3]> = ELEMENT_CHART
        .iter()
        .map(|rule| {
            [
                rule.attacker.to_string(),
                join_elements(rule.strong_against),
                join_elements(rule.weak_against),
            ]
        })
        .collect();

    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn join_elements(elements: &[Element]) -> String {
    if elements.is_empty() {
        return "N/A".to_string();
    }
    elements
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let line = format!(
        "{:<first$}  {:<second$}  {:<third$}",
        cells[0],
        cells[1],
        cells[2],
        first = widths[0],
        second = widths[1],
        third = widths[2],
    );
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_chart_rows_match_discriminants() {
        for (index, rule) in ELEMENT_CHART.iter().enumerate() {
            assert_eq!(rule.attacker as usize, index);
        }
    }

    #[test]
    fn test_rows_are_disjoint_and_only_wind_lists_itself() {
        for rule in &ELEMENT_CHART {
            for strong in rule.strong_against {
                assert!(
                    !rule.weak_against.contains(strong),
                    "{} lists {} as both strong and weak",
                    rule.attacker,
                    strong
                );
            }
            let lists_itself = rule.strong_against.contains(&rule.attacker)
                || rule.weak_against.contains(&rule.attacker);
            assert_eq!(lists_itself, rule.attacker == Element::Wind);
        }
    }

    #[test]
    fn test_full_chart_matches_published_table() {
        use Element::*;
        let expected: [(Element, &[Element], &[Element]); 14] = [
            (Terra, &[Electric, Dark], &[Metal, War]),
            (Flame, &[Nature, Ice], &[Sea, War]),
            (Sea, &[Flame, War], &[Nature, Electric]),
            (Nature, &[Sea, Light], &[Flame, Ice]),
            (Electric, &[Sea, Metal], &[Terra, Light]),
            (Ice, &[Nature, War], &[Flame, Metal]),
            (Metal, &[Terra, Ice], &[Electric, Dark]),
            (Dark, &[Metal, Light], &[Terra]),
            (Light, &[Electric, Dark], &[Nature]),
            (War, &[Terra, Flame], &[Sea, Ice]),
            (Pure, &[Legend], &[Primal]),
            (Legend, &[Primal], &[Pure]),
            (Primal, &[Pure], &[Legend]),
            (Wind, &[Wind], &[]),
        ];
        for (attacker, strong, weak) in expected {
            assert_eq!(attacker.strong_against(), strong, "{attacker} strong set");
            assert_eq!(attacker.weak_against(), weak, "{attacker} weak set");
        }
    }

    #[test]
    fn test_self_pairs_neutral_except_wind() {
        for element in Element::all() {
            let expected = if *element == Element::Wind {
                Effectiveness::Strong
            } else {
                Effectiveness::Neutral
            };
            assert_eq!(element.effectiveness(*element), expected);
        }
    }

    #[test]
    fn test_terra_multipliers() {
        assert_eq!(Element::Terra.damage_multiplier(Element::Electric), dec("2"));
        assert_eq!(Element::Terra.damage_multiplier(Element::Metal), dec("0.5"));
        assert_eq!(Element::Terra.damage_multiplier(Element::Sea), dec("1"));
    }

    #[test]
    fn test_dark_terra_asymmetry_is_preserved() {
        // DARK halves against TERRA, but TERRA's row ignores DARK. The
        // published chart reads this way and must stay this way.
        assert_eq!(Element::Dark.damage_multiplier(Element::Terra), dec("0.5"));
        assert_eq!(Element::Terra.damage_multiplier(Element::Dark), dec("1"));
    }

    #[test]
    fn test_lookup_total_over_all_pairs() {
        for attacker in Element::all() {
            for defender in Element::all() {
                let multiplier = attacker.damage_multiplier(*defender);
                assert!(
                    multiplier == dec("2") || multiplier == dec("0.5") || multiplier == dec("1")
                );
            }
        }
    }

    #[test]
    fn test_by_name_lookup() {
        assert_eq!(damage_multiplier_by_name("TERRA", "ELECTRIC"), dec("2"));
        assert_eq!(damage_multiplier_by_name("terra", "electric"), dec("2"));
        assert_eq!(damage_multiplier_by_name("DARK", "TERRA"), dec("0.5"));
    }

    #[test]
    fn test_by_name_unknown_is_neutral() {
        assert_eq!(damage_multiplier_by_name("PLASMA", "TERRA"), dec("1"));
        assert_eq!(damage_multiplier_by_name("TERRA", "PLASMA"), dec("1"));
        assert_eq!(damage_multiplier_by_name("", ""), dec("1"));
    }

    #[test]
    fn test_render_chart_lists_every_attacker() {
        let table = render_chart();
        for element in Element::all() {
            assert!(table.contains(element.as_str()));
        }
        // WIND resists nothing; its half-damage cell renders the
        // published placeholder.
        assert!(table.contains("N/A"));
    }
}
