// Rules for S (with the SC family), X and Z.

use super::RuleOutcome;
use crate::word::InputWord;

pub(super) fn rule_s(word: &InputWord, i: isize) -> RuleOutcome {
    let slavo_germanic = word.is_slavo_germanic();

    // special cases "island", "isle", "carlisle", "carlysle"
    if word.matches_at(i - 1, &["ISL", "YSL"]) {
        return RuleOutcome::silent(1);
    }
    // special case "sugar-"
    if i == 0 && word.matches_at(i, &["SUGAR"]) {
        return RuleOutcome::split("X", "S", 1);
    }
    if word.matches_at(i, &["SH"]) {
        // Germanic
        if word.matches_at(i + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            return RuleOutcome::both("S", 2);
        }
        return RuleOutcome::both("X", 2);
    }
    // Italian and Armenian
    if word.matches_at(i, &["SIO", "SIA"]) {
        if slavo_germanic {
            return RuleOutcome::both("S", 3);
        }
        return RuleOutcome::split("S", "X", 3);
    }
    // German and anglicisations, e.g. "smith" matches "schmidt", "snider"
    // matches "schneider"; also -sz- in Slavic languages
    if (i == 0 && word.is_any(i + 1, &['M', 'N', 'L', 'W'])) || word.is(i + 1, 'Z') {
        let consumed = if word.is(i + 1, 'Z') { 2 } else { 1 };
        return RuleOutcome::split("S", "X", consumed);
    }
    if word.matches_at(i, &["SC"]) {
        return rule_sc(word, i);
    }

    let consumed = if word.is_any(i + 1, &['S', 'Z']) { 2 } else { 1 };
    // French, e.g. "resnais", "artois"
    if i == word.last() && word.matches_at(i - 2, &["AI", "OI"]) {
        return RuleOutcome::alternate_only("S", consumed);
    }
    RuleOutcome::both("S", consumed)
}

/// Schlesinger's rule and friends.
fn rule_sc(word: &InputWord, i: isize) -> RuleOutcome {
    if word.is(i + 2, 'H') {
        // Dutch origin, e.g. "school", "schooner"
        if word.matches_at(i + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // "schermerhorn", "schenker"
            if word.matches_at(i + 3, &["ER", "EN"]) {
                return RuleOutcome::split("X", "SK", 3);
            }
            return RuleOutcome::both("SK", 3);
        }
        if i == 0 && !word.is_vowel_at(3) && !word.is(3, 'W') {
            return RuleOutcome::split("X", "S", 3);
        }
        return RuleOutcome::both("X", 3);
    }
    if word.is_any(i + 2, &['I', 'E', 'Y']) {
        return RuleOutcome::both("S", 3);
    }
    RuleOutcome::both("SK", 3)
}

pub(super) fn rule_x(word: &InputWord, i: isize) -> RuleOutcome {
    // word-initial X is normally taken by the prelude
    if i == 0 {
        return RuleOutcome::both("S", 1);
    }
    let consumed = if word.is_any(i + 1, &['C', 'X']) { 2 } else { 1 };
    // French, e.g. "breaux"
    if i == word.last()
        && (word.matches_at(i - 3, &["IAU", "EAU"]) || word.matches_at(i - 2, &["AU", "OU"]))
    {
        return RuleOutcome::silent(consumed);
    }
    RuleOutcome::both("KS", consumed)
}

pub(super) fn rule_z(word: &InputWord, i: isize) -> RuleOutcome {
    // Chinese pinyin, e.g. "zhao"
    if word.is(i + 1, 'H') {
        return RuleOutcome::both("J", 2);
    }
    let consumed = if word.is(i + 1, 'Z') { 2 } else { 1 };
    if word.matches_at(i + 1, &["ZO", "ZI", "ZA"])
        || (word.is_slavo_germanic() && i > 0 && !word.is(i - 1, 'T'))
    {
        return RuleOutcome::split("S", "TS", consumed);
    }
    RuleOutcome::both("S", consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> InputWord {
        InputWord::new(s)
    }

    #[test]
    fn s_special_cases() {
        assert_eq!(rule_s(&w("ISLAND"), 1), RuleOutcome::silent(1));
        assert_eq!(rule_s(&w("CARLYSLE"), 5), RuleOutcome::silent(1));
        assert_eq!(rule_s(&w("SUGAR"), 0), RuleOutcome::split("X", "S", 1));
    }

    #[test]
    fn s_sh() {
        assert_eq!(rule_s(&w("SHOP"), 0), RuleOutcome::both("X", 2));
        assert_eq!(rule_s(&w("RHEINSHEIM"), 5), RuleOutcome::both("S", 2));
    }

    #[test]
    fn s_italian() {
        assert_eq!(rule_s(&w("MISSIONARY"), 3), RuleOutcome::split("S", "X", 3));
        assert_eq!(rule_s(&w("KASIA"), 2), RuleOutcome::both("S", 3));
    }

    #[test]
    fn s_anglicised_and_sz() {
        assert_eq!(rule_s(&w("SMITH"), 0), RuleOutcome::split("S", "X", 1));
        assert_eq!(rule_s(&w("SNIDER"), 0), RuleOutcome::split("S", "X", 1));
        assert_eq!(rule_s(&w("CSZAR"), 1), RuleOutcome::split("S", "X", 2));
    }

    #[test]
    fn sc_family() {
        assert_eq!(rule_s(&w("SCHOOL"), 0), RuleOutcome::both("SK", 3));
        assert_eq!(rule_s(&w("SCHENKER"), 0), RuleOutcome::split("X", "SK", 3));
        assert_eq!(rule_s(&w("SCHMIDT"), 0), RuleOutcome::split("X", "S", 3));
        assert_eq!(rule_s(&w("ESCHEW"), 1), RuleOutcome::both("X", 3));
        assert_eq!(rule_s(&w("SCIENCE"), 0), RuleOutcome::both("S", 3));
        assert_eq!(rule_s(&w("SCOTT"), 0), RuleOutcome::both("SK", 3));
    }

    #[test]
    fn s_final_french_and_plain() {
        assert_eq!(rule_s(&w("ARTOIS"), 5), RuleOutcome::alternate_only("S", 1));
        assert_eq!(rule_s(&w("MASS"), 2), RuleOutcome::both("S", 2));
        assert_eq!(rule_s(&w("BUS"), 2), RuleOutcome::both("S", 1));
    }

    #[test]
    fn x_rules() {
        assert_eq!(rule_x(&w("XENA"), 0), RuleOutcome::both("S", 1));
        assert_eq!(rule_x(&w("MAX"), 2), RuleOutcome::both("KS", 1));
        assert_eq!(rule_x(&w("BREAUX"), 5), RuleOutcome::silent(1));
        assert_eq!(rule_x(&w("EXCEL"), 1), RuleOutcome::both("KS", 2));
    }

    #[test]
    fn z_rules() {
        assert_eq!(rule_z(&w("ZHAO"), 0), RuleOutcome::both("J", 2));
        assert_eq!(rule_z(&w("PIZZA"), 2), RuleOutcome::split("S", "TS", 2));
        assert_eq!(rule_z(&w("ZOO"), 0), RuleOutcome::both("S", 1));
        assert_eq!(rule_z(&w("KOZAK"), 2), RuleOutcome::split("S", "TS", 1));
        assert_eq!(rule_z(&w("FRITZ"), 4), RuleOutcome::both("S", 1));
    }
}
