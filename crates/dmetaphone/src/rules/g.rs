// Rules for G, including GH and GN.

use super::RuleOutcome;
use crate::word::InputWord;

/// Two-letter continuations that make a word-initial G soft in the
/// alternate code ("gesell", "gepard", "gibson").
const SOFT_INITIAL_G: &[&str] = &[
    "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];

pub(super) fn rule_g(word: &InputWord, i: isize) -> RuleOutcome {
    let slavo_germanic = word.is_slavo_germanic();

    if word.is(i + 1, 'H') {
        return rule_gh(word, i);
    }
    if word.is(i + 1, 'N') {
        if i == 1 && word.is_vowel_at(0) && !slavo_germanic {
            return RuleOutcome::split("KN", "N", 2);
        }
        // not e.g. "cagney"
        if !word.matches_at(i + 2, &["EY"]) && !slavo_germanic {
            return RuleOutcome::split("N", "KN", 2);
        }
        return RuleOutcome::both("KN", 2);
    }
    // "tagliaro"
    if word.matches_at(i + 1, &["LI"]) && !slavo_germanic {
        return RuleOutcome::split("KL", "L", 2);
    }
    // -ges-, -gep-, -gel-, -gie- at beginning
    if i == 0 && (word.is(i + 1, 'Y') || word.matches_at(i + 1, SOFT_INITIAL_G)) {
        return RuleOutcome::split("K", "J", 2);
    }
    // -ger-, -gy-
    if (word.matches_at(i + 1, &["ER"]) || word.is(i + 1, 'Y'))
        && !word.starts_with(&["DANGER", "RANGER", "MANGER"])
        && !word.is_any(i - 1, &['E', 'I'])
        && !word.matches_at(i - 1, &["RGY", "OGY"])
    {
        return RuleOutcome::split("K", "J", 2);
    }
    // Italian "biaggi"
    if word.is_any(i + 1, &['E', 'I', 'Y']) || word.matches_at(i - 1, &["AGGI", "OGGI"]) {
        // obvious Germanic
        if word.is_germanic_prefixed() || word.matches_at(i + 1, &["ET"]) {
            return RuleOutcome::both("K", 2);
        }
        // always soft if French ending
        if word.matches_at(i + 1, &["IER"]) {
            return RuleOutcome::both("J", 2);
        }
        return RuleOutcome::split("J", "K", 2);
    }
    if word.is(i + 1, 'G') {
        return RuleOutcome::both("K", 2);
    }
    RuleOutcome::both("K", 1)
}

fn rule_gh(word: &InputWord, i: isize) -> RuleOutcome {
    if i > 0 && !word.is_vowel_at(i - 1) {
        return RuleOutcome::both("K", 2);
    }
    // "ghislane", "ghiradelli"
    if i == 0 {
        if word.is(i + 2, 'I') {
            return RuleOutcome::both("J", 2);
        }
        return RuleOutcome::both("K", 2);
    }
    // Parker's rule (with some further refinements): "hugh", "bough", "broughton"
    if (i > 1 && word.is_any(i - 2, &['B', 'H', 'D']))
        || (i > 2 && word.is_any(i - 3, &['B', 'H', 'D']))
        || (i > 3 && word.is_any(i - 4, &['B', 'H']))
    {
        return RuleOutcome::silent(2);
    }
    // "laugh", "mclaughlin", "cough", "gough", "rough", "tough"
    if i > 2 && word.is(i - 1, 'U') && word.is_any(i - 3, &['C', 'G', 'L', 'R', 'T']) {
        return RuleOutcome::both("F", 2);
    }
    if !word.is(i - 1, 'I') {
        return RuleOutcome::both("K", 2);
    }
    RuleOutcome::silent(2)
}
