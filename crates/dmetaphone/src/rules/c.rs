// Rules for C, including the CH and CC families.

use super::RuleOutcome;
use crate::word::InputWord;

/// Letters after `CH` that keep a hard `K` sound ("school", "christ").
const HARD_CH_FOLLOWERS: &[char] = &['L', 'R', 'N', 'M', 'B', 'H', 'F', 'V', 'W', ' '];

pub(super) fn rule_c(word: &InputWord, i: isize) -> RuleOutcome {
    // Various Germanic: "bacher", "macher"
    if is_germanic_ach(word, i) {
        return RuleOutcome::both("K", 2);
    }
    if i == 0 && word.matches_at(i, &["CAESAR"]) {
        return RuleOutcome::both("S", 2);
    }
    if word.matches_at(i, &["CH"]) {
        return rule_ch(word, i);
    }
    // "czerny", but not Polish "-wicz"
    if word.matches_at(i, &["CZ"]) && !word.matches_at(i - 2, &["WICZ"]) {
        return RuleOutcome::split("S", "X", 2);
    }
    // "focaccia"
    if word.matches_at(i + 1, &["CIA"]) {
        return RuleOutcome::both("X", 3);
    }
    // Double C, but not "McClelland"
    if word.matches_at(i, &["CC"]) && !(i == 1 && word.is(0, 'M')) {
        return rule_cc(word, i);
    }
    if word.matches_at(i, &["CK", "CG", "CQ"]) {
        return RuleOutcome::both("K", 2);
    }
    if word.matches_at(i, &["CI", "CE", "CY"]) {
        // Italian vs. English
        if word.matches_at(i, &["CIO", "CIE", "CIA"]) {
            return RuleOutcome::split("S", "X", 2);
        }
        return RuleOutcome::both("S", 2);
    }

    // "mac caffrey", "mac gregor"
    if word.matches_at(i + 1, &[" C", " Q", " G"]) {
        return RuleOutcome::both("K", 3);
    }
    if word.is_any(i + 1, &['C', 'K', 'Q']) && !word.matches_at(i + 1, &["CE", "CI"]) {
        return RuleOutcome::both("K", 2);
    }
    RuleOutcome::both("K", 1)
}

/// `-ACH-` after a consonant, not followed by I or E (except in "bacher" /
/// "macher"), and the special "chia".
fn is_germanic_ach(word: &InputWord, i: isize) -> bool {
    if word.matches_at(i, &["CHIA"]) {
        return true;
    }
    if i <= 1 || word.is_vowel_at(i - 2) || !word.matches_at(i - 1, &["ACH"]) {
        return false;
    }
    !word.is_any(i + 2, &['I', 'E']) || word.matches_at(i - 2, &["BACHER", "MACHER"])
}

fn rule_ch(word: &InputWord, i: isize) -> RuleOutcome {
    // "michael"
    if i > 0 && word.matches_at(i, &["CHAE"]) {
        return RuleOutcome::split("K", "X", 2);
    }
    // Greek roots: "chemistry", "chorus"
    if is_greek_initial_ch(word, i) {
        return RuleOutcome::both("K", 2);
    }
    // Germanic, Greek, or otherwise 'ch' for 'kh' sound
    if is_hard_ch(word, i) {
        return RuleOutcome::both("K", 2);
    }
    if i == 0 {
        return RuleOutcome::both("X", 2);
    }
    // "mchugh"
    if word.starts_with(&["MC"]) {
        return RuleOutcome::both("K", 2);
    }
    RuleOutcome::split("X", "K", 2)
}

fn is_greek_initial_ch(word: &InputWord, i: isize) -> bool {
    i == 0
        && (word.matches_at(i + 1, &["HARAC", "HARIS"])
            || word.matches_at(i + 1, &["HOR", "HYM", "HIA", "HEM"]))
        && !word.starts_with(&["CHORE"])
}

fn is_hard_ch(word: &InputWord, i: isize) -> bool {
    word.is_germanic_prefixed()
        // "orchestra", "architect", but not "arch", "orchid"
        || word.matches_at(i - 2, &["ORCHES", "ARCHIT", "ORCHID"])
        || word.is_any(i + 2, &['T', 'S'])
        // "wachtler", "wechsler", but not "tichner"
        || ((i == 0 || word.is_any(i - 1, &['A', 'O', 'U', 'E']))
            && (word.is_any(i + 2, HARD_CH_FOLLOWERS) || i + 1 == word.last()))
}

fn rule_cc(word: &InputWord, i: isize) -> RuleOutcome {
    // "bellocchio", but not "bacchus"
    if word.is_any(i + 2, &['I', 'E', 'H']) && !word.matches_at(i + 2, &["HU"]) {
        // "accident", "accede", "succeed"
        if (i == 1 && word.is(i - 1, 'A')) || word.matches_at(i - 1, &["UCCEE", "UCCES"]) {
            return RuleOutcome::both("KS", 3);
        }
        // "bacci", "bertucci", other Italian
        return RuleOutcome::both("X", 3);
    }
    // Pierce's rule
    RuleOutcome::both("K", 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(word: &str, pos: isize) -> RuleOutcome {
        rule_c(&InputWord::new(word), pos)
    }

    #[test]
    fn germanic_ach() {
        assert_eq!(at("BACHER", 2), RuleOutcome::both("K", 2));
        assert_eq!(at("CHIANTI", 0), RuleOutcome::both("K", 2));
    }

    #[test]
    fn caesar() {
        assert_eq!(at("CAESAR", 0), RuleOutcome::both("S", 2));
    }

    #[test]
    fn ch_variants() {
        assert_eq!(at("MICHAEL", 2), RuleOutcome::split("K", "X", 2));
        assert_eq!(at("CHORUS", 0), RuleOutcome::both("K", 2));
        assert_eq!(at("CHURCH", 0), RuleOutcome::both("X", 2));
        assert_eq!(at("CHURCH", 4), RuleOutcome::split("X", "K", 2));
        assert_eq!(at("ORCHESTRA", 2), RuleOutcome::both("K", 2));
        assert_eq!(at("MCHUGH", 1), RuleOutcome::both("K", 2));
    }

    #[test]
    fn cz_and_cia() {
        assert_eq!(at("CZERNY", 0), RuleOutcome::split("S", "X", 2));
        assert_eq!(at("FOCACCIA", 4), RuleOutcome::both("X", 3));
    }

    #[test]
    fn double_c() {
        assert_eq!(at("ACCIDENT", 1), RuleOutcome::both("KS", 3));
        assert_eq!(at("BACCI", 2), RuleOutcome::both("X", 3));
        assert_eq!(at("BACCHUS", 2), RuleOutcome::both("K", 2));
        // no double-C rule right after a leading M
        assert_eq!(at("MCCLELLAND", 1), RuleOutcome::both("K", 2));
    }

    #[test]
    fn soft_c() {
        assert_eq!(at("CICERO", 0), RuleOutcome::both("S", 2));
        assert_eq!(at("CIAO", 0), RuleOutcome::split("S", "X", 2));
    }

    #[test]
    fn hard_c() {
        assert_eq!(at("CAT", 0), RuleOutcome::both("K", 1));
        assert_eq!(at("JACK", 2), RuleOutcome::both("K", 2));
        assert_eq!(at("MAC GREGOR", 2), RuleOutcome::both("K", 3));
    }
}
