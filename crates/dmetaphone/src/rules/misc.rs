// Rules for D, H, J, L, M, P, R, T and W.

use super::RuleOutcome;
use crate::word::InputWord;

/// Letters before which a medial `J` is silent.
const J_SILENT_BEFORE: &[char] = &['L', 'T', 'K', 'S', 'N', 'M', 'B', 'Z'];

pub(super) fn rule_d(word: &InputWord, i: isize) -> RuleOutcome {
    if word.matches_at(i, &["DG"]) {
        // "edge"
        if word.is_any(i + 2, &['I', 'E', 'Y']) {
            return RuleOutcome::both("J", 3);
        }
        // "edgar"
        return RuleOutcome::both("TK", 2);
    }
    if word.matches_at(i, &["DT", "DD"]) {
        return RuleOutcome::both("T", 2);
    }
    RuleOutcome::both("T", 1)
}

/// H is only kept when it starts the word or follows a vowel, and is
/// itself followed by a vowel.
pub(super) fn rule_h(word: &InputWord, i: isize) -> RuleOutcome {
    if (i == 0 || word.is_vowel_at(i - 1)) && word.is_vowel_at(i + 1) {
        return RuleOutcome::both("H", 2);
    }
    RuleOutcome::silent(1)
}

pub(super) fn rule_j(word: &InputWord, i: isize) -> RuleOutcome {
    // obvious Spanish: "jose", "san jacinto"
    if word.matches_at(i, &["JOSE"]) || word.starts_with(&["SAN "]) {
        if (i == 0 && word.is(i + 4, ' ')) || word.len() == 4 || word.starts_with(&["SAN "]) {
            return RuleOutcome::both("H", 1);
        }
        return RuleOutcome::split("J", "H", 1);
    }

    let consumed = if word.is(i + 1, 'J') { 2 } else { 1 };
    if i == 0 {
        // "yankelovich" / "jankelowicz"
        return RuleOutcome::split("J", "A", consumed);
    }
    // Spanish pronunciation of e.g. "bajador"
    if word.is_vowel_at(i - 1)
        && !word.is_slavo_germanic()
        && word.is_any(i + 1, &['A', 'O'])
    {
        return RuleOutcome::split("J", "H", consumed);
    }
    if i == word.last() {
        return RuleOutcome::primary_only("J", consumed);
    }
    if !word.is_any(i + 1, J_SILENT_BEFORE) && !word.is_any(i - 1, &['S', 'K', 'L']) {
        return RuleOutcome::both("J", consumed);
    }
    RuleOutcome::silent(consumed)
}

pub(super) fn rule_l(word: &InputWord, i: isize) -> RuleOutcome {
    if !word.is(i + 1, 'L') {
        return RuleOutcome::both("L", 1);
    }
    // Spanish "cabrillo", "gallegos"
    if is_spanish_ll(word, i) {
        return RuleOutcome::primary_only("L", 2);
    }
    RuleOutcome::both("L", 2)
}

fn is_spanish_ll(word: &InputWord, i: isize) -> bool {
    let n = word.len() as isize;
    if i == n - 3 && word.matches_at(i - 1, &["ILLO", "ILLA", "ALLE"]) {
        return true;
    }
    (word.matches_at(n - 2, &["AS", "OS"]) || word.is_any(n - 1, &['A', 'O']))
        && word.matches_at(i - 1, &["ALLE"])
}

/// M also swallows a following M, and the B of a final "-UMB" or "-UMBER"
/// ("dumb", "thumb", "plumber").
pub(super) fn rule_m(word: &InputWord, i: isize) -> RuleOutcome {
    let silent_b = word.matches_at(i - 1, &["UMB"])
        && (i + 1 == word.last() || word.matches_at(i + 2, &["ER"]));
    if word.is(i + 1, 'M') || silent_b {
        return RuleOutcome::both("M", 2);
    }
    RuleOutcome::both("M", 1)
}

pub(super) fn rule_p(word: &InputWord, i: isize) -> RuleOutcome {
    if word.is(i + 1, 'H') {
        return RuleOutcome::both("F", 2);
    }
    // also account for "campbell", "raspberry"
    if word.is_any(i + 1, &['P', 'B']) {
        return RuleOutcome::both("P", 2);
    }
    RuleOutcome::both("P", 1)
}

pub(super) fn rule_r(word: &InputWord, i: isize) -> RuleOutcome {
    let consumed = if word.is(i + 1, 'R') { 2 } else { 1 };
    // French "rogier", but exclude "hochmeier"
    if i == word.last()
        && !word.is_slavo_germanic()
        && word.matches_at(i - 2, &["IE"])
        && !word.matches_at(i - 4, &["ME", "MA"])
    {
        return RuleOutcome::alternate_only("R", consumed);
    }
    RuleOutcome::both("R", consumed)
}

pub(super) fn rule_t(word: &InputWord, i: isize) -> RuleOutcome {
    if word.matches_at(i, &["TION", "TIA", "TCH"]) {
        return RuleOutcome::both("X", 3);
    }
    if word.matches_at(i, &["TH", "TTH"]) {
        // special case "thomas", "thames" or Germanic
        if word.matches_at(i + 2, &["OM", "AM"]) || word.is_germanic_prefixed() {
            return RuleOutcome::both("T", 2);
        }
        return RuleOutcome::split("0", "T", 2);
    }
    if word.is_any(i + 1, &['T', 'D']) {
        return RuleOutcome::both("T", 2);
    }
    RuleOutcome::both("T", 1)
}

pub(super) fn rule_w(word: &InputWord, i: isize) -> RuleOutcome {
    // can also be in the middle of a word
    if word.matches_at(i, &["WR"]) {
        return RuleOutcome::both("R", 2);
    }
    if i == 0 && (word.is_vowel_at(i + 1) || word.matches_at(i, &["WH"])) {
        // "Wasserman" should match "Vasserman"
        if word.is_vowel_at(i + 1) {
            return RuleOutcome::split("A", "F", 1);
        }
        // need "Uomo" to match "Womo"
        return RuleOutcome::both("A", 1);
    }
    // "Arnow" should match "Arnoff"
    if (i == word.last() && word.is_vowel_at(i - 1))
        || word.matches_at(i - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || word.starts_with(&["SCH"])
    {
        return RuleOutcome::alternate_only("F", 1);
    }
    // Polish, e.g. "filipowicz"
    if word.matches_at(i, &["WICZ", "WITZ"]) {
        return RuleOutcome::split("TS", "FX", 4);
    }
    RuleOutcome::silent(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> InputWord {
        InputWord::new(s)
    }

    #[test]
    fn d_rules() {
        assert_eq!(rule_d(&w("EDGE"), 1), RuleOutcome::both("J", 3));
        assert_eq!(rule_d(&w("EDGAR"), 1), RuleOutcome::both("TK", 2));
        assert_eq!(rule_d(&w("ADD"), 1), RuleOutcome::both("T", 2));
        assert_eq!(rule_d(&w("DOG"), 0), RuleOutcome::both("T", 1));
    }

    #[test]
    fn h_rules() {
        assert_eq!(rule_h(&w("HOPE"), 0), RuleOutcome::both("H", 2));
        assert_eq!(rule_h(&w("AHA"), 1), RuleOutcome::both("H", 2));
        assert_eq!(rule_h(&w("JOHN"), 2), RuleOutcome::silent(1));
        assert_eq!(rule_h(&w("AH"), 1), RuleOutcome::silent(1));
    }

    #[test]
    fn j_spanish() {
        assert_eq!(rule_j(&w("JOSE"), 0), RuleOutcome::both("H", 1));
        assert_eq!(rule_j(&w("JOSE MARIA"), 0), RuleOutcome::both("H", 1));
        assert_eq!(rule_j(&w("SAN JACINTO"), 4), RuleOutcome::both("H", 1));
        assert_eq!(rule_j(&w("JOSEPH"), 0), RuleOutcome::split("J", "H", 1));
    }

    #[test]
    fn j_positions() {
        assert_eq!(rule_j(&w("JONES"), 0), RuleOutcome::split("J", "A", 1));
        assert_eq!(rule_j(&w("BAJADOR"), 2), RuleOutcome::split("J", "H", 1));
        assert_eq!(rule_j(&w("HADJ"), 3), RuleOutcome::primary_only("J", 1));
        assert_eq!(rule_j(&w("BENJAMIN"), 3), RuleOutcome::both("J", 1));
        assert_eq!(rule_j(&w("HAJJI"), 2), RuleOutcome::both("J", 2));
        assert_eq!(rule_j(&w("SKJOLD"), 2), RuleOutcome::silent(1));
    }

    #[test]
    fn l_rules() {
        assert_eq!(rule_l(&w("CABRILLO"), 5), RuleOutcome::primary_only("L", 2));
        assert_eq!(rule_l(&w("GALLEGOS"), 2), RuleOutcome::primary_only("L", 2));
        assert_eq!(rule_l(&w("BELL"), 2), RuleOutcome::both("L", 2));
        assert_eq!(rule_l(&w("LOLA"), 0), RuleOutcome::both("L", 1));
    }

    #[test]
    fn m_rules() {
        assert_eq!(rule_m(&w("DUMB"), 2), RuleOutcome::both("M", 2));
        assert_eq!(rule_m(&w("PLUMBER"), 3), RuleOutcome::both("M", 2));
        assert_eq!(rule_m(&w("HAMMER"), 2), RuleOutcome::both("M", 2));
        assert_eq!(rule_m(&w("NUMBED"), 2), RuleOutcome::both("M", 1));
    }

    #[test]
    fn p_rules() {
        assert_eq!(rule_p(&w("PHONE"), 0), RuleOutcome::both("F", 2));
        assert_eq!(rule_p(&w("CAMPBELL"), 3), RuleOutcome::both("P", 2));
        assert_eq!(rule_p(&w("PAUL"), 0), RuleOutcome::both("P", 1));
    }

    #[test]
    fn r_rules() {
        assert_eq!(rule_r(&w("ROGIER"), 5), RuleOutcome::alternate_only("R", 1));
        assert_eq!(rule_r(&w("HOCHMEIER"), 8), RuleOutcome::both("R", 1));
        assert_eq!(rule_r(&w("BARRY"), 2), RuleOutcome::both("R", 2));
    }

    #[test]
    fn t_rules() {
        assert_eq!(rule_t(&w("NATION"), 2), RuleOutcome::both("X", 3));
        assert_eq!(rule_t(&w("BUTCHER"), 2), RuleOutcome::both("X", 3));
        assert_eq!(rule_t(&w("THOMAS"), 0), RuleOutcome::both("T", 2));
        assert_eq!(rule_t(&w("SMITH"), 3), RuleOutcome::split("0", "T", 2));
        assert_eq!(rule_t(&w("MATT"), 2), RuleOutcome::both("T", 2));
    }

    #[test]
    fn w_rules() {
        assert_eq!(rule_w(&w("WRECK"), 0), RuleOutcome::both("R", 2));
        assert_eq!(rule_w(&w("WASSERMAN"), 0), RuleOutcome::split("A", "F", 1));
        assert_eq!(rule_w(&w("WHITE"), 0), RuleOutcome::both("A", 1));
        assert_eq!(rule_w(&w("ARNOW"), 4), RuleOutcome::alternate_only("F", 1));
        assert_eq!(rule_w(&w("FILIPOWICZ"), 6), RuleOutcome::split("TS", "FX", 4));
        assert_eq!(rule_w(&w("BOWL"), 2), RuleOutcome::silent(1));
    }
}
