// The per-letter rule table.
//
// Every rule is a pure function of the word and the cursor position and
// returns a `RuleOutcome`: what to append to each code and how many input
// characters were consumed. Rules never consume zero characters, which is
// what guarantees the scan terminates.

mod c;
mod g;
mod misc;
mod sibilant;

use dmetaphone_core::character::{C_CEDILLA, N_TILDE, SILENT_STARTERS};

use crate::word::InputWord;

/// One transition of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Fragment appended to the primary code (may be empty).
    pub primary: &'static str,
    /// Fragment appended to the alternate code (may be empty).
    pub alternate: &'static str,
    /// Number of input characters consumed, always at least 1.
    pub consumed: usize,
}

impl RuleOutcome {
    /// Same fragment for both codes.
    #[inline]
    pub const fn both(code: &'static str, consumed: usize) -> Self {
        Self {
            primary: code,
            alternate: code,
            consumed,
        }
    }

    /// Different fragments for the primary and alternate codes.
    #[inline]
    pub const fn split(primary: &'static str, alternate: &'static str, consumed: usize) -> Self {
        Self {
            primary,
            alternate,
            consumed,
        }
    }

    /// Nothing emitted.
    #[inline]
    pub const fn silent(consumed: usize) -> Self {
        Self::both("", consumed)
    }

    /// Fragment for the primary code only.
    #[inline]
    pub const fn primary_only(code: &'static str, consumed: usize) -> Self {
        Self::split(code, "", consumed)
    }

    /// Fragment for the alternate code only.
    #[inline]
    pub const fn alternate_only(code: &'static str, consumed: usize) -> Self {
        Self::split("", code, consumed)
    }
}

/// The fixed prelude applied once before the main loop.
///
/// A silent starter (`GN`, `KN`, `PN`, `WR`, `PS`) skips its first letter;
/// a word-initial `X` is pronounced `S`.
pub fn prelude(word: &InputWord) -> Option<RuleOutcome> {
    if word.starts_with(SILENT_STARTERS) {
        return Some(RuleOutcome::silent(1));
    }
    if word.is(0, 'X') {
        return Some(RuleOutcome::both("S", 1));
    }
    None
}

/// Evaluate the rule for the character under the cursor.
///
/// `pos` must be inside the word.
pub fn apply(word: &InputWord, pos: usize) -> RuleOutcome {
    let i = pos as isize;
    let Some(letter) = word.at(i) else {
        return RuleOutcome::silent(1);
    };
    match letter {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => vowel(i),
        'B' => doubled(word, i, "P", 'B'),
        C_CEDILLA => RuleOutcome::both("S", 1),
        'C' => c::rule_c(word, i),
        'D' => misc::rule_d(word, i),
        'F' => doubled(word, i, "F", 'F'),
        'G' => g::rule_g(word, i),
        'H' => misc::rule_h(word, i),
        'J' => misc::rule_j(word, i),
        'K' => doubled(word, i, "K", 'K'),
        'L' => misc::rule_l(word, i),
        'M' => misc::rule_m(word, i),
        'N' => doubled(word, i, "N", 'N'),
        N_TILDE => RuleOutcome::both("N", 1),
        'P' => misc::rule_p(word, i),
        'Q' => doubled(word, i, "K", 'Q'),
        'R' => misc::rule_r(word, i),
        'S' => sibilant::rule_s(word, i),
        'T' => misc::rule_t(word, i),
        'V' => doubled(word, i, "F", 'V'),
        'W' => misc::rule_w(word, i),
        'X' => sibilant::rule_x(word, i),
        'Z' => sibilant::rule_z(word, i),
        _ => RuleOutcome::silent(1),
    }
}

/// Vowels are only coded at the start of the word, always as `A`.
fn vowel(i: isize) -> RuleOutcome {
    if i == 0 {
        RuleOutcome::both("A", 1)
    } else {
        RuleOutcome::silent(1)
    }
}

/// A letter with a fixed code that also swallows an immediate repeat
/// (`BB`, `FF`, `KK`, `NN`, `QQ`, `VV`).
fn doubled(word: &InputWord, i: isize, code: &'static str, repeat: char) -> RuleOutcome {
    let consumed = if word.is(i + 1, repeat) { 2 } else { 1 };
    RuleOutcome::both(code, consumed)
}
