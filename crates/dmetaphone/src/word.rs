// InputWord: the uppercased letters being scanned, with the positional
// predicates the rule table is written in terms of.
//
// Positions are `isize` so rules can look behind the cursor with plain
// arithmetic (`i - 2`); any position outside the word simply fails to
// match.

use dmetaphone_core::character::{is_vowel, to_upper_chars};

/// An uppercased word, immutable for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputWord {
    letters: Vec<char>,
    slavo_germanic: bool,
}

impl InputWord {
    /// Build an input word from caller text: surrounding whitespace is
    /// trimmed and each character uppercased one-to-one.
    pub fn new(text: &str) -> Self {
        let letters = to_upper_chars(text.trim());
        let slavo_germanic = detect_slavo_germanic(&letters);
        Self {
            letters,
            slavo_germanic,
        }
    }

    /// Number of characters in the word.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Index of the last character (`-1` for an empty word).
    #[inline]
    pub fn last(&self) -> isize {
        self.letters.len() as isize - 1
    }

    /// True when the word looks Slavic or Germanic in origin: it contains
    /// `W`, `K`, `CZ` or `WITZ`. Several rules pick a different
    /// pronunciation for such words.
    #[inline]
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }

    /// Character at `pos`, or `None` outside the word.
    #[inline]
    pub fn at(&self, pos: isize) -> Option<char> {
        if pos < 0 {
            return None;
        }
        self.letters.get(pos as usize).copied()
    }

    /// Check whether the character at `pos` is `c`.
    #[inline]
    pub fn is(&self, pos: isize, c: char) -> bool {
        self.at(pos) == Some(c)
    }

    /// Check whether the character at `pos` is one of `set`.
    #[inline]
    pub fn is_any(&self, pos: isize, set: &[char]) -> bool {
        self.at(pos).is_some_and(|c| set.contains(&c))
    }

    /// Check whether the character at `pos` is a vowel.
    #[inline]
    pub fn is_vowel_at(&self, pos: isize) -> bool {
        self.at(pos).is_some_and(is_vowel)
    }

    /// Check whether any of `patterns` occurs starting exactly at `start`.
    ///
    /// A pattern that would begin before the word or run past its end never
    /// matches.
    pub fn matches_at(&self, start: isize, patterns: &[&str]) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;
        patterns.iter().any(|pattern| {
            let len = pattern.chars().count();
            start + len <= self.letters.len()
                && self.letters[start..start + len]
                    .iter()
                    .copied()
                    .eq(pattern.chars())
        })
    }

    /// Check whether the word begins with any of `patterns`.
    #[inline]
    pub fn starts_with(&self, patterns: &[&str]) -> bool {
        self.matches_at(0, patterns)
    }

    /// Check whether the word begins with a Germanic marker: `VAN `, `VON `
    /// or `SCH`.
    #[inline]
    pub fn is_germanic_prefixed(&self) -> bool {
        self.starts_with(&["VAN ", "VON ", "SCH"])
    }
}

fn detect_slavo_germanic(letters: &[char]) -> bool {
    letters.iter().any(|&c| c == 'W' || c == 'K')
        || letters.windows(2).any(|w| w == ['C', 'Z'])
}
