// Letter classification and the phonetic code alphabet

// ---------------------------------------------------------------------------
// Letter sets
// ---------------------------------------------------------------------------

/// Letters treated as vowels by the rule table (uppercase): A E I O U Y
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Symbols that may appear in an emitted code. `0` stands for the "th" sound.
pub const CODE_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', 'Z', '0',
];

/// Two-letter clusters whose first letter is silent at the start of a word.
pub const SILENT_STARTERS: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// LATIN CAPITAL LETTER C WITH CEDILLA, encoded as `S`.
pub const C_CEDILLA: char = '\u{00C7}';

/// LATIN CAPITAL LETTER N WITH TILDE, encoded as `N`.
pub const N_TILDE: char = '\u{00D1}';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is a vowel for phonetic purposes
/// (case-insensitive). `Y` counts as a vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_upper(c))
}

/// Check whether a character belongs to the code alphabet.
pub fn is_code_symbol(c: char) -> bool {
    CODE_ALPHABET.contains(&c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_uppercase produces an iterator because some
// characters map to several; the encoder needs one-to-one mapping so only
// the first character is kept. `ß` therefore stays `ß` here; the
// normalizer expands it before encoding.
// ---------------------------------------------------------------------------

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Uppercase a string character by character, keeping a one-to-one
/// mapping between input and output positions.
pub fn to_upper_chars(s: &str) -> Vec<char> {
    s.chars().map(simple_upper).collect()
}
