// Caller-side text normalization.
//
// The encoder only uppercases its input. Matching accented spellings
// ("Japón", "Birmanía") against plain ones needs diacritics folded first;
// these helpers do that before the word reaches the encoder.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::character::simple_upper;

/// Letters that do not decompose canonically but have a conventional
/// ASCII spelling.
fn fold_special(c: char) -> Option<&'static str> {
    let folded = match c {
        '\u{00DF}' => "ss", // ß
        '\u{1E9E}' => "SS", // ẞ
        '\u{00E6}' => "ae", // æ
        '\u{00C6}' => "AE", // Æ
        '\u{0153}' => "oe", // œ
        '\u{0152}' => "OE", // Œ
        '\u{00F8}' => "o",  // ø
        '\u{00D8}' => "O",  // Ø
        '\u{0111}' => "d",  // đ
        '\u{0110}' => "D",  // Đ
        '\u{0142}' => "l",  // ł
        '\u{0141}' => "L",  // Ł
        '\u{00FE}' => "th", // þ
        '\u{00DE}' => "TH", // Þ
        _ => return None,
    };
    Some(folded)
}

/// Remove diacritics from `text`, keeping case and all other characters.
///
/// Characters are canonically decomposed and combining marks dropped, so
/// `"Japón"` becomes `"Japon"` and `"Ñandú"` becomes `"Nandu"`. A few
/// letters without a decomposition (`ß`, `æ`, `ø`, `œ`, `đ`, `ł`, `þ`)
/// are spelled out.
pub fn fold_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        if let Some(folded) = fold_special(c) {
            out.push_str(folded);
            continue;
        }
        decompose_canonical(c, |d| {
            if !is_combining_mark(d) {
                out.push(d);
            }
        });
    }
    out
}

/// Prepare a word for encoding: trim, fold diacritics, uppercase, and
/// collapse runs of whitespace into a single space.
///
/// Single spaces are kept because several rules look for multi-word
/// prefixes such as `"VAN "` or `"SAN "`.
pub fn normalize_word(text: &str) -> String {
    let folded = fold_diacritics(text.trim());
    let mut out = String::with_capacity(folded.len());
    let mut last_space = false;
    for c in folded.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(simple_upper(c));
            last_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_acute_and_tilde() {
        assert_eq!(fold_diacritics("Japón"), "Japon");
        assert_eq!(fold_diacritics("Birmanía"), "Birmania");
        assert_eq!(fold_diacritics("Ñandú"), "Nandu");
        assert_eq!(fold_diacritics("Curaçao"), "Curacao");
    }

    #[test]
    fn folds_letters_without_decomposition() {
        assert_eq!(fold_diacritics("Straße"), "Strasse");
        assert_eq!(fold_diacritics("Færøerne"), "Faeroerne");
        assert_eq!(fold_diacritics("Łódź"), "Lodz");
    }

    #[test]
    fn keeps_ascii_and_punctuation() {
        assert_eq!(fold_diacritics("O'Brien-Smith 42"), "O'Brien-Smith 42");
        assert_eq!(fold_diacritics(""), "");
    }

    #[test]
    fn normalize_uppercases_and_collapses_whitespace() {
        assert_eq!(normalize_word("  van   der Berg "), "VAN DER BERG");
        assert_eq!(normalize_word("Perú"), "PERU");
        assert_eq!(normalize_word("\tcôte\nd'ivoire"), "COTE D'IVOIRE");
    }

    #[test]
    fn normalize_empty_and_blank() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("   "), "");
    }
}
