//! Double Metaphone phonetic encoder.
//!
//! Converts a word into a primary and an alternate phonetic code so that
//! words which sound alike ("Smith" / "Schmidt", "Birmania" / "Birmanya")
//! can be matched despite different spellings.
//!
//! - [`word`] -- The uppercased input word and its positional predicates
//! - [`rules`] -- The per-letter rule table
//! - [`scan`] -- The scan loop folding rule outcomes into codes
//!
//! ```
//! assert_eq!(dmetaphone::encode("Smith"), ("SM0".to_string(), "XMT".to_string()));
//! ```

pub mod rules;
pub mod scan;
pub mod word;

pub use dmetaphone_core::{EncoderOptions, OptionsError, PhoneticCode};

use word::InputWord;

/// Anything that maps a word to a [`PhoneticCode`].
pub trait PhoneticEncoder {
    /// Encode one word.
    fn encode_code(&self, word: &str) -> PhoneticCode;

    /// Check whether two words share a phonetic code.
    fn sounds_like(&self, a: &str, b: &str) -> bool {
        self.encode_code(a).matches(&self.encode_code(b))
    }
}

/// The Double Metaphone encoder.
///
/// Holds only its options, so it is cheap to copy and safe to share
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleMetaphone {
    options: EncoderOptions,
}

impl DoubleMetaphone {
    /// Encoder producing full-length codes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Encode `word`.
    ///
    /// Never fails: letters are uppercased, characters without a rule are
    /// skipped, and empty input gives two empty codes.
    pub fn encode(&self, word: &str) -> PhoneticCode {
        let input = InputWord::new(word);
        let code = scan::scan(&input, self.options);
        log::debug!("encoded {word:?} as {code}");
        code
    }
}

impl PhoneticEncoder for DoubleMetaphone {
    fn encode_code(&self, word: &str) -> PhoneticCode {
        self.encode(word)
    }
}

/// Encode `word` with default options, returning `(primary, alternate)`.
///
/// The alternate is empty when it would equal the primary.
pub fn encode(word: &str) -> (String, String) {
    DoubleMetaphone::new().encode(word).into_tuple()
}
