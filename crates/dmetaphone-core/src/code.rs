// Phonetic code pair returned by the encoder

use std::fmt;

/// The result of encoding one word: a primary code and an alternate code.
///
/// The alternate is empty when the word has no second plausible
/// pronunciation, i.e. when both codes came out identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhoneticCode {
    /// Code for the most likely pronunciation.
    pub primary: String,
    /// Code for a secondary pronunciation, or empty.
    pub alternate: String,
}

impl PhoneticCode {
    /// Build a code pair, clearing the alternate when it equals the primary.
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut alternate = alternate.into();
        if alternate == primary {
            alternate.clear();
        }
        Self { primary, alternate }
    }

    /// True when the word produced a distinct alternate code.
    pub fn has_alternate(&self) -> bool {
        !self.alternate.is_empty()
    }

    /// True when both codes are empty (empty or non-alphabetic input).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.alternate.is_empty()
    }

    /// Iterate over the non-empty codes: the primary, then the alternate
    /// when present.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain(std::iter::once(self.alternate.as_str()))
            .filter(|c| !c.is_empty())
    }

    /// The alternate code, falling back to the primary when there is none.
    pub fn alternate_or_primary(&self) -> &str {
        if self.has_alternate() {
            &self.alternate
        } else {
            &self.primary
        }
    }

    /// Check whether two code pairs share any non-empty code.
    ///
    /// This is the usual "sounds like" test: `SMITH` (`SM0`/`XMT`) matches
    /// `SCHMIDT` (`XMT`/`SMT`) through the shared `XMT`.
    pub fn matches(&self, other: &PhoneticCode) -> bool {
        self.codes().any(|a| other.codes().any(|b| a == b))
    }

    /// Consume the pair into a `(primary, alternate)` tuple.
    pub fn into_tuple(self) -> (String, String) {
        (self.primary, self.alternate)
    }
}

impl From<PhoneticCode> for (String, String) {
    fn from(code: PhoneticCode) -> Self {
        code.into_tuple()
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alternate() {
            write!(f, "{}/{}", self.primary, self.alternate)
        } else {
            f.write_str(&self.primary)
        }
    }
}
