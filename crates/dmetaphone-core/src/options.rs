// Encoder configuration

/// Length of codes produced in classic mode.
pub const CLASSIC_CODE_LEN: usize = 4;

/// Error type for invalid encoder options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("maximum code length must be at least 1")]
    ZeroMaxCodeLength,
}

/// Options controlling the shape of emitted codes.
///
/// Built only through [`EncoderOptions::new`], [`EncoderOptions::classic`]
/// and the validating [`EncoderOptions::with_max_code_len`], so a zero
/// length can never reach the encoder:
///
/// ```compile_fail
/// use dmetaphone_core::EncoderOptions;
///
/// let opts = EncoderOptions { max_code_len: Some(0) };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    // `None` keeps full-length codes; `Some(n)` has `n >= 1`.
    max_code_len: Option<usize>,
}

impl EncoderOptions {
    /// Options for full-length codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the classic four-character codes.
    pub fn classic() -> Self {
        Self {
            max_code_len: Some(CLASSIC_CODE_LEN),
        }
    }

    /// Limit both codes to `len` characters.
    pub fn with_max_code_len(mut self, len: usize) -> Result<Self, OptionsError> {
        if len == 0 {
            return Err(OptionsError::ZeroMaxCodeLength);
        }
        self.max_code_len = Some(len);
        Ok(self)
    }

    /// Maximum length of each code, or `None` for full-length codes.
    ///
    /// When set, both codes are truncated to this length and scanning
    /// stops as soon as both have reached it.
    #[inline]
    pub fn max_code_len(&self) -> Option<usize> {
        self.max_code_len
    }

    /// Check whether a code of `len` characters has reached the limit.
    #[inline]
    pub fn is_complete(&self, len: usize) -> bool {
        self.max_code_len.is_some_and(|max| len >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let opts = EncoderOptions::default();
        assert_eq!(opts.max_code_len(), None);
        assert!(!opts.is_complete(1_000));
    }

    #[test]
    fn classic_is_four() {
        let opts = EncoderOptions::classic();
        assert_eq!(opts.max_code_len(), Some(4));
        assert!(!opts.is_complete(3));
        assert!(opts.is_complete(4));
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(
            EncoderOptions::new().with_max_code_len(0),
            Err(OptionsError::ZeroMaxCodeLength)
        );
        assert_eq!(
            EncoderOptions::new().with_max_code_len(6).map(|o| o.max_code_len()),
            Ok(Some(6))
        );
    }

    #[test]
    fn rejected_length_leaves_options_unchanged() {
        let classic = EncoderOptions::classic();
        assert!(classic.with_max_code_len(0).is_err());
        assert_eq!(classic.max_code_len(), Some(CLASSIC_CODE_LEN));
    }

    #[test]
    fn every_constructor_yields_a_usable_length() {
        let built = [
            EncoderOptions::default(),
            EncoderOptions::new(),
            EncoderOptions::classic(),
            EncoderOptions::new().with_max_code_len(1).unwrap(),
            EncoderOptions::classic().with_max_code_len(12).unwrap(),
        ];
        for opts in built {
            assert_ne!(opts.max_code_len(), Some(0), "{opts:?}");
            assert!(!opts.is_complete(0), "{opts:?}");
        }
    }
}
