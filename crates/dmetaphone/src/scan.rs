// The scan loop: walk the word left to right, one rule outcome at a time,
// and fold the outcomes into the two code buffers.

use std::ops::ControlFlow;

use dmetaphone_core::{EncoderOptions, PhoneticCode};

use crate::rules::{self, RuleOutcome};
use crate::word::InputWord;

/// Iterator over the rule outcomes of a word, prelude first.
///
/// The cursor only moves forward, by at least one character per item, so
/// the iterator yields at most `word.len()` items.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    word: &'a InputWord,
    cursor: usize,
    prelude_done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(word: &'a InputWord) -> Self {
        Self {
            word,
            cursor: 0,
            prelude_done: false,
        }
    }

    /// Current cursor position, `0..=word.len()`.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn advance(&mut self, outcome: RuleOutcome) -> RuleOutcome {
        log::trace!(
            "{:?} at {}: +{:?}/+{:?}, consumed {}",
            self.word.at(self.cursor as isize),
            self.cursor,
            outcome.primary,
            outcome.alternate,
            outcome.consumed
        );
        self.cursor += outcome.consumed.max(1);
        outcome
    }
}

impl Iterator for Scanner<'_> {
    type Item = RuleOutcome;

    fn next(&mut self) -> Option<RuleOutcome> {
        if !self.prelude_done {
            self.prelude_done = true;
            if let Some(outcome) = rules::prelude(self.word) {
                return Some(self.advance(outcome));
            }
        }
        if self.cursor >= self.word.len() {
            return None;
        }
        let outcome = rules::apply(self.word, self.cursor);
        Some(self.advance(outcome))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.len().saturating_sub(self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

/// The primary and alternate codes under construction.
#[derive(Debug, Clone, Default)]
pub struct CodeBuffer {
    primary: String,
    alternate: String,
    options: EncoderOptions,
}

impl CodeBuffer {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            primary: String::new(),
            alternate: String::new(),
            options,
        }
    }

    /// Append one outcome to both codes.
    ///
    /// Breaks once both codes have reached the configured maximum length.
    pub fn push(mut self, outcome: RuleOutcome) -> ControlFlow<Self, Self> {
        let max = self.options.max_code_len();
        append(&mut self.primary, outcome.primary, max);
        append(&mut self.alternate, outcome.alternate, max);
        if self.is_complete() {
            ControlFlow::Break(self)
        } else {
            ControlFlow::Continue(self)
        }
    }

    /// True when neither code can grow any further.
    pub fn is_complete(&self) -> bool {
        self.options.is_complete(self.primary.len())
            && self.options.is_complete(self.alternate.len())
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    /// Finish the scan, collapsing an alternate identical to the primary.
    pub fn finish(self) -> PhoneticCode {
        PhoneticCode::new(self.primary, self.alternate)
    }
}

// Code fragments are ASCII, so byte truncation is safe.
fn append(code: &mut String, fragment: &str, max: Option<usize>) {
    code.push_str(fragment);
    if let Some(max) = max {
        code.truncate(max);
    }
}

/// Scan `word` and return its codes.
pub fn scan(word: &InputWord, options: EncoderOptions) -> PhoneticCode {
    let buffer = match Scanner::new(word).try_fold(CodeBuffer::new(options), CodeBuffer::push) {
        ControlFlow::Continue(buffer) => buffer,
        ControlFlow::Break(buffer) => {
            log::trace!("both codes complete, stopping early");
            buffer
        }
    };
    buffer.finish()
}
