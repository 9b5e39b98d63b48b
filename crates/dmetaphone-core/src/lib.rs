//! Shared types and utilities for the Double Metaphone encoder.
//!
//! - [`character`] -- Letter classification and the phonetic code alphabet
//! - [`code`] -- The `PhoneticCode` result pair
//! - [`normalize`] -- Caller-side text normalization (diacritic folding)
//! - [`options`] -- Encoder configuration

pub mod character;
pub mod code;
pub mod normalize;
pub mod options;

pub use code::PhoneticCode;
pub use options::{EncoderOptions, OptionsError};
