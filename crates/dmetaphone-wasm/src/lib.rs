// WASM bindings for the Double Metaphone encoder.
//
// Exports free functions for one-off calls and a `WasmEncoder` class that
// keeps its options between calls. Code pairs are serialized to plain
// JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   encode("Smith");                  // => { primary: "SM0", alternate: "XMT" }
//   encode("Wasserman", 4);           // => { primary: "ASRM", alternate: "FSRM" }
//   soundsLike("Smith", "Schmidt");   // => true
//
//   const encoder = new WasmEncoder(4);
//   encoder.encode("Filipowicz");     // => { primary: "FLPT", alternate: "FLPF" }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use dmetaphone::{DoubleMetaphone, EncoderOptions, OptionsError, PhoneticCode, PhoneticEncoder};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a code pair.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCodes {
    primary: String,
    alternate: String,
}

impl From<PhoneticCode> for JsCodes {
    fn from(code: PhoneticCode) -> Self {
        let (primary, alternate) = code.into_tuple();
        JsCodes { primary, alternate }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn options_error_to_js(e: OptionsError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn options(max_code_len: Option<usize>) -> Result<EncoderOptions, OptionsError> {
    match max_code_len {
        Some(len) => EncoderOptions::new().with_max_code_len(len),
        None => Ok(EncoderOptions::new()),
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Encode a word, optionally truncating both codes to `maxCodeLen`.
#[wasm_bindgen]
pub fn encode(word: &str, max_code_len: Option<usize>) -> Result<JsValue, JsError> {
    let options = options(max_code_len).map_err(options_error_to_js)?;
    let codes = JsCodes::from(DoubleMetaphone::with_options(options).encode(word));
    to_js(&codes)
}

/// Check whether two words share a phonetic code.
#[wasm_bindgen(js_name = "soundsLike")]
pub fn sounds_like(a: &str, b: &str) -> bool {
    DoubleMetaphone::new().sounds_like(a, b)
}

// ============================================================================
// WasmEncoder
// ============================================================================

/// Double Metaphone encoder with fixed options.
#[wasm_bindgen]
pub struct WasmEncoder {
    encoder: DoubleMetaphone,
}

#[wasm_bindgen]
impl WasmEncoder {
    /// Create an encoder. `maxCodeLen` truncates codes; omit it for
    /// full-length codes.
    #[wasm_bindgen(constructor)]
    pub fn new(max_code_len: Option<usize>) -> Result<WasmEncoder, JsError> {
        let options = options(max_code_len).map_err(options_error_to_js)?;
        Ok(WasmEncoder {
            encoder: DoubleMetaphone::with_options(options),
        })
    }

    /// Encode a word into `{ primary, alternate }`.
    pub fn encode(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&JsCodes::from(self.encoder.encode(word)))
    }

    /// Primary code only.
    pub fn primary(&self, word: &str) -> String {
        self.encoder.encode(word).primary
    }

    /// Check whether two words share a phonetic code.
    #[wasm_bindgen(js_name = "soundsLike")]
    pub fn sounds_like(&self, a: &str, b: &str) -> bool {
        self.encoder.sounds_like(a, b)
    }

    /// The configured maximum code length, if any.
    #[wasm_bindgen(getter, js_name = "maxCodeLen")]
    pub fn max_code_len(&self) -> Option<usize> {
        self.encoder.options().max_code_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_js_argument() {
        assert_eq!(options(None), Ok(EncoderOptions::new()));
        assert_eq!(options(Some(4)), Ok(EncoderOptions::classic()));
        assert_eq!(options(Some(0)), Err(OptionsError::ZeroMaxCodeLength));
    }

    #[test]
    fn codes_dto() {
        let codes = JsCodes::from(PhoneticCode::new("SM0", "XMT"));
        assert_eq!(codes.primary, "SM0");
        assert_eq!(codes.alternate, "XMT");
    }

    #[test]
    fn sounds_like_free_function() {
        assert!(sounds_like("Smith", "Schmidt"));
        assert!(!sounds_like("Smith", "Jones"));
    }
}
