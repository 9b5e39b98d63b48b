// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// dmetaphone-ffi: C-compatible FFI layer for the Double Metaphone encoder.
//
// Memory management rules:
// - `DmetaphoneCodes` returned by `dmetaphone_encode` owns two heap strings;
//   free it with `dmetaphone_free_codes`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use dmetaphone::{DoubleMetaphone, EncoderOptions, PhoneticEncoder};

// ── Encoding ────────────────────────────────────────────────────

/// Primary and alternate codes of one word.
///
/// Both fields are NULL when encoding failed. An absent alternate is an
/// empty string, not NULL.
#[repr(C)]
pub struct DmetaphoneCodes {
    pub primary: *mut c_char,
    pub alternate: *mut c_char,
}

impl DmetaphoneCodes {
    fn null() -> Self {
        Self {
            primary: ptr::null_mut(),
            alternate: ptr::null_mut(),
        }
    }
}

/// Encode a word.
///
/// `max_code_len` limits both codes to that many characters; pass 0 for
/// full-length codes. Returns codes that the caller must free with
/// `dmetaphone_free_codes`, or NULL fields if `word` is NULL or not UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dmetaphone_encode(
    word: *const c_char,
    max_code_len: usize,
) -> DmetaphoneCodes {
    let Some(word) = cstr_to_str(word) else {
        return DmetaphoneCodes::null();
    };
    let code = encoder(max_code_len).encode(word);
    DmetaphoneCodes {
        primary: str_to_c(&code.primary),
        alternate: str_to_c(&code.alternate),
    }
}

/// Free codes returned by `dmetaphone_encode`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dmetaphone_free_codes(codes: DmetaphoneCodes) {
    free_c_str(codes.primary);
    free_c_str(codes.alternate);
}

/// Check whether two words share a phonetic code.
/// Returns 1 when they do, 0 when they don't, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dmetaphone_sounds_like(
    a: *const c_char,
    b: *const c_char,
    max_code_len: usize,
) -> c_int {
    let (Some(a), Some(b)) = (cstr_to_str(a), cstr_to_str(b)) else {
        return -1;
    };
    if encoder(max_code_len).sounds_like(a, b) { 1 } else { 0 }
}

// ── Internal helpers ────────────────────────────────────────────

fn encoder(max_code_len: usize) -> DoubleMetaphone {
    let options = EncoderOptions::new()
        .with_max_code_len(max_code_len)
        .unwrap_or_default();
    DoubleMetaphone::with_options(options)
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
