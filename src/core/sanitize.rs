// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// NFC, then trim the ends. Composes `е` + U+0308 into `ё` so suffix
/// checks see one code point per letter. Inner whitespace is kept as is.
pub fn normalize_name(s: &str) -> String {
    let nfc: String = s.nfc().collect();
    nfc.trim().to_string()
}
