//! Internal helpers for input normalization.
//!
//! These utilities are **not** part of the public API.

use unicode_normalization::UnicodeNormalization;

/// Trims and NFC-normalizes a free-text label. Absent text becomes `""`.
pub(crate) fn normalize_description(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .map(|s| s.nfc().collect::<String>())
        .unwrap_or_default()
}
