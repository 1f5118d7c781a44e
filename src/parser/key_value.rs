//! Key/value block parser
//!
//! Issue templates carry merchant details as a short YAML-looking list:
//!
//! ```text
//! - url: https://example.com
//! - btc: true
//! - bch: false
//! ```
//!
//! This is deliberately not a YAML parser. Each line is read on its own as
//! `key: value`, optionally prefixed with list dashes. Lines that don't fit
//! are skipped, unknown keys are ignored, and a key that repeats overwrites
//! the earlier value.

use crate::models::MerchantDetails;

/// A value that could not be coerced to its field's type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {expected}")]
pub struct InvalidValue {
    pub value: String,
    pub expected: &'static str,
}

/// Writes a coerced value into its target field
pub type FieldSetter = fn(&mut MerchantDetails, &str) -> Result<(), InvalidValue>;

/// A recognized key and how to apply it
#[derive(Clone, Copy)]
pub struct KeyBinding {
    /// Key as written in the block
    pub key: &'static str,
    /// Name of the `MerchantDetails` field it sets
    pub field: &'static str,
    pub apply: FieldSetter,
}

/// Recognized keys. New keys are added here and nowhere else.
pub static KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "url",
        field: "url",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.url = v.to_string();
            Ok(())
        },
    },
    KeyBinding {
        key: "img",
        field: "image_url",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.image_url = v.to_string();
            Ok(())
        },
    },
    KeyBinding {
        key: "facebook",
        field: "facebook_handle",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.facebook_handle = v.to_string();
            Ok(())
        },
    },
    KeyBinding {
        key: "email_address",
        field: "email_address",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.email_address = v.to_string();
            Ok(())
        },
    },
    KeyBinding {
        key: "bch",
        field: "accepts_bch",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.accepts_bch = coerce_bool(v)?;
            Ok(())
        },
    },
    KeyBinding {
        key: "btc",
        field: "accepts_btc",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.accepts_btc = coerce_bool(v)?;
            Ok(())
        },
    },
    KeyBinding {
        key: "othercrypto",
        field: "accepts_other_crypto",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.accepts_other_crypto = coerce_bool(v)?;
            Ok(())
        },
    },
    KeyBinding {
        key: "doc",
        field: "document",
        apply: |d: &mut MerchantDetails, v: &str| {
            d.document = v.to_string();
            Ok(())
        },
    },
];

/// Look up the binding for a key (exact, case-sensitive)
pub fn binding_for(key: &str) -> Option<&'static KeyBinding> {
    KEY_BINDINGS.iter().find(|binding| binding.key == key)
}

/// Parse `true`/`false`, ignoring ASCII case
pub fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn coerce_bool(value: &str) -> Result<bool, InvalidValue> {
    parse_bool(value).ok_or_else(|| InvalidValue {
        value: value.to_string(),
        expected: "boolean",
    })
}

/// Why a line contributed nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No `:` on the line
    MissingSeparator,
    /// Recognized key, value of the wrong shape
    InvalidValue { key: String, error: InvalidValue },
}

/// A skipped line, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// What a block parse did to the record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSummary {
    /// Number of recognized key lines written to the record
    pub applied: usize,
    /// Keys with no binding, in order of appearance
    pub ignored_keys: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Split a line into `(key, value)`
///
/// Leading whitespace, list dashes and the whitespace after them are
/// dropped. Returns `None` when there is no `:` separator.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start().trim_start_matches('-').trim_start();
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Apply every `key: value` line of `block` to `details`, top to bottom
///
/// Never fails. Blank lines are passed over; malformed lines and bad values
/// are reported in the returned summary and leave `details` untouched.
pub fn parse_block(block: &str, details: &mut MerchantDetails) -> BlockSummary {
    let mut summary = BlockSummary::default();

    for (idx, line) in block.lines().enumerate() {
        if line.trim().trim_start_matches('-').trim().is_empty() {
            continue;
        }

        let Some((key, value)) = split_line(line) else {
            tracing::debug!(line_number = idx + 1, line, "Skipping line without ':'");
            summary.skipped.push(SkippedLine {
                line_number: idx + 1,
                line: line.to_string(),
                reason: SkipReason::MissingSeparator,
            });
            continue;
        };

        let Some(binding) = binding_for(key) else {
            tracing::trace!(key, "Ignoring unrecognized key");
            summary.ignored_keys.push(key.to_string());
            continue;
        };

        match (binding.apply)(details, value) {
            Ok(()) => summary.applied += 1,
            Err(error) => {
                tracing::debug!(key, %error, "Skipping invalid value");
                summary.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason: SkipReason::InvalidValue {
                        key: key.to_string(),
                        error,
                    },
                });
            }
        }
    }

    summary
}
