//! # Storuri Type Coercion
//!
//! Converts the textual parameter values found in storage URIs into typed
//! values: integers with boolean-token recognition, byte sizes with unit
//! suffixes, comma-delimited tuples, and floats.
//!
//! [`SuffixMultiplier`] is the generic suffix-table primitive; all
//! configured suffixes must share one character length. The byte-size
//! table (`kb`/`mb`/`gb`) is built on top of it as a process-wide value.

pub mod error;


use std::collections::HashMap;
use std::sync::LazyLock;

pub use error::DatatypeError;

/// Tokens recognized as boolean true before integer parsing kicks in.
pub const TRUE_TOKENS: &[&str] = &["1", "on", "true", "t", "yes"];
/// Tokens recognized as boolean false.
pub const FALSE_TOKENS: &[&str] = &["", "0", "off", "false", "f", "no"];

/// Converts integer-like strings with size suffixes to integers.
///
/// The table maps suffixes to integer multipliers; `default` is the
/// multiplier when no suffix matches. Matches are case insensitive and all
/// suffix keys must share the same length. Returned values are in the
/// fundamental unit.
#[derive(Debug, Clone)]
pub struct SuffixMultiplier {
    table: HashMap<String, i64>,
    default: i64,
    key_len: usize,
}

impl SuffixMultiplier {
    /// Build a multiplier from a suffix table.
    ///
    /// Fails with [`DatatypeError::SuffixLengthMismatch`] when the
    /// configured suffixes do not all share one length.
    pub fn new<I, S>(table: I, default: i64) -> Result<Self, DatatypeError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let table: HashMap<String, i64> = table
            .into_iter()
            .map(|(key, value)| (key.into().to_lowercase(), value))
            .collect();

        let mut lengths: Vec<usize> = table.keys().map(|key| key.len()).collect();
        lengths.sort_unstable();
        lengths.dedup();
        if lengths.len() > 1 {
            let mut suffixes: Vec<String> = table.keys().cloned().collect();
            suffixes.sort();
            return Err(DatatypeError::SuffixLengthMismatch { suffixes });
        }

        let key_len = lengths.first().copied().unwrap_or(0);
        Ok(Self {
            table,
            default,
            key_len,
        })
    }

    /// Convert `text` to an integer in the fundamental unit.
    ///
    /// When the last `key_len` characters match a configured suffix, the
    /// remainder is parsed and multiplied; otherwise the whole string is
    /// parsed with the default multiplier. Whitespace around the digits
    /// and the unit is tolerated.
    pub fn convert(&self, text: &str) -> Result<i64, DatatypeError> {
        let trimmed = text.trim();
        let mut digits = trimmed;
        let mut multiplier = self.default;

        if self.key_len > 0 && trimmed.len() > self.key_len {
            let split = trimmed.len() - self.key_len;
            if trimmed.is_char_boundary(split) {
                let suffix = trimmed[split..].to_lowercase();
                if let Some(&found) = self.table.get(suffix.as_str()) {
                    multiplier = found;
                    digits = trimmed[..split].trim_end();
                }
            }
        }

        let value: i64 = digits
            .trim()
            .parse()
            .map_err(|_| DatatypeError::conversion(text, "integer"))?;
        value
            .checked_mul(multiplier)
            .ok_or_else(|| DatatypeError::conversion(text, "integer"))
    }
}

static BYTESIZE: LazyLock<SuffixMultiplier> = LazyLock::new(|| {
    SuffixMultiplier::new(
        [
            ("kb", 1024),
            ("mb", 1024 * 1024),
            ("gb", 1024 * 1024 * 1024),
        ],
        1,
    )
    .expect("byte-size suffix table is well formed")
});

/// Convert a byte-size literal (`100`, `8kb`, `4MB`, `1gb`) to bytes.
pub fn convert_bytesize(value: &str) -> Result<i64, DatatypeError> {
    BYTESIZE.convert(value)
}

/// Convert integer-like text to an integer.
///
/// Boolean tokens are also treated as integers: the canonical false
/// tokens yield 0, the true tokens yield 1, case-insensitively. Anything
/// else must parse as a base-10 integer.
pub fn convert_int(value: &str) -> Result<i64, DatatypeError> {
    let lowered = value.to_lowercase();

    if FALSE_TOKENS.contains(&lowered.as_str()) {
        return Ok(0);
    }
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        return Ok(1);
    }

    value
        .trim()
        .parse()
        .map_err(|_| DatatypeError::conversion(value, "integer"))
}

/// Split comma-delimited text into its elements. No trimming occurs, and
/// an empty string yields a single empty element rather than no elements.
pub fn convert_tuple(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// Convert text to a float using locale-independent parsing.
pub fn convert_float(value: &str) -> Result<f64, DatatypeError> {
    value
        .trim()
        .parse()
        .map_err(|_| DatatypeError::conversion(value, "float"))
}
