//! Export schema constants and header verification.
//!
//! The wallet export carries a fixed 12-column header. Before any row is
//! parsed, the raw header line must match [`WALLET_HEADERS`] token-for-token
//! in order; otherwise every positional field assumption downstream would
//! silently misassign columns. Verification fails fast at the first
//! divergence rather than producing an exhaustive diff.

use thiserror::Error;

/// Column names exactly as the wallet export writes them.
pub const WALLET_HEADERS: [&str; 12] = [
    "account",
    "category",
    "currency",
    "amount",
    "ref_currency_amount",
    "type",
    "payment_type",
    "note",
    "date",
    "transfer",
    "payee",
    "labels",
];

/// Standardized column names used inside the bridge, positionally aligned
/// with [`WALLET_HEADERS`]. Decoupled from the export names so a new source
/// can be wired in without touching analysis code.
pub const INTERNAL_HEADERS: [&str; 12] = [
    "account",
    "category",
    "currency",
    "amount_raw",
    "amount",
    "direction",
    "method",
    "note",
    "timestamp",
    "is_transfer",
    "entity",
    "tags",
];

pub const EXPECTED_FIELD_COUNT: usize = WALLET_HEADERS.len();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("header column count mismatch: expected {expected}, found {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("header mismatch at column {index}: expected '{expected}', found '{actual}'")]
    NameMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Verifies that a raw header line matches the expected column names.
///
/// Tokens are split on `;` and trimmed before comparison. The count is
/// checked first; with matching counts, names are compared positionally and
/// only the first divergence is reported. The parsed tokens are discarded on
/// success: once the header is verified, rows are trusted to follow the
/// fixed expected schema.
pub fn verify_header(raw_line: &str, expected: &[&str]) -> Result<(), SchemaError> {
    let actual: Vec<&str> = raw_line.trim().split(';').map(str::trim).collect();
    if actual.len() != expected.len() {
        return Err(SchemaError::CountMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    for (index, (found, wanted)) in actual.iter().zip(expected.iter()).enumerate() {
        if found != wanted {
            return Err(SchemaError::NameMismatch {
                index,
                expected: (*wanted).to_string(),
                actual: (*found).to_string(),
            });
        }
    }
    Ok(())
}
