//! Row parsing: one raw export line to one typed [`TransactionRecord`].
//!
//! Structural defects (blank line, wrong field count) reject the whole row
//! with `None`; the surrounding ingestion loop is expected to skip it and
//! continue. Content defects inside a structurally valid row never reject
//! it: numeric cells fall back to NaN, timestamps fall back to absent, and
//! transfer tokens fall back to `false`, so one dirty cell degrades the
//! record instead of discarding it.

use chrono::{DateTime, Utc};

use crate::{record::TransactionRecord, schema::EXPECTED_FIELD_COUNT};

/// Parses a single `;`-delimited export row.
///
/// Returns `None` for blank lines and for rows whose trimmed token count is
/// not exactly [`EXPECTED_FIELD_COUNT`]; otherwise destructures the tokens
/// positionally and applies the per-field coercions.
pub fn parse_row(raw_row: &str) -> Option<TransactionRecord> {
    let trimmed = raw_row.trim();
    if trimmed.is_empty() {
        return None;
    }
    let fields: Vec<&str> = trimmed.split(';').map(str::trim).collect();
    if fields.len() != EXPECTED_FIELD_COUNT {
        return None;
    }
    let [
        account,
        category,
        currency,
        amount,
        ref_currency_amount,
        trans_type,
        payment_type,
        notes,
        date,
        transfer,
        payee,
        labels,
    ] = fields[..]
    else {
        return None;
    };

    Some(TransactionRecord {
        account: account.to_string(),
        category: category.to_string(),
        currency: currency.to_string(),
        amount: parse_amount(amount),
        ref_currency_amount: parse_amount(ref_currency_amount),
        trans_type: trans_type.to_uppercase(),
        payment_type: optional_text(payment_type),
        notes: optional_text(notes),
        date: parse_timestamp(date),
        transfer: transfer_flag(transfer),
        payee: optional_text(payee),
        labels: split_labels(labels),
    })
}

/// Decimal parse with NaN fallback. A bad numeric cell should not discard an
/// otherwise usable record; NaN propagates through downstream sums so bad
/// data surfaces as a visibly invalid aggregate.
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// ISO-8601 timestamp parse, UTC-normalized.
///
/// A trailing literal `Z` is rewritten to the explicit `+00:00` offset
/// before parsing. Parse failure yields `None` rather than rejecting the
/// row; an absent date is a data-quality event for the caller.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let parsed = match value.strip_suffix('Z') {
        Some(base) => DateTime::parse_from_rfc3339(&format!("{base}+00:00")),
        None => DateTime::parse_from_rfc3339(value),
    };
    parsed.ok().map(|dt| dt.with_timezone(&Utc))
}

/// Closed two-valued interpretation: true only for a case-insensitive
/// "true" token. Anything else, malformed included, is `false`.
pub fn transfer_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Empty after trimming becomes absent; non-empty is kept verbatim.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits a `,`-delimited tag list, trimming each entry and preserving
/// order and duplicates. An empty field yields an empty list.
pub fn split_labels(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(|label| label.trim().to_string()).collect()
}
