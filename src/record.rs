//! The canonical typed transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized wallet transaction.
///
/// Produced only for rows with the full expected field count. Content
/// defects inside a structurally valid row degrade per field instead of
/// discarding the record: bad numerics become NaN (serialized as JSON null),
/// an unparseable timestamp becomes `None`, and any transfer token other
/// than a case-insensitive "true" becomes `false`. Callers should treat NaN
/// amounts and absent dates as data-quality flags, not crashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub account: String,
    pub category: String,
    pub currency: String,
    pub amount: f64,
    pub ref_currency_amount: f64,
    /// Direction indicator, uppercased so downstream comparisons are
    /// case-insensitive regardless of source casing.
    pub trans_type: String,
    pub payment_type: Option<String>,
    pub notes: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub transfer: bool,
    pub payee: Option<String>,
    pub labels: Vec<String>,
}
