//! Wire formats for wallet transactions and mapped rows
//!
//! This module is the single place where loosely-typed API payloads become
//! [`Transaction`] values:
//! - `RawTransaction` mirrors the REST payload (every field optional, ids and
//!   amounts as either strings or numbers)
//! - `CsvRecord` mirrors a CSV export of the same payload
//! - `normalize` applies all fallbacks once, so the row mapper never has to
//!
//! Row output serialization (CSV and JSON) lives here as well. All functions
//! except the writers are pure.

use crate::types::transaction::try_parse_decimal;
use crate::types::{PaymentType, PortalError, Transaction, TransactionKind, WalletTransactionRow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, warn};

/// A JSON value that may arrive as either a number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(serde_json::Number),
    Text(String),
}

impl RawScalar {
    fn as_text(&self) -> String {
        match self {
            RawScalar::Number(n) => n.to_string(),
            RawScalar::Text(s) => s.trim().to_string(),
        }
    }
}

/// Transaction exactly as the wallet endpoint serves it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub id: Option<RawScalar>,
    #[serde(default)]
    pub amount: Option<RawScalar>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// CSV export row
///
/// Columns: id, amount, currency, transaction_type, payment_type,
/// description, created_at. Every column may be empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CsvRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<CsvRecord> for RawTransaction {
    fn from(record: CsvRecord) -> Self {
        RawTransaction {
            id: record.id.map(RawScalar::Text),
            amount: record.amount.map(RawScalar::Text),
            currency: record.currency,
            transaction_type: record.transaction_type,
            payment_type: record.payment_type,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

/// Convert a raw payload into a validated transaction
///
/// Never fails. Fallbacks:
/// - missing id becomes `""`
/// - missing or non-numeric amount becomes `0` (logged)
/// - blank currency, payment type and description become `None`
/// - missing or unrecognized timestamps become `None` (logged when present)
pub fn normalize(raw: RawTransaction) -> Transaction {
    let id = raw.id.as_ref().map(RawScalar::as_text).unwrap_or_default();
    let amount = normalize_amount(&id, raw.amount.as_ref());

    let created_at = raw.created_at.as_deref().and_then(|text| {
        let parsed = parse_timestamp(text);
        if parsed.is_none() && !text.trim().is_empty() {
            warn!(tx = %id, created_at = text, "Unrecognized timestamp, treating as missing");
        }
        parsed
    });

    let kind = TransactionKind::parse(raw.transaction_type.as_deref().unwrap_or_default());
    if let TransactionKind::Other(_) = kind {
        debug!(tx = %id, kind = %kind, "Unrecognized transaction type, treating as credit");
    }
    let payment_type = raw.payment_type.as_deref().and_then(PaymentType::parse);
    if let Some(other @ PaymentType::Other(_)) = &payment_type {
        debug!(tx = %id, payment_type = %other, "Unrecognized payment type");
    }

    Transaction {
        amount,
        currency: non_blank(raw.currency),
        kind,
        payment_type,
        description: non_blank(raw.description),
        created_at,
        id,
    }
}

fn normalize_amount(id: &str, amount: Option<&RawScalar>) -> Decimal {
    let Some(amount) = amount else {
        return Decimal::ZERO;
    };
    let text = amount.as_text();
    match try_parse_decimal(&text) {
        Some(value) => value,
        None => {
            warn!(tx = %id, amount = %text, "Non-numeric amount, treating as zero");
            Decimal::ZERO
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an API timestamp into UTC
///
/// Accepts RFC 3339 (`2025-10-31T11:15:00Z`, `...+01:00`), offsets without a
/// colon, naive date-times (taken as UTC) with `T` or a space as separator,
/// and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Write rows as CSV
///
/// Columns: date_time, transaction_type, item_source, amount,
/// running_balance, is_debit. Row order is preserved.
pub fn write_rows_csv(
    rows: &[WalletTransactionRow],
    output: &mut dyn Write,
) -> Result<(), PortalError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "date_time",
            "transaction_type",
            "item_source",
            "amount",
            "running_balance",
            "is_debit",
        ])
        .map_err(|e| PortalError::output_error(&format!("Failed to write CSV header: {}", e)))?;

    for row in rows {
        writer
            .write_record([
                row.date_time.as_str(),
                row.transaction_type.as_str(),
                row.item_source.as_str(),
                row.amount.as_str(),
                row.running_balance.as_str(),
                if row.is_debit { "true" } else { "false" },
            ])
            .map_err(|e| PortalError::output_error(&format!("Failed to write row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| PortalError::output_error(&format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// Write any serializable value as pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output: &mut dyn Write,
) -> Result<(), PortalError> {
    serde_json::to_writer_pretty(&mut *output, value)
        .map_err(|e| PortalError::output_error(&format!("Failed to write JSON: {}", e)))?;
    writeln!(output)?;
    Ok(())
}

/// Write rows as a JSON array with camelCase keys
pub fn write_rows_json(
    rows: &[WalletTransactionRow],
    output: &mut dyn Write,
) -> Result<(), PortalError> {
    write_json(rows, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use rstest::rstest;

    fn raw_json(json: &str) -> RawTransaction {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_full_payload() {
        let tx = normalize(raw_json(
            r#"{
                "id": 17,
                "amount": "4599.00",
                "currency": "NGN",
                "transaction_type": "expense",
                "payment_type": "fees",
                "description": "  Term 1 fees ",
                "created_at": "2025-10-31T11:15:00Z"
            }"#,
        ));

        assert_eq!(tx.id, "17");
        assert_eq!(tx.amount, Decimal::new(4599, 0));
        assert_eq!(tx.currency.as_deref(), Some("NGN"));
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.payment_type, Some(PaymentType::Fees));
        assert_eq!(tx.description.as_deref(), Some("Term 1 fees"));
        assert_eq!(
            tx.created_at,
            Some(Utc.with_ymd_and_hms(2025, 10, 31, 11, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_normalize_sparse_payload() {
        let tx = normalize(raw_json(r#"{"amount": null, "currency": "", "description": " "}"#));

        assert_eq!(tx.id, "");
        assert_eq!(tx.amount, Decimal::ZERO);
        assert_eq!(tx.currency, None);
        assert_eq!(tx.kind, TransactionKind::Other(String::new()));
        assert_eq!(tx.payment_type, None);
        assert_eq!(tx.description, None);
        assert_eq!(tx.created_at, None);
    }

    #[rstest]
    #[case::numeric_amount(r#"{"amount": 250.75}"#, Decimal::new(25075, 2))]
    #[case::integer_amount(r#"{"amount": 1200}"#, Decimal::new(1200, 0))]
    #[case::string_amount(r#"{"amount": " 99.5 "}"#, Decimal::new(995, 1))]
    #[case::garbage_amount(r#"{"amount": "ten naira"}"#, Decimal::ZERO)]
    #[case::missing_amount(r#"{}"#, Decimal::ZERO)]
    fn test_normalize_amount(#[case] json: &str, #[case] expected: Decimal) {
        assert_eq!(normalize(raw_json(json)).amount, expected);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let tx = normalize(raw_json(r#"{"id":"a","amount":"1","wallet_id":9,"meta":{"x":1}}"#));
        assert_eq!(tx.id, "a");
    }

    #[rstest]
    #[case::rfc3339_utc("2025-10-31T11:15:00Z", Some((2025, 10, 31, 11, 15)))]
    #[case::rfc3339_fraction("2025-10-31T11:15:00.123456Z", Some((2025, 10, 31, 11, 15)))]
    #[case::rfc3339_offset("2025-10-31T12:15:00+01:00", Some((2025, 10, 31, 11, 15)))]
    #[case::offset_without_colon("2025-10-31T12:15:00+0100", Some((2025, 10, 31, 11, 15)))]
    #[case::naive_t("2025-10-31T11:15:00", Some((2025, 10, 31, 11, 15)))]
    #[case::naive_space("2025-10-31 11:15:00.5", Some((2025, 10, 31, 11, 15)))]
    #[case::bare_date("2025-10-31", Some((2025, 10, 31, 0, 0)))]
    #[case::blank("  ", None)]
    #[case::garbage("yesterday", None)]
    fn test_parse_timestamp(
        #[case] raw: &str,
        #[case] expected: Option<(i32, u32, u32, u32, u32)>,
    ) {
        let expected =
            expected.map(|(y, mo, d, h, mi)| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap());
        let parsed = parse_timestamp(raw).map(|ts| ts.with_nanosecond(0).unwrap());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_csv_record_converts_to_raw() {
        let record = CsvRecord {
            id: Some("5".to_string()),
            amount: Some("10.00".to_string()),
            transaction_type: Some("income".to_string()),
            ..CsvRecord::default()
        };

        let tx = normalize(record.into());
        assert_eq!(tx.id, "5");
        assert_eq!(tx.amount, Decimal::new(1000, 2));
        assert_eq!(tx.kind, TransactionKind::Income);
    }

    fn sample_row(is_debit: bool) -> WalletTransactionRow {
        WalletTransactionRow {
            id: "1".to_string(),
            date_time: "Oct. 31, 2025; 11:15 AM".to_string(),
            transaction_type: "Wallet Debit".to_string(),
            item_source: "Canteen Purchase".to_string(),
            amount: "₦1,500.00".to_string(),
            running_balance: "₦3,000.00".to_string(),
            is_debit,
        }
    }

    #[test]
    fn test_write_rows_csv() {
        let mut output = Vec::new();
        write_rows_csv(&[sample_row(true)], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date_time,transaction_type,item_source,amount,running_balance,is_debit\n\
             \"Oct. 31, 2025; 11:15 AM\",Wallet Debit,Canteen Purchase,\"₦1,500.00\",\"₦3,000.00\",true\n"
        );
    }

    #[test]
    fn test_write_rows_csv_empty() {
        let mut output = Vec::new();
        write_rows_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date_time,transaction_type,item_source,amount,running_balance,is_debit\n"
        );
    }

    #[test]
    fn test_write_rows_json_uses_camel_case() {
        let mut output = Vec::new();
        write_rows_json(&[sample_row(false)], &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value[0]["dateTime"], "Oct. 31, 2025; 11:15 AM");
        assert_eq!(value[0]["runningBalance"], "₦3,000.00");
        assert_eq!(value[0]["isDebit"], false);
        assert!(output.ends_with(b"\n"));
    }
}
