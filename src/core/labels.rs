//! Label tables for wallet history rows
//!
//! Both tables are fixed precedence lists; the first rule that applies wins.

use crate::format::date::MISSING;
use crate::types::{PaymentType, Transaction, TransactionKind};

/// Human label for the "Transaction Type" column
///
/// | rule | label |
/// |---|---|
/// | income + deposit | Top-Up |
/// | order | Wallet Debit |
/// | fees | Fee Payment |
/// | payment / transfer | Transfer In (income) or Transfer Out |
/// | expense | Wallet Debit |
/// | anything else | Credit |
pub fn transaction_type_label(tx: &Transaction) -> &'static str {
    match (&tx.kind, tx.payment_type.as_ref()) {
        (TransactionKind::Income, Some(PaymentType::Deposit)) => "Top-Up",
        (_, Some(PaymentType::Order)) => "Wallet Debit",
        (_, Some(PaymentType::Fees)) => "Fee Payment",
        (TransactionKind::Income, Some(PaymentType::Payment | PaymentType::Transfer)) => {
            "Transfer In"
        }
        (_, Some(PaymentType::Payment | PaymentType::Transfer)) => "Transfer Out",
        (TransactionKind::Expense, _) => "Wallet Debit",
        _ => "Credit",
    }
}

/// Human label for the "Item / Source" column
///
/// An explicit description always wins. Otherwise known payment types map to
/// fixed labels, unknown ones are shown verbatim, and a transaction with
/// neither shows `"—"`.
pub fn item_source_label(tx: &Transaction) -> String {
    if let Some(description) = tx.description.as_deref().map(str::trim) {
        if !description.is_empty() {
            return description.to_string();
        }
    }

    match &tx.payment_type {
        Some(PaymentType::Deposit) => "Deposit".to_string(),
        Some(PaymentType::Order) => "Canteen Purchase".to_string(),
        Some(PaymentType::Fees) => "School Fees".to_string(),
        Some(PaymentType::Transfer | PaymentType::Payment) => "Transfer".to_string(),
        Some(PaymentType::Other(raw)) if !raw.is_empty() => raw.clone(),
        _ => MISSING.to_string(),
    }
}
