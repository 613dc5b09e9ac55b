//! Wallet transaction types
//!
//! A `Transaction` is the validated form of a ledger entry as served by the
//! wallet REST endpoint. Raw payloads are normalized into it once, at the
//! input boundary (see [`crate::io::transaction_format`]); everything past
//! that point works with typed fields only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Transaction identifier as sent by the backend (string or number on the wire)
pub type TransactionId = String;

/// Direction of a wallet transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money coming into the wallet
    Income,
    /// Money leaving the wallet; the only kind treated as a debit
    Expense,
    /// Any other value the backend sends, kept verbatim
    Other(String),
}

impl TransactionKind {
    /// Classify a raw `transaction_type` value (case-insensitive)
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("income") {
            TransactionKind::Income
        } else if trimmed.eq_ignore_ascii_case("expense") {
            TransactionKind::Expense
        } else {
            TransactionKind::Other(trimmed.to_string())
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionKind::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("income"),
            TransactionKind::Expense => f.write_str("expense"),
            TransactionKind::Other(raw) => f.write_str(raw),
        }
    }
}

/// What the transaction paid for or came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentType {
    /// Wallet top-up
    Deposit,
    /// Canteen order
    Order,
    /// School fee payment
    Fees,
    /// Wallet-to-wallet transfer
    Transfer,
    /// Generic payment between wallets
    Payment,
    /// Any other value the backend sends, kept verbatim
    Other(String),
}

impl PaymentType {
    /// Classify a raw `payment_type` value (case-insensitive)
    ///
    /// Returns `None` for empty input so that "no payment type" and
    /// "unknown payment type" stay distinguishable.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let payment_type = match trimmed.to_ascii_lowercase().as_str() {
            "deposit" => PaymentType::Deposit,
            "order" => PaymentType::Order,
            "fees" => PaymentType::Fees,
            "transfer" => PaymentType::Transfer,
            "payment" => PaymentType::Payment,
            _ => PaymentType::Other(trimmed.to_string()),
        };
        Some(payment_type)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Deposit => f.write_str("deposit"),
            PaymentType::Order => f.write_str("order"),
            PaymentType::Fees => f.write_str("fees"),
            PaymentType::Transfer => f.write_str("transfer"),
            PaymentType::Payment => f.write_str("payment"),
            PaymentType::Other(raw) => f.write_str(raw),
        }
    }
}

/// A validated wallet ledger entry
///
/// Immutable once built. The row mapper only ever borrows transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,

    /// Unsigned amount as recorded by the backend; direction comes from `kind`
    pub amount: Decimal,

    /// ISO currency code, `None` when the backend omitted it
    pub currency: Option<String>,

    pub kind: TransactionKind,

    pub payment_type: Option<PaymentType>,

    /// Free-text description; `None` when absent or blank
    pub description: Option<String>,

    /// When the transaction happened; `None` when missing or unparseable
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a transaction with only the required fields set
    pub fn new(id: impl Into<TransactionId>, amount: Decimal, kind: TransactionKind) -> Self {
        Transaction {
            id: id.into(),
            amount,
            currency: None,
            kind,
            payment_type: None,
            description: None,
            created_at: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Amount with the sign of its effect on the wallet balance
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_debit() {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// The present-day wallet balance supplied by the caller
///
/// Accepts numbers or numeric strings. Anything that does not parse as a
/// number becomes zero rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance(Decimal);

impl Balance {
    /// Parse a balance from text, degrading to zero on malformed input
    pub fn parse(raw: &str) -> Self {
        Balance::try_parse(raw).unwrap_or_else(|| {
            warn!(balance = raw, "Non-numeric balance, treating as zero");
            Balance::default()
        })
    }

    /// Parse a balance from text, `None` when it is not numeric
    pub fn try_parse(raw: &str) -> Option<Self> {
        try_parse_decimal(raw).map(Balance)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Balance {
    fn from(value: Decimal) -> Self {
        Balance(value)
    }
}

impl From<i64> for Balance {
    fn from(value: i64) -> Self {
        Balance(Decimal::from(value))
    }
}

impl From<f64> for Balance {
    fn from(value: f64) -> Self {
        Balance(Decimal::try_from(value).unwrap_or(Decimal::ZERO))
    }
}

impl FromStr for Balance {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Balance::parse(s))
    }
}

/// Parse a decimal number, `None` when the text is not numeric
///
/// Plain notation (`"4599.50"`) and scientific notation (`"1e3"`) are both
/// accepted. Blank input is zero.
pub fn try_parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
