//! Display rows produced from wallet transactions

use rust_decimal::Decimal;
use serde::Serialize;

/// One rendered line of the wallet history table
///
/// Created fresh on every mapping call. All monetary and date fields are
/// already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransactionRow {
    pub id: String,

    /// `"MMM. d, yyyy; h:mm a"`, or `"—"` when the timestamp is unknown
    pub date_time: String,

    /// Human label such as "Top-Up" or "Fee Payment"
    pub transaction_type: String,

    /// Where the money came from or went to
    pub item_source: String,

    /// Formatted amount, e.g. `"₦4,599.00"`
    pub amount: String,

    /// Formatted balance immediately after this transaction was applied
    pub running_balance: String,

    pub is_debit: bool,
}

/// Mapped rows together with the balances that bracket them
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Rows ordered newest first
    pub rows: Vec<WalletTransactionRow>,

    /// Balance after the newest listed transaction (the caller-supplied balance)
    pub closing_balance: Decimal,

    /// Balance implied before the oldest listed transaction
    ///
    /// Only meaningful when the listed transactions are the complete history
    /// since that point.
    pub opening_balance: Decimal,
}

impl Statement {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
