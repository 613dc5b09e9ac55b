//! Wallet transaction row mapper
//!
//! Turns a list of ledger transactions plus the wallet's present-day balance
//! into display rows ordered newest first, each carrying the balance as it
//! stood immediately after that transaction.
//!
//! # Balance Reconstruction
//!
//! Only the current balance is known. Walking from the newest transaction to
//! the oldest, each row is stamped with the running accumulator and then the
//! transaction's effect is undone:
//!
//! ```text
//! balance[0]   = current_balance
//! balance[i+1] = balance[i] - signed_amount[i]
//! ```
//!
//! where `signed_amount` is negative for debits (expenses) and positive for
//! everything else.
//!
//! # Partial Histories
//!
//! The reconstruction assumes the supplied transactions are every movement
//! since the oldest listed one. If the list is a truncated window (for
//! example one page of a paginated endpoint with gaps), older balances drift
//! by the sum of the missing transactions. This is not detected or corrected.
//!
//! # Overflow
//!
//! Balances past the `Decimal` range saturate at `Decimal::MAX` or
//! `Decimal::MIN` and log a warning.

use crate::core::labels::{item_source_label, transaction_type_label};
use crate::format::{format_timestamp, CurrencySymbols};
use crate::types::{Balance, Statement, Transaction, WalletTransactionRow};
use rust_decimal::Decimal;
use std::cmp::Reverse;
use tracing::{debug, warn};

/// Map transactions to display rows with running balances
///
/// Never fails and never drops or duplicates a transaction: the output has
/// exactly one row per input transaction, sorted by `created_at` descending.
/// Transactions without a timestamp sort as the Unix epoch; ties keep their
/// input order.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use school_portal_core::core::map_transactions_to_rows;
/// use school_portal_core::format::CurrencySymbols;
/// use school_portal_core::types::{Balance, Transaction, TransactionKind};
///
/// let txs = vec![Transaction::new("1", Decimal::new(200, 0), TransactionKind::Expense)];
/// let rows = map_transactions_to_rows(&txs, &Balance::from(1000_i64), &CurrencySymbols::default());
///
/// assert_eq!(rows[0].running_balance, "₦1,000.00");
/// assert!(rows[0].is_debit);
/// ```
pub fn map_transactions_to_rows(
    transactions: &[Transaction],
    current_balance: &Balance,
    symbols: &CurrencySymbols,
) -> Vec<WalletTransactionRow> {
    build_statement(transactions, current_balance, symbols).rows
}

/// Map transactions to rows and report the balances bracketing them
pub fn build_statement(
    transactions: &[Transaction],
    current_balance: &Balance,
    symbols: &CurrencySymbols,
) -> Statement {
    let ordered = newest_first(transactions);
    let closing_balance = current_balance.value();
    let mut running = closing_balance;
    let mut rows = Vec::with_capacity(ordered.len());

    for tx in ordered {
        rows.push(map_row(tx, running, symbols));
        running = undo(running, tx);
    }

    debug!(
        rows = rows.len(),
        %closing_balance,
        opening_balance = %running,
        "Mapped wallet transactions"
    );

    Statement {
        rows,
        closing_balance,
        opening_balance: running,
    }
}

/// Balance before `tx` was applied, saturating at the `Decimal` bounds
fn undo(running: Decimal, tx: &Transaction) -> Decimal {
    let signed = tx.signed_amount();
    running.checked_sub(signed).unwrap_or_else(|| {
        let saturated = if signed.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        };
        warn!(
            tx = %tx.id,
            %running,
            amount = %tx.amount,
            %saturated,
            "Running balance out of range, saturating"
        );
        saturated
    })
}

/// Stable sort by timestamp, newest first, missing timestamps as epoch
fn newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| Reverse(sort_key(tx)));
    ordered
}

fn sort_key(tx: &Transaction) -> i64 {
    tx.created_at.map(|ts| ts.timestamp_millis()).unwrap_or(0)
}

fn map_row(
    tx: &Transaction,
    running_balance: Decimal,
    symbols: &CurrencySymbols,
) -> WalletTransactionRow {
    let currency = tx.currency.as_deref();
    WalletTransactionRow {
        id: tx.id.clone(),
        date_time: format_timestamp(tx.created_at.as_ref()),
        transaction_type: transaction_type_label(tx).to_string(),
        item_source: item_source_label(tx),
        amount: symbols.format(tx.amount, currency),
        running_balance: symbols.format(running_balance, currency),
        is_debit: tx.kind.is_debit(),
    }
}
