//! School Portal Core Library
//! # Overview
//!
//! Data transformations behind the school dashboard (admin, staff, student
//! and parent views): wallet history rows, "load more" pagination and
//! role-scoped navigation menus.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, WalletTransactionRow, MenuItem, etc.)
//! - [`core`] - Pure business logic:
//!   - [`core::row_mapper`] - Transactions to rows with reconstructed running balances
//!   - [`core::pagination`] - Growing visible prefix of a list
//!   - [`core::menu_resolver`] - Role path rewriting and active menu entry matching
//! - [`format`] - Currency and date display formatting
//! - [`io`] - Transaction sources, menu configuration files and output writers
//! - [`cli`] - Command-line arguments and command execution
//! - [`telemetry`] - Logging setup
//!
//! # Wallet Rows
//!
//! Each row shows the balance immediately after its transaction. Only the
//! present-day balance is known, so balances are rebuilt by walking from the
//! newest transaction to the oldest and undoing each one:
//!
//! - **Expense** transactions are debits; undoing one adds the amount back
//! - Every other transaction is a credit; undoing one subtracts the amount
//!
//! # Roles
//!
//! Menu entries carry the roles allowed to see them. Each role gets its own
//! path space: `/dashboard` becomes `/admin`, `/staff`, `/student` or
//! `/parent`, and `/students` becomes `/{role}/students`.

pub mod cli;
pub mod core;
pub mod format;
pub mod io;
pub mod telemetry;
pub mod types;

pub use crate::core::{
    build_statement, get_menu_items_by_role, get_role_path, map_transactions_to_rows,
    match_menu_item_by_path, MenuResolver, PaginationConfig, PaginationWindow,
};
pub use format::CurrencySymbols;
pub use types::{
    Balance, MenuConfig, MenuItem, PaymentType, PortalError, Role, Statement, Transaction,
    TransactionKind, WalletTransactionRow,
};
