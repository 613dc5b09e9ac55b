//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `transaction`: Validated wallet transactions and the caller's balance
//! - `row`: Display rows and statements produced by the row mapper
//! - `menu`: Roles and the navigation menu tree
//! - `error`: Error types for the I/O and CLI boundary

pub mod error;
pub mod menu;
pub mod row;
pub mod transaction;

pub use error::PortalError;
pub use menu::{MenuConfig, MenuItem, Role};
pub use row::{Statement, WalletTransactionRow};
pub use transaction::{Balance, PaymentType, Transaction, TransactionId, TransactionKind};
