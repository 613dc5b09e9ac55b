//! Core logic module
//!
//! Pure transformations consumed by the dashboard views:
//! - `row_mapper` - Wallet transactions to display rows with running balances
//! - `labels` - Label tables for the transaction type and source columns
//! - `pagination` - "Load more" window over an in-memory list
//! - `menu_resolver` - Role-scoped menu filtering and active-entry matching
//!
//! None of these components perform I/O or return errors.

pub mod labels;
pub mod menu_resolver;
pub mod pagination;
pub mod row_mapper;

pub use menu_resolver::{
    get_menu_items_by_role, get_role_path, match_menu_item_by_path, MenuResolver,
};
pub use pagination::{PaginationConfig, PaginationWindow};
pub use row_mapper::{build_statement, map_transactions_to_rows};
