//! Display formatting helpers
//!
//! - `currency` - Currency symbol table and amount rendering
//! - `date` - Transaction timestamp rendering

pub mod currency;
pub mod date;

pub use currency::{format_amount, CurrencySymbols};
pub use date::format_timestamp;
