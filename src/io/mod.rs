//! I/O module
//!
//! Handles loading transactions and menu configuration, and writing output.
//!
//! # Components
//!
//! - `transaction_format` - Raw payload normalization and row serialization
//! - `source` - CSV and JSON transaction sources
//! - `menu_config` - Menu configuration files

pub mod menu_config;
pub mod source;
pub mod transaction_format;

pub use menu_config::{load_menu_config, parse_menu_config, write_menu_json};
pub use source::{create_source, CsvReader, CsvSource, InputFormat, JsonSource, TransactionSource};
pub use transaction_format::{
    normalize, parse_timestamp, write_json, write_rows_csv, write_rows_json, CsvRecord,
    RawTransaction,
};
