//! Transaction sources
//!
//! Wallet transactions can be loaded from a JSON document (as returned by the
//! wallet REST endpoint) or from a CSV export. Both go through the same
//! normalization step in [`crate::io::transaction_format`].
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable file, JSON that is not a list of
//!   transactions) are returned from `read`
//! - Individual CSV rows that fail to decode are logged and skipped; the
//!   remaining rows are still loaded

use crate::io::transaction_format::{normalize, CsvRecord, RawTransaction};
use crate::types::{PortalError, Transaction};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Supported input document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension; anything but `.json` is CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Anything that can produce validated transactions from a file
pub trait TransactionSource {
    /// Load every transaction in the file at `path`
    fn read(&self, path: &Path) -> Result<Vec<Transaction>, PortalError>;
}

/// Create the source for an input format
///
/// # Arguments
///
/// * `format` - Document format of the transactions file
///
/// # Returns
///
/// A boxed [`TransactionSource`]: [`CsvSource`] or [`JsonSource`]
///
/// # Examples
///
/// ```no_run
/// use school_portal_core::io::{create_source, InputFormat};
/// use std::path::Path;
///
/// let path = Path::new("wallet.json");
/// let source = create_source(InputFormat::from_path(path));
/// match source.read(path) {
///     Ok(transactions) => println!("Loaded {} transactions", transactions.len()),
///     Err(e) => eprintln!("Failed to load wallet history: {}", e),
/// }
/// ```
pub fn create_source(format: InputFormat) -> Box<dyn TransactionSource> {
    match format {
        InputFormat::Csv => Box::new(CsvSource),
        InputFormat::Json => Box::new(JsonSource),
    }
}

/// Open a file, reporting a missing file distinctly from other I/O failures
pub(crate) fn open_file(path: &Path) -> Result<File, PortalError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PortalError::file_not_found(&path.display().to_string()),
        _ => PortalError::from(e),
    })
}

/// Reads a JSON list of transactions
///
/// Accepts a bare array or an envelope object with a `data` (or
/// `transactions`) array.
#[derive(Debug, Clone, Copy)]
pub struct JsonSource;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<RawTransaction>),
    Envelope {
        #[serde(alias = "transactions")]
        data: Vec<RawTransaction>,
    },
}

impl JsonSource {
    /// Parse transactions from an in-memory JSON document
    pub fn parse(text: &str) -> Result<Vec<Transaction>, PortalError> {
        let document: JsonDocument = serde_json::from_str(text).map_err(|e| {
            PortalError::parse_error(
                None,
                &format!("expected a list of transactions or an object with 'data': {}", e),
            )
        })?;
        let raw = match document {
            JsonDocument::List(list) => list,
            JsonDocument::Envelope { data } => data,
        };
        Ok(raw.into_iter().map(normalize).collect())
    }
}

impl TransactionSource for JsonSource {
    fn read(&self, path: &Path) -> Result<Vec<Transaction>, PortalError> {
        let file = open_file(path)?;
        let text = std::io::read_to_string(file)?;
        let transactions = JsonSource::parse(&text)?;
        debug!(path = %path.display(), count = transactions.len(), "Loaded JSON transactions");
        Ok(transactions)
    }
}

/// Reads a CSV export of transactions
#[derive(Debug, Clone, Copy)]
pub struct CsvSource;

impl TransactionSource for CsvSource {
    fn read(&self, path: &Path) -> Result<Vec<Transaction>, PortalError> {
        let reader = CsvReader::new(path)?;
        let mut transactions = Vec::new();

        for result in reader {
            match result {
                Ok(tx) => transactions.push(tx),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping CSV row"),
            }
        }

        debug!(path = %path.display(), count = transactions.len(), "Loaded CSV transactions");
        Ok(transactions)
    }
}

/// Streaming CSV reader yielding one transaction per row
///
/// The reader trims whitespace around every field and tolerates rows with
/// fewer columns than the header.
#[derive(Debug)]
pub struct CsvReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl CsvReader {
    /// Open a CSV export for streaming
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(CsvReader)` if the file opened successfully
    /// * `Err(PortalError::FileNotFound)` if nothing exists at `path`
    /// * `Err(PortalError::IoError)` for any other open failure
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use school_portal_core::io::CsvReader;
    /// use std::path::Path;
    ///
    /// match CsvReader::new(Path::new("wallet.csv")) {
    ///     Ok(reader) => println!("{} rows", reader.count()),
    ///     Err(e) => eprintln!("Failed to open file: {}", e),
    /// }
    /// ```
    pub fn new(path: &Path) -> Result<Self, PortalError> {
        let file = open_file(path)?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for CsvReader {
    type Item = Result<Transaction, PortalError>;

    /// Decode the next row; errors carry the 1-based file line number
    ///
    /// The line is where the failing record starts, so quoted fields that
    /// span several lines are accounted for. `line_num` (records read plus the
    /// header) is the fallback when the error has no position.
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(record) => Ok(normalize(record.into())),
            Err(e) => {
                let line = e.position().map_or(self.line_num, |pos| pos.line());
                Err(PortalError::parse_error(Some(line), &e.to_string()))
            }
        })
    }
}
