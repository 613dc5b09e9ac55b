//! Error types for the school portal core
//!
//! The three core components (row mapping, pagination, menu resolution) never
//! fail: malformed values degrade to documented fallbacks instead. Errors only
//! exist at the boundary, where files are read, configuration is loaded and
//! output is written.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parse Errors**: Malformed CSV or JSON documents
//! - **Configuration Errors**: Menu configuration that cannot be used
//! - **Lookup Errors**: A navigation path with no matching menu entry

use thiserror::Error;

/// Main error type for the portal core boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortalError {
    /// File not found at the specified path
    ///
    /// Fatal: processing cannot start.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input document could not be decoded
    ///
    /// For CSV input this is raised per record and the record is skipped.
    /// For JSON input the whole document is rejected.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Menu configuration could not be used
    #[error("Invalid menu configuration: {message}")]
    InvalidMenuConfig {
        /// What was wrong with the configuration
        message: String,
    },

    /// Writing rows or menu entries to the output failed
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the output failure
        message: String,
    },

    /// No menu entry matched the requested path for the role
    #[error("No menu entry matches '{path}' for role {role}")]
    MenuPathNotFound {
        /// The normalized path that was looked up
        path: String,
        /// The role the menu was scoped to
        role: String,
    },
}

impl From<std::io::Error> for PortalError {
    fn from(error: std::io::Error) -> Self {
        PortalError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PortalError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|p| p.line());
        PortalError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(error: serde_json::Error) -> Self {
        let line = match error.line() {
            0 => None,
            l => Some(l as u64),
        };
        PortalError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl PortalError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        PortalError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        PortalError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create an InvalidMenuConfig error
    pub fn invalid_menu_config(message: &str) -> Self {
        PortalError::InvalidMenuConfig {
            message: message.to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output_error(message: &str) -> Self {
        PortalError::OutputError {
            message: message.to_string(),
        }
    }

    /// Create a MenuPathNotFound error
    pub fn menu_path_not_found(path: &str, role: &str) -> Self {
        PortalError::MenuPathNotFound {
            path: path.to_string(),
            role: role.to_string(),
        }
    }
}
