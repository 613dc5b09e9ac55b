use crate::core::pagination::{PaginationConfig, DEFAULT_ITEMS_PER_PAGE};
use crate::format::currency::{parse_override, CurrencySymbols};
use crate::io::InputFormat;
use crate::types::{Balance, Role};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// School dashboard core: wallet statements and role-scoped menus
#[derive(Parser, Debug)]
#[command(name = "portal-core")]
#[command(about = "Wallet statements and role-scoped menus for the school dashboard", long_about = None)]
pub struct CliArgs {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Map wallet transactions to history rows with running balances
    Statement(StatementArgs),

    /// Show the menu for a role, or the entry matching a path
    Menu(MenuArgs),

    /// Rewrite a generic menu path into a role's path space
    RolePath(RolePathArgs),
}

#[derive(Args, Debug)]
pub struct StatementArgs {
    /// Transactions file (CSV export or JSON as served by the wallet API)
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Present-day wallet balance; non-numeric values count as zero
    #[arg(long, value_name = "BALANCE", allow_hyphen_values = true)]
    pub balance: Balance,

    /// Output format for the rows
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub output_format: OutputFormat,

    /// Input format; inferred from the file extension when omitted
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormat>,

    /// Rows visible before any "load more" (default: 5)
    #[arg(long = "initial-items", value_name = "COUNT")]
    pub initial_items: Option<usize>,

    /// Rows revealed by each "load more" (default: 5)
    #[arg(long = "items-per-page", value_name = "COUNT")]
    pub items_per_page: Option<usize>,

    /// Number of times to "load more" before printing
    #[arg(long = "load-more", value_name = "TIMES", default_value_t = 0)]
    pub load_more: usize,

    /// Print every row, ignoring pagination
    #[arg(long, conflicts_with = "load_more")]
    pub all: bool,

    /// Extra currency symbol, e.g. USD=$ (repeatable)
    #[arg(long = "currency-symbol", value_name = "CODE=SYMBOL", value_parser = parse_override)]
    pub currency_symbols: Vec<(String, String)>,
}

/// Output formats for statement rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Role whose menu to resolve
    #[arg(long, value_enum)]
    pub role: Role,

    /// Menu configuration JSON; the built-in school menu when omitted
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Current navigation path to match against the menu
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,
}

#[derive(Args, Debug)]
pub struct RolePathArgs {
    /// Role whose path space to use
    #[arg(long, value_enum)]
    pub role: Role,

    /// Generic menu path, e.g. /dashboard or /students
    #[arg(value_name = "BASE_PATH")]
    pub base_path: String,
}

impl StatementArgs {
    /// Build the pagination config from CLI arguments
    ///
    /// Missing values use the defaults. A zero page step would never reveal
    /// anything, so it also falls back to the default.
    pub fn to_pagination_config(&self) -> PaginationConfig {
        let default = PaginationConfig::default();
        let items_per_page = match self.items_per_page {
            Some(0) => {
                warn!(
                    default = DEFAULT_ITEMS_PER_PAGE,
                    "--items-per-page 0 would never load more rows, using default"
                );
                default.items_per_page
            }
            Some(n) => n,
            None => default.items_per_page,
        };
        PaginationConfig::new(
            self.initial_items.unwrap_or(default.initial_items_per_page),
            items_per_page,
        )
    }

    /// Default currency symbols plus any command-line overrides
    pub fn to_currency_symbols(&self) -> CurrencySymbols {
        let mut symbols = CurrencySymbols::default();
        for (code, symbol) in &self.currency_symbols {
            symbols.insert(code, symbol);
        }
        symbols
    }

    /// Explicit input format or the one implied by the file extension
    pub fn resolved_input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| InputFormat::from_path(&self.input_file))
    }
}
