//! School Portal Core CLI
//!
//! Command-line interface over the dashboard core.
//!
//! # Usage
//!
//! ```bash
//! portal-core statement wallet.json --balance 15000 > rows.csv
//! portal-core statement wallet.csv --balance 15000 --format json --load-more 2
//! portal-core statement wallet.json --balance 15000 --all --currency-symbol USD=$
//! portal-core menu --role parent
//! portal-core menu --role admin --path /admin/students/42
//! portal-core role-path --role staff /dashboard
//! ```
//!
//! Data is written to stdout; logs go to stderr (`RUST_LOG` overrides the
//! level, `--verbose` switches the default to debug).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable input, unmatched menu path, etc.)
//! - 2: Invalid command-line arguments

use school_portal_core::{cli, telemetry};
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    telemetry::init_logging(args.verbose);

    let mut output = std::io::stdout().lock();
    if let Err(e) = cli::run(&args.command, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
