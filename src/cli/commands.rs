//! Command execution
//!
//! Each command reads its inputs, runs the matching core component and writes
//! the result to the supplied output. Logs go through `tracing`; only data is
//! written to `output`.

use crate::cli::args::{Command, MenuArgs, OutputFormat, RolePathArgs, StatementArgs};
use crate::core::{
    build_statement, get_menu_items_by_role, get_role_path, match_menu_item_by_path,
    PaginationWindow,
};
use crate::io::{
    create_source, load_menu_config, write_json, write_menu_json, write_rows_csv, write_rows_json,
};
use crate::types::{MenuConfig, PortalError};
use std::io::Write;
use tracing::info;

/// Run a parsed command, writing its data output to `output`
pub fn run(command: &Command, output: &mut dyn Write) -> Result<(), PortalError> {
    match command {
        Command::Statement(args) => run_statement(args, output),
        Command::Menu(args) => run_menu(args, output),
        Command::RolePath(args) => run_role_path(args, output),
    }
}

fn run_statement(args: &StatementArgs, output: &mut dyn Write) -> Result<(), PortalError> {
    let source = create_source(args.resolved_input_format());
    let transactions = source.read(&args.input_file)?;

    let symbols = args.to_currency_symbols();
    let statement = build_statement(&transactions, &args.balance, &symbols);
    info!(
        transactions = statement.len(),
        closing_balance = %statement.closing_balance,
        opening_balance = %statement.opening_balance,
        "Built wallet statement"
    );

    let total = statement.len();
    let mut window = PaginationWindow::new(statement.rows, args.to_pagination_config());
    if args.all {
        while window.has_more() {
            window.load_more();
        }
    } else {
        for _ in 0..args.load_more {
            window.load_more();
        }
    }
    info!(
        shown = window.displayed().len(),
        total,
        remaining = window.remaining(),
        "Paginated rows"
    );

    match args.output_format {
        OutputFormat::Csv => write_rows_csv(window.displayed(), output),
        OutputFormat::Json => write_rows_json(window.displayed(), output),
    }
}

fn run_menu(args: &MenuArgs, output: &mut dyn Write) -> Result<(), PortalError> {
    let config = match &args.config {
        Some(path) => load_menu_config(path)?,
        None => MenuConfig::default(),
    };

    match &args.path {
        Some(path) => {
            let item = match_menu_item_by_path(&config, path, args.role)
                .ok_or_else(|| PortalError::menu_path_not_found(path, args.role.as_str()))?;
            write_json(&item, output)
        }
        None => write_menu_json(&get_menu_items_by_role(&config, args.role), output),
    }
}

fn run_role_path(args: &RolePathArgs, output: &mut dyn Write) -> Result<(), PortalError> {
    writeln!(output, "{}", get_role_path(args.role, &args.base_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliArgs;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run_args(args: &[&str]) -> Result<String, PortalError> {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let mut output = Vec::new();
        run(&parsed.command, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn wallet_json() -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("Failed to create temp file");
        let transactions: Vec<String> = (1..=7)
            .map(|day| {
                format!(
                    r#"{{"id":{day},"amount":"100","transaction_type":"expense","payment_type":"order","created_at":"2025-10-0{day}T10:00:00Z"}}"#
                )
            })
            .collect();
        write!(file, "[{}]", transactions.join(",")).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn data_lines(csv: &str) -> usize {
        csv.lines().count() - 1
    }

    #[test]
    fn test_statement_shows_first_page_by_default() {
        let file = wallet_json();
        let path = file.path().to_str().unwrap();

        let csv = run_args(&["portal-core", "statement", path, "--balance", "1000"]).unwrap();

        assert_eq!(data_lines(&csv), 5);
        assert!(csv.lines().nth(1).unwrap().starts_with("\"Oct. 7, 2025; 10:00 AM\""));
    }

    #[test]
    fn test_statement_load_more_and_all() {
        let file = wallet_json();
        let path = file.path().to_str().unwrap();

        let csv = run_args(&[
            "portal-core", "statement", path, "--balance", "1000", "--initial-items", "2",
            "--items-per-page", "2", "--load-more", "1",
        ])
        .unwrap();
        assert_eq!(data_lines(&csv), 4);

        let csv = run_args(&["portal-core", "statement", path, "--balance", "1000", "--all"]).unwrap();
        assert_eq!(data_lines(&csv), 7);
    }

    #[test]
    fn test_statement_json_output() {
        let file = wallet_json();
        let path = file.path().to_str().unwrap();

        let json = run_args(&[
            "portal-core", "statement", path, "--balance", "1000", "--format", "json",
            "--initial-items", "2",
        ])
        .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert_eq!(rows[0]["runningBalance"], "₦1,000.00");
        assert_eq!(rows[1]["runningBalance"], "₦1,100.00");
        assert_eq!(rows[1]["transactionType"], "Wallet Debit");
    }

    #[test]
    fn test_statement_missing_file() {
        let result = run_args(&["portal-core", "statement", "missing.csv", "--balance", "1"]);
        assert!(matches!(result, Err(PortalError::FileNotFound { .. })));
    }

    #[test]
    fn test_menu_lists_role_items() {
        let json = run_args(&["portal-core", "menu", "--role", "student"]).unwrap();

        let items: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(items[0]["href"], "/student");
        assert!(items
            .as_array()
            .unwrap()
            .iter()
            .all(|item| item["id"] != "staff"));
    }

    #[test]
    fn test_menu_matches_path() {
        let json =
            run_args(&["portal-core", "menu", "--role", "admin", "--path", "/admin/students/42"])
                .unwrap();

        let item: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(item["id"], "students");
        assert_eq!(item["href"], "/admin/students");
    }

    #[test]
    fn test_menu_unmatched_path_is_error() {
        let result = run_args(&["portal-core", "menu", "--role", "admin", "--path", "/admin/students2"]);
        assert_eq!(
            result.unwrap_err(),
            PortalError::menu_path_not_found("/admin/students2", "admin")
        );
    }

    #[rstest::rstest]
    #[case::admin_dashboard("admin", "/dashboard", "/admin\n")]
    #[case::parent_dashboard("parent", "/dashboard", "/parent\n")]
    #[case::nested("staff", "/classes", "/staff/classes\n")]
    fn test_role_path(#[case] role: &str, #[case] base: &str, #[case] expected: &str) {
        let out = run_args(&["portal-core", "role-path", "--role", role, base]).unwrap();
        assert_eq!(out, expected);
    }
}
