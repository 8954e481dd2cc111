use crate::cli::value_enum::{CliReportFormat, CliSortOrder};
use crate::core::importer::{EMAIL_COLUMN, run_import};
use crate::core::report::{format_report, format_summary};
use crate::domain::error::ImportError;
use crate::domain::models::ImportConfig;
use crate::exitcode;
use crate::infra::logger::{print_welcome_message, setup_logger};
use crate::infra::output::write_output;
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "customer-importer", version)]
#[command(about = "Count customers per email domain in a CSV export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count emails per domain and print them sorted by count
    Count {
        /// CSV file with a header row
        path: String,

        /// Zero-based index of the email column
        #[arg(long, default_value_t = EMAIL_COLUMN)]
        column: usize,

        #[arg(long, value_enum, default_value_t = CliSortOrder::Desc)]
        sort: CliSortOrder,

        #[arg(long, value_enum, default_value_t = CliReportFormat::Table)]
        format: CliReportFormat,

        #[arg(long)]
        output: Option<String>,

        #[arg(long)]
        clipboard: bool,

        /// Do not print the summary line
        #[arg(short, long)]
        quiet: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Count {
            path,
            column,
            sort,
            format,
            output,
            clipboard,
            quiet,
        } => {
            if cli.verbose > 0 {
                print_welcome_message()?;
            }
            info!("Starting count command");
            debug!(
                "Command parameters: path={}, column={}, sort={:?}, format={:?}, output={:?}, clipboard={}",
                path, column, sort, format, output, clipboard
            );

            let config = ImportConfig {
                input_path: path,
                email_column: column,
                sort_order: sort.into(),
                format: format.into(),
                output_path: output,
                clipboard,
            };

            count_domains(&config, quiet)?;
        }
    }
    Ok(())
}

fn count_domains(config: &ImportConfig, quiet: bool) -> anyhow::Result<()> {
    let (domains, summary) = run_import(config)?;

    info!("Formatting report");
    let formatted = format_report(&domains, config.format)?;

    info!("Writing report");
    write_output(&formatted, config.output_path.clone(), config.clipboard)
        .context("Failed to write report")?;

    if !quiet {
        eprintln!("{}", format_summary(&summary));
    }
    Ok(())
}

/// Maps a failed run to a process exit code, keeping open and row errors apart.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ImportError>() {
        Some(ImportError::Open { .. }) => exitcode::NOINPUT,
        Some(
            ImportError::MissingColumn { .. }
            | ImportError::MalformedQuote { .. }
            | ImportError::Parse { .. },
        ) => exitcode::DATAERR,
        None if err.chain().any(|cause| cause.is::<std::io::Error>()) => exitcode::IOERR,
        None => exitcode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ReportFormat, SortOrder};
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "customer-importer",
            "-vv",
            "count",
            "customers.csv",
            "--column",
            "3",
            "--sort",
            "asc",
            "--format",
            "csv",
            "--output",
            "report.csv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Count {
                path,
                column,
                sort,
                format,
                output,
                clipboard,
                quiet,
            } => {
                assert_eq!(path, "customers.csv");
                assert_eq!(column, 3);
                assert_eq!(SortOrder::from(sort), SortOrder::Ascending);
                assert_eq!(ReportFormat::from(format), ReportFormat::Csv);
                assert_eq!(output, Some("report.csv".to_string()));
                assert!(!clipboard);
                assert!(!quiet);
            }
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["customer-importer", "count", "customers.csv"]).unwrap();

        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Count {
                column,
                sort,
                format,
                output,
                ..
            } => {
                assert_eq!(column, EMAIL_COLUMN);
                assert_eq!(sort, CliSortOrder::Desc);
                assert_eq!(format, CliReportFormat::Table);
                assert_eq!(output, None);
            }
        }
    }

    #[test]
    fn test_cli_sort_alias() {
        let cli = Cli::try_parse_from([
            "customer-importer",
            "count",
            "customers.csv",
            "--sort",
            "descending",
        ])
        .unwrap();

        let Commands::Count { sort, .. } = cli.command;
        assert_eq!(sort, CliSortOrder::Desc);
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        let result = Cli::try_parse_from([
            "customer-importer",
            "count",
            "customers.csv",
            "--sort",
            "random",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exit_codes() {
        let open = anyhow::Error::new(ImportError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(exit_code(&open), exitcode::NOINPUT);

        let short_row = anyhow::Error::new(ImportError::MissingColumn {
            path: PathBuf::from("customers.csv"),
            line: 2,
            column: 2,
            fields: 1,
        });
        assert_eq!(exit_code(&short_row), exitcode::DATAERR);

        let bad_quote = anyhow::Error::new(ImportError::MalformedQuote {
            path: PathBuf::from("customers.csv"),
            line: 2,
            reason: "quoted field not terminated",
        });
        assert_eq!(exit_code(&bad_quote), exitcode::DATAERR);

        let write_failed = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))
        .context("Failed to write report");
        assert_eq!(exit_code(&write_failed), exitcode::IOERR);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), exitcode::FAILURE);
    }
}
