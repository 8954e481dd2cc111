use crate::core::domain_counter::count_by_domain;
use crate::domain::error::ImportResult;
use crate::domain::models::{DomainCount, ImportConfig, ImportSummary, SortOrder};
use crate::infra::csv_reader::read_csv_column;
use crate::infra::diagnostics::{DiagnosticSink, LogSink};
use log::info;
use std::path::Path;

/// Zero-based index of the email field in a customer export.
pub const EMAIL_COLUMN: usize = 2;

/// Counts customers per email domain in the CSV file at `path`.
///
/// Invalid emails are logged and skipped. Open and row errors are returned to
/// the caller, which decides whether they are fatal.
pub fn count_emails_by_domain(
    path: impl AsRef<Path>,
    order: SortOrder,
) -> ImportResult<Vec<DomainCount>> {
    let mut sink = LogSink::new();
    count_emails_by_domain_with(path, EMAIL_COLUMN, order, &mut sink)
}

pub fn count_emails_by_domain_with(
    path: impl AsRef<Path>,
    column: usize,
    order: SortOrder,
    sink: &mut dyn DiagnosticSink,
) -> ImportResult<Vec<DomainCount>> {
    let emails = read_csv_column(path, column)?;
    Ok(count_by_domain(emails, order, sink))
}

pub fn run_import(config: &ImportConfig) -> ImportResult<(Vec<DomainCount>, ImportSummary)> {
    info!(
        "Importing {} (column {}, {:?})",
        config.input_path, config.email_column, config.sort_order
    );

    let mut sink = LogSink::new();
    let domains = count_emails_by_domain_with(
        &config.input_path,
        config.email_column,
        config.sort_order,
        &mut sink,
    )?;
    let counted: u64 = domains.iter().map(|d| d.emails_count).sum();

    let summary = ImportSummary {
        rows_read: counted as usize + sink.skipped(),
        invalid_emails: sink.skipped(),
        domains: domains.len(),
    };
    info!(
        "{} rows, {} invalid emails, {} domains",
        summary.rows_read, summary.invalid_emails, summary.domains
    );

    Ok((domains, summary))
}
