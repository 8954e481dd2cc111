use crate::domain::models::{DomainCount, ImportSummary, ReportFormat};
use log::debug;

const DOMAIN_HEADER: &str = "DOMAIN";
const COUNT_HEADER: &str = "COUNT";

fn format_table(domains: &[DomainCount]) -> String {
    let name_width = domains
        .iter()
        .map(|d| d.name.chars().count())
        .chain(std::iter::once(DOMAIN_HEADER.len()))
        .max()
        .unwrap_or(DOMAIN_HEADER.len());
    let count_width = domains
        .iter()
        .map(|d| d.emails_count.to_string().len())
        .chain(std::iter::once(COUNT_HEADER.len()))
        .max()
        .unwrap_or(COUNT_HEADER.len());

    let mut result = String::new();
    result.push_str(&format!(
        "{:<name_width$}  {:>count_width$}\n",
        DOMAIN_HEADER, COUNT_HEADER
    ));
    for domain in domains {
        result.push_str(&format!(
            "{:<name_width$}  {:>count_width$}\n",
            domain.name, domain.emails_count
        ));
    }
    result
}

fn format_csv(domains: &[DomainCount]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["domain", "count"])?;
    for domain in domains {
        let count = domain.emails_count.to_string();
        writer.write_record([domain.name.as_str(), count.as_str()])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders the entries in the order given.
pub fn format_report(domains: &[DomainCount], format: ReportFormat) -> anyhow::Result<String> {
    debug!("Formatting {} domains as {:?}", domains.len(), format);
    match format {
        ReportFormat::Table => Ok(format_table(domains)),
        ReportFormat::Csv => format_csv(domains),
    }
}

pub fn format_summary(summary: &ImportSummary) -> String {
    format!(
        "{} rows read, {} invalid emails skipped, {} domains",
        summary.rows_read, summary.invalid_emails, summary.domains
    )
}
