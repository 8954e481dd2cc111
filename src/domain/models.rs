#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub name: String,
    pub emails_count: u64,
}

impl DomainCount {
    pub fn new(name: impl Into<String>, emails_count: u64) -> Self {
        Self {
            name: name.into(),
            emails_count,
        }
    }
}

/// Direction of the count comparison. Ties keep no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Csv,
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub input_path: String,
    pub email_column: usize,
    pub sort_order: SortOrder,
    pub format: ReportFormat,
    pub output_path: Option<String>,
    pub clipboard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub rows_read: usize,
    pub invalid_emails: usize,
    pub domains: usize,
}
