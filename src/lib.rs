//! Counts customers per email domain from a CSV export.
//!
//! ```no_run
//! use customer_importer::{SortOrder, count_emails_by_domain};
//!
//! let domains = count_emails_by_domain("customers.csv", SortOrder::Descending)?;
//! for domain in &domains {
//!     println!("{}\t{}", domain.name, domain.emails_count);
//! }
//! # Ok::<(), customer_importer::ImportError>(())
//! ```

pub mod cli;
pub mod core;
pub mod domain;
pub mod exitcode;
pub mod infra;

pub use crate::core::domain_counter::{count_by_domain, sort_domains, split_domain};
pub use crate::core::importer::{EMAIL_COLUMN, count_emails_by_domain, count_emails_by_domain_with};
pub use crate::domain::error::{ImportError, ImportResult};
pub use crate::domain::models::{DomainCount, SortOrder};
pub use crate::infra::csv_reader::read_csv_column;
pub use crate::infra::diagnostics::{CollectingSink, DiagnosticSink, LogSink};
