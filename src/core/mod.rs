pub mod domain_counter;
pub mod importer;
pub mod report;
