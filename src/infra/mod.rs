pub mod csv_reader;
pub mod diagnostics;
pub mod logger;
pub mod output;
