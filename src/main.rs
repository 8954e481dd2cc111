use customer_importer::cli::commands::{exit_code, run};
use log::error;

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}
