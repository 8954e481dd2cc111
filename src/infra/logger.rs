use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::Builder;
use log::{Level, debug, info};
use std::io::{self, Write};

pub const LOG_LEVEL_ENV: &str = "CUSTOMER_IMPORTER_LOG_LEVEL";

/// Warnings stay on by default: skipped emails are reported at `warn`.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for(verbosity));

    Builder::from_env(env)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

/// Banner on stderr so the report on stdout stays pipeable.
pub fn print_welcome_message() -> io::Result<()> {
    let mut stderr = io::stderr();

    stderr.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stderr, "📇 Customer Importer v{}", env!("CARGO_PKG_VERSION"))?;
    stderr.execute(ResetColor)?;

    debug!("Debug logging enabled");
    info!("Starting Customer Importer...");
    Ok(())
}
