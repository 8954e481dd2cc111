use log::{Level, log};

/// Level at which `LogSink` reports skipped entries.
pub const INVALID_EMAIL_LEVEL: Level = Level::Warn;

/// Receives entries the aggregator had to drop.
pub trait DiagnosticSink {
    fn invalid_email(&mut self, raw: &str);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&str),
{
    fn invalid_email(&mut self, raw: &str) {
        self(raw)
    }
}

/// Reports through the `log` facade and keeps a running count.
#[derive(Debug, Default)]
pub struct LogSink {
    skipped: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl DiagnosticSink for LogSink {
    fn invalid_email(&mut self, raw: &str) {
        self.skipped += 1;
        log!(INVALID_EMAIL_LEVEL, "{}", invalid_email_message(raw));
    }
}

fn invalid_email_message(raw: &str) -> String {
    format!("Found invalid email '{}', skipping", raw)
}

#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl DiagnosticSink for CollectingSink {
    fn invalid_email(&mut self, raw: &str) {
        self.entries.push(raw.to_string());
    }
}
