use crate::domain::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("line {line}: {reason}")]
struct QuoteError {
    line: u64,
    reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Checks RFC 4180 quoting on the bytes as the CSV parser pulls them.
///
/// The `csv` crate accepts stray quotes and an unterminated quoted field,
/// merging the rest of the file into one value. This wrapper fails the read
/// instead, with the line where the problem starts.
struct QuoteCheck<R> {
    inner: R,
    state: QuoteState,
    line: u64,
    quote_line: u64,
}

impl<R: Read> QuoteCheck<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
            line: 1,
            quote_line: 1,
        }
    }

    fn fail(&self, line: u64, reason: &'static str) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, QuoteError { line, reason })
    }

    fn scan(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &byte in bytes {
            self.state = match (self.state, byte) {
                (QuoteState::FieldStart, b'"') => {
                    self.quote_line = self.line;
                    QuoteState::Quoted
                }
                (QuoteState::FieldStart | QuoteState::Unquoted, b',' | b'\n' | b'\r') => {
                    QuoteState::FieldStart
                }
                (QuoteState::Unquoted, b'"') => {
                    return Err(self.fail(self.line, "bare \" in non-quoted field"));
                }
                (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
                (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
                (QuoteState::Quoted, _) => QuoteState::Quoted,
                (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
                (QuoteState::QuoteInQuoted, b',' | b'\n' | b'\r') => QuoteState::FieldStart,
                (QuoteState::QuoteInQuoted, _) => {
                    return Err(self.fail(self.line, "extraneous \" in quoted field"));
                }
            };
            if byte == b'\n' {
                self.line += 1;
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for QuoteCheck<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && self.state == QuoteState::Quoted {
            return Err(self.fail(self.quote_line, "quoted field not terminated"));
        }
        self.scan(&buf[..n])?;
        Ok(n)
    }
}

fn read_error(path: &Path, source: csv::Error) -> ImportError {
    if let csv::ErrorKind::Io(err) = source.kind() {
        if let Some(quote) = err.get_ref().and_then(|e| e.downcast_ref::<QuoteError>()) {
            return ImportError::MalformedQuote {
                path: path.to_path_buf(),
                line: quote.line,
                reason: quote.reason,
            };
        }
    }

    ImportError::Parse {
        path: path.to_path_buf(),
        line: source.position().map(|p| p.line()),
        source,
    }
}

/// Reads one column of a CSV file, skipping the header row.
///
/// Rows are pulled one at a time into a single reused record, so only the
/// returned values are held in memory. A row too short to hold `column` or
/// with broken quoting is an error, not a silent skip.
pub fn read_csv_column(path: impl AsRef<Path>, column: usize) -> ImportResult<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading column {} from {}", column, path.display());

    let file = fs::File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(QuoteCheck::new(file));

    let mut values = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|source| read_error(path, source))?;

        if !more {
            break;
        }

        match record.get(column) {
            Some(value) => values.push(value.to_string()),
            None => {
                return Err(ImportError::MissingColumn {
                    path: path.to_path_buf(),
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    column,
                    fields: record.len(),
                });
            }
        }
    }

    info!("Read {} values from {}", values.len(), path.display());
    Ok(values)
}
