use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row at line {line} of {path} has {fields} fields, column {column} requested")]
    MissingColumn {
        path: PathBuf,
        line: u64,
        column: usize,
        fields: usize,
    },

    #[error("Malformed quoting in {path} at line {line}: {reason}")]
    MalformedQuote {
        path: PathBuf,
        line: u64,
        reason: &'static str,
    },

    #[error("Malformed CSV in {path}{}", line_suffix(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },
}

impl ImportError {
    /// True when the file itself could not be used, as opposed to a bad row inside it.
    pub fn is_input_unreadable(&self) -> bool {
        matches!(self, ImportError::Open { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            ImportError::Open { path, .. }
            | ImportError::MissingColumn { path, .. }
            | ImportError::MalformedQuote { path, .. }
            | ImportError::Parse { path, .. } => path,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
