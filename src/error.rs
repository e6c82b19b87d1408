use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of the conversion pipeline. Every variant aborts the run;
/// there is no retry or recovery path, and no output file is written once
/// an error is detected during loading or sorting.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Bad or missing command-line option.
    #[error("{0}")]
    Config(String),

    /// Malformed input document (JSON shape, unreadable CSV, bad Id cell).
    #[error("malformed input: {0}")]
    Format(String),

    /// CSV row with fewer than the five expected columns.
    #[error("row {line} has {found} columns, expected 5")]
    RowShape { line: usize, found: usize },

    /// A Discovered value that is not a calendar date.
    #[error("'{value}' is not a YYYY-MM-DD date")]
    DateParse { value: String },

    /// A record with an empty Status, which has no first character to
    /// sort by.
    #[error("record {id} has an empty Status and cannot be sorted by status")]
    EmptyStatus { id: i64 },

    /// The input parsed cleanly but produced zero records.
    #[error("input file contains no records")]
    EmptyInput,

    /// The output file could not be created or written.
    #[error("failed to write {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
