use std::path::Path;

use crate::error::EtlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// The format the output is written in: always the opposite of the
    /// input format.
    pub fn opposite(self) -> FileFormat {
        match self {
            FileFormat::Csv => FileFormat::Json,
            FileFormat::Json => FileFormat::Csv,
        }
    }

    /// Fixed output filename for this format.
    pub fn output_file_name(self) -> &'static str {
        match self {
            FileFormat::Csv => "output.csv",
            FileFormat::Json => "output.json",
        }
    }
}

/// Detects the input format from the path extension. Only `.csv` and
/// `.json` are accepted (case-insensitive); anything else is a
/// configuration error. Pure path inspection, runs before any I/O.
pub fn detect_file_format(file_path: &Path) -> Result<FileFormat, EtlError> {
    let ext = file_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("csv") => Ok(FileFormat::Csv),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(EtlError::Config(format!(
            "input extension of '{}' is not .json or .csv",
            file_path.display()
        ))),
    }
}
