pub mod csv;
pub mod json;

use std::path::Path;

use crate::error::EtlError;
use crate::format_detection::FileFormat;
use crate::record::Record;

pub use self::csv::CsvLoader;
pub use self::json::JsonLoader;

/// Common trait for all input loaders.
pub trait Loader {
    /// Read the entire input file into an ordered sequence of records.
    fn load(&self, input_path: &Path) -> Result<Vec<Record>, EtlError>;
}

/// Loads `input_path` with the loader matching `format` and rejects empty
/// inputs, so an empty file can never silently produce an empty output.
pub fn load_records(input_path: &Path, format: FileFormat) -> Result<Vec<Record>, EtlError> {
    let records = match format {
        FileFormat::Csv => CsvLoader.load(input_path)?,
        FileFormat::Json => JsonLoader.load(input_path)?,
    };
    if records.is_empty() {
        return Err(EtlError::EmptyInput);
    }
    Ok(records)
}
