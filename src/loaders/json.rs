use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::EtlError;
use crate::record::Record;

use super::Loader;

pub struct JsonLoader;

impl Loader for JsonLoader {
    /// Parses the whole file as a JSON array of record objects. Field
    /// names are case-sensitive and capitalized (`Id`, `Name`, ...).
    fn load(&self, input_path: &Path) -> Result<Vec<Record>, EtlError> {
        let file = File::open(input_path).map_err(|e| {
            EtlError::Format(format!("failed to open {}: {}", input_path.display(), e))
        })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| EtlError::Format(format!("not a JSON array of records: {}", e)))
    }
}
