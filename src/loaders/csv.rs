use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::EtlError;
use crate::record::Record;

use super::Loader;

pub struct CsvLoader;

impl Loader for CsvLoader {
    /// Parses headerless comma-separated rows in the fixed column order
    /// Id, Name, Discovered, Description, Status. Columns past the fifth
    /// are ignored; fewer than five is a row-shape error.
    fn load(&self, input_path: &Path) -> Result<Vec<Record>, EtlError> {
        let file = File::open(input_path).map_err(|e| {
            EtlError::Format(format!("failed to open {}: {}", input_path.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let line = i + 1;
            let row = result
                .map_err(|e| EtlError::Format(format!("unreadable CSV row {}: {}", line, e)))?;
            if row.len() < 5 {
                return Err(EtlError::RowShape {
                    line,
                    found: row.len(),
                });
            }
            let id = row[0].parse::<i64>().map_err(|_| {
                EtlError::Format(format!("row {}: Id '{}' is not an integer", line, &row[0]))
            })?;
            records.push(Record {
                id,
                name: row[1].to_string(),
                discovered: row[2].to_string(),
                description: row[3].to_string(),
                status: row[4].to_string(),
            });
        }
        Ok(records)
    }
}
