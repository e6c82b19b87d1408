use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::EtlError;
use crate::format_detection::FileFormat;
use crate::record::{Column, Record};

/// Serializes the sorted records into `out_dir` as `output.json` (all
/// fields, indented array) or `output.csv` (only the chosen columns, in
/// the given order, no header row). Returns the written path.
pub fn write_output(
    records: &[Record],
    format: FileFormat,
    columns: &[Column],
    out_dir: &Path,
) -> Result<PathBuf, EtlError> {
    let output_path = out_dir.join(format.output_file_name());
    match format {
        FileFormat::Json => write_json(records, &output_path)?,
        FileFormat::Csv => write_csv(records, columns, &output_path)?,
    }
    Ok(output_path)
}

fn write_json(records: &[Record], path: &Path) -> Result<(), EtlError> {
    let file = File::create(path).map_err(|e| io_write(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| io_write(path, std::io::Error::from(e)))?;
    writer.flush().map_err(|e| io_write(path, e))
}

fn write_csv(records: &[Record], columns: &[Column], path: &Path) -> Result<(), EtlError> {
    let file = File::create(path).map_err(|e| io_write(path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for record in records {
        // Same column order for every row.
        let row: Vec<String> = columns.iter().map(|c| c.project(record)).collect();
        writer
            .write_record(&row)
            .map_err(|e| io_write(path, std::io::Error::other(e)))?;
    }
    writer.flush().map_err(|e| io_write(path, e))
}

fn io_write(path: &Path, source: std::io::Error) -> EtlError {
    EtlError::IoWrite {
        path: path.to_path_buf(),
        source,
    }
}
