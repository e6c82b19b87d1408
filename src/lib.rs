pub mod error;
pub mod format_detection;
pub mod loaders;
pub mod output;
pub mod record;
pub mod sort;

// Re-export commonly used items for convenience
pub use error::EtlError;
pub use format_detection::{detect_file_format, FileFormat};
pub use loaders::{load_records, CsvLoader, JsonLoader, Loader};
pub use output::write_output;
pub use record::{Column, Record};
pub use sort::{sort_records, SortDirection, SortField};

use std::path::{Path, PathBuf};

/// Runs the full load -> sort -> write pipeline for one input file.
///
/// The input format is detected from the path extension and the output
/// lands in `out_dir` as `output.json` or `output.csv`, whichever is the
/// opposite format. `columns` only affects CSV output; JSON output always
/// carries all five fields. No output file is created if loading or
/// sorting fails.
pub fn run_pipeline(
    input_path: &Path,
    field: SortField,
    direction: SortDirection,
    columns: &[Column],
    out_dir: &Path,
) -> Result<PathBuf, EtlError> {
    let format = detect_file_format(input_path)?;

    let records = load_records(input_path, format)?;
    eprintln!(
        "Loaded {} records from {}",
        records.len(),
        input_path.display()
    );

    let records = sort_records(records, field, direction)?;

    let output_path = write_output(&records, format.opposite(), columns, out_dir)?;
    eprintln!("Output file: {}", output_path.display());

    Ok(output_path)
}
