use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use etl_sort::{run_pipeline, Column, SortDirection, SortField};

#[derive(clap::Parser, Debug)]
#[command(
    name = "etl-sort",
    about = "Reads a CSV or JSON record file, sorts it, and writes the result in the opposite format"
)]
struct Args {
    /// Input file path (.csv or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Field to sort by
    #[arg(long, value_enum, default_value = "discovered")]
    sortfield: SortField,

    /// Sort direction
    #[arg(long, value_enum, default_value = "ascending")]
    sortdirection: SortDirection,

    /// Columns to emit in CSV output, comma-separated and capitalized
    /// (subset of Id,Name,Discovered,Description,Status)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Id,Name,Discovered,Description,Status"
    )]
    columns: Vec<Column>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    run_pipeline(
        &args.input,
        args.sortfield,
        args.sortdirection,
        &args.columns,
        Path::new("."),
    )?;

    Ok(())
}
