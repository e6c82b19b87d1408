use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One entry of the data set. Field names are capitalized on the wire
/// (`Id`, `Name`, ...) on both the JSON and CSV side.
///
/// `Id` is assumed unique in well-formed input but never validated;
/// duplicates pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// Date string in `YYYY-MM-DD` form; parsed only when sorting by date.
    pub discovered: String,
    pub description: String,
    pub status: String,
}

/// A named column of the record schema, used to restrict and order the
/// fields emitted in CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Discovered,
    Description,
    Status,
}

impl Column {
    /// All five columns in canonical order, the default for CSV output.
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Name,
        Column::Discovered,
        Column::Description,
        Column::Status,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::Name => "Name",
            Column::Discovered => "Discovered",
            Column::Description => "Description",
            Column::Status => "Status",
        }
    }

    /// Extracts this column's value from a record as a CSV cell.
    /// Explicit accessor table; `Id` is the only non-string field.
    pub fn project(self, record: &Record) -> String {
        match self {
            Column::Id => record.id.to_string(),
            Column::Name => record.name.clone(),
            Column::Discovered => record.discovered.clone(),
            Column::Description => record.description.clone(),
            Column::Status => record.status.clone(),
        }
    }
}

impl FromStr for Column {
    type Err = String;

    /// Case-sensitive: column names must be capitalized exactly as in the
    /// schema.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Column::Id),
            "Name" => Ok(Column::Name),
            "Discovered" => Ok(Column::Discovered),
            "Description" => Ok(Column::Description),
            "Status" => Ok(Column::Status),
            _ => Err(format!(
                "invalid column '{}', expected one of Id, Name, Discovered, Description, Status",
                s
            )),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
