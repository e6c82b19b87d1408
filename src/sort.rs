use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::EtlError;
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// Sort by the Discovered date (YYYY-MM-DD).
    Discovered,
    /// Sort by the first character of Status only.
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    /// Earliest date / lexically smallest key first.
    Ascending,
    Descending,
}

/// Reorders the sequence by the chosen field and direction, taking and
/// returning ownership. The sort is stable, so records with equal keys
/// keep their input order. All keys are computed up front, so a bad date
/// or an empty status fails the run before anything is reordered.
pub fn sort_records(
    records: Vec<Record>,
    field: SortField,
    direction: SortDirection,
) -> Result<Vec<Record>, EtlError> {
    match field {
        // First character only: "New" and "Nope" compare equal. Documented
        // behavior, quirk included.
        SortField::Status => sort_by_key(records, direction, |record| {
            record
                .status
                .chars()
                .next()
                .ok_or(EtlError::EmptyStatus { id: record.id })
        }),
        SortField::Discovered => sort_by_key(records, direction, |record| {
            NaiveDate::parse_from_str(&record.discovered, "%Y-%m-%d").map_err(|_| {
                EtlError::DateParse {
                    value: record.discovered.clone(),
                }
            })
        }),
    }
}

/// Decorate-sort-undecorate with a fallible key. Descending compares the
/// keys the other way around rather than reversing the result, so ties
/// keep input order in both directions.
fn sort_by_key<K, F>(
    records: Vec<Record>,
    direction: SortDirection,
    key: F,
) -> Result<Vec<Record>, EtlError>
where
    K: Ord,
    F: Fn(&Record) -> Result<K, EtlError>,
{
    let mut keyed = records
        .into_iter()
        .map(|record| key(&record).map(|k| (k, record)))
        .collect::<Result<Vec<_>, _>>()?;

    match direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, discovered: &str, status: &str) -> Record {
        Record {
            id,
            name: format!("record-{}", id),
            discovered: discovered.to_string(),
            description: String::new(),
            status: status.to_string(),
        }
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_discovered_ascending() {
        let input = vec![
            record(1, "2021-01-05", "New"),
            record(2, "2020-06-01", "Done"),
            record(3, "2020-12-31", "Open"),
        ];
        let sorted = sort_records(input, SortField::Discovered, SortDirection::Ascending).unwrap();
        assert_eq!(ids(&sorted), [2, 3, 1]);
    }

    #[test]
    fn test_discovered_descending_is_exact_reverse() {
        let input = vec![
            record(1, "2021-01-05", "New"),
            record(2, "2020-06-01", "Done"),
            record(3, "2020-12-31", "Open"),
        ];
        let asc =
            sort_records(input.clone(), SortField::Discovered, SortDirection::Ascending).unwrap();
        let desc = sort_records(input, SortField::Discovered, SortDirection::Descending).unwrap();
        let mut reversed = asc;
        reversed.reverse();
        assert_eq!(ids(&desc), ids(&reversed));
    }

    #[test]
    fn test_status_compares_first_character_only() {
        let input = vec![
            record(1, "2021-01-05", "New"),
            record(2, "2020-06-01", "Done"),
            record(3, "2020-12-31", "Nope"),
        ];
        let sorted = sort_records(input, SortField::Status, SortDirection::Ascending).unwrap();
        // 'D' < 'N'; "New" and "Nope" tie on 'N' and keep input order.
        assert_eq!(ids(&sorted), [2, 1, 3]);
    }

    #[test]
    fn test_status_descending_keeps_tie_order() {
        let input = vec![
            record(1, "2021-01-05", "New"),
            record(2, "2020-06-01", "Done"),
            record(3, "2020-12-31", "Nope"),
        ];
        let sorted = sort_records(input, SortField::Status, SortDirection::Descending).unwrap();
        assert_eq!(ids(&sorted), [1, 3, 2]);
    }

    #[test]
    fn test_empty_status_fails() {
        let input = vec![record(1, "2021-01-05", "New"), record(2, "2020-06-01", "")];
        let err = sort_records(input, SortField::Status, SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, EtlError::EmptyStatus { id: 2 }));
    }

    #[test]
    fn test_bad_date_fails() {
        let input = vec![
            record(1, "2021-01-05", "New"),
            record(2, "01/05/2021", "Done"),
        ];
        let err = sort_records(input, SortField::Discovered, SortDirection::Ascending).unwrap_err();
        match err {
            EtlError::DateParse { value } => assert_eq!(value, "01/05/2021"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_impossible_calendar_date_fails() {
        let input = vec![record(1, "2021-02-30", "New")];
        let err = sort_records(input, SortField::Discovered, SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, EtlError::DateParse { .. }));
    }
}
