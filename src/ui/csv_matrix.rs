//! Integer matrices from header-less CSV.

use super::InputError;
use std::io::Read;
use std::path::Path;

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Row lengths are checked by whoever consumes the matrix.
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn csv_error(err: csv::Error) -> InputError {
    let line = err.position().map_or(0, |p| p.line());
    match err.into_kind() {
        csv::ErrorKind::Io(io) => InputError::Io(io),
        kind => InputError::Csv {
            line,
            message: format!("{kind:?}"),
        },
    }
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Vec<i64>>, InputError> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        let row = record
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.parse::<i64>().map_err(|_| InputError::BadCell {
                    line,
                    column: i + 1,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parses every record of `reader` as a row of integers.
///
/// # Examples
///
/// ```
/// let rows = u_cuckoo::ui::parse_integer_csv("1,1,1,0\n2, 2 ,0,0\n".as_bytes()).unwrap();
/// assert_eq!(rows, vec![vec![1, 1, 1, 0], vec![2, 2, 0, 0]]);
/// ```
pub fn parse_integer_csv<R: Read>(reader: R) -> Result<Vec<Vec<i64>>, InputError> {
    collect(builder().from_reader(reader))
}

/// Reads the CSV file at `path` as an integer matrix.
pub fn read_integer_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>, InputError> {
    let reader = builder().from_path(path).map_err(csv_error)?;
    collect(reader)
}
