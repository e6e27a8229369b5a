//! Read numeric columns from whitespace-separated text tables.
//!
//! Anything from a `#` or `@` to the end of a line is a comment (the latter
//! covers xmgrace headers). Lines with nothing left after removing comments
//! are skipped. Columns are numbered from 1, as on the command line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::utils::group_digits;

const COMMENT: [char; 2] = ['#', '@'];

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("cannot read `{path}`: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("columns are numbered from 1")]
    ColumnZero,

    #[error("`{path}` line {line}: no column {column} (line has {found})")]
    MissingColumn { path: PathBuf, line: usize, column: usize, found: usize },

    #[error("`{path}` line {line} column {column}: `{token}` is not a number")]
    NotANumber { path: PathBuf, line: usize, column: usize, token: String },

    #[error("`{path}` contains no data")]
    Empty { path: PathBuf },
}

/// Read the given (1-based) `columns` of the table in `path`.
///
/// Returns one `Vec` per requested column, in the order requested.
pub fn read_columns(path: &Path, columns: &[usize]) -> Result<Vec<Vec<f64>>, TableError> {
    if columns.contains(&0) { return Err(TableError::ColumnZero) }
    let io_error = |source| TableError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_error)?;
    let result = parse_columns(BufReader::new(file), path, columns)?;
    tracing::debug!("Read {} rows from {}", group_digits(result[0].len()), path.display());
    Ok(result)
}

/// Read a single (1-based) `column` of the table in `path`.
pub fn read_column(path: &Path, column: usize) -> Result<Vec<f64>, TableError> {
    let mut columns = read_columns(path, &[column])?;
    Ok(columns.swap_remove(0))
}

fn parse_columns(reader: impl BufRead, path: &Path, columns: &[usize]) -> Result<Vec<Vec<f64>>, TableError> {
    let mut result = vec![vec![]; columns.len()];
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TableError::Io { path: path.to_path_buf(), source })?;
        let line_number = n + 1;
        let data = line.split(COMMENT).next().unwrap_or_default();
        let tokens = data.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() { continue }
        for (&column, values) in columns.iter().zip(result.iter_mut()) {
            let token = tokens.get(column - 1)
                .ok_or_else(|| TableError::MissingColumn {
                    path: path.to_path_buf(), line: line_number, column, found: tokens.len()
                })?;
            let value = token.parse::<f64>()
                .map_err(|_| TableError::NotANumber {
                    path: path.to_path_buf(), line: line_number, column, token: token.to_string()
                })?;
            values.push(value);
        }
    }
    if result.first().map_or(true, Vec::is_empty) {
        return Err(TableError::Empty { path: path.to_path_buf() })
    }
    Ok(result)
}
