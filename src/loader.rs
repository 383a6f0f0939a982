//! CSV loading: single files and ordered multi-file aggregation.

use crate::error::{Error, Result};
use crate::models::{Dataset, Row};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

/// Load one CSV file into a dataset.
///
/// The first record is the header row and keys every following row. Rows
/// whose every cell is the empty string are skipped. The file handle is
/// scoped to this call and released on all exit paths.
///
/// ### Errors
/// - [`Error::FileNotFound`] if the path does not resolve
/// - [`Error::NoHeaders`] if the header record has no non-empty fields
/// - [`Error::Parse`] on malformed CSV (including ragged rows)
/// - [`Error::EmptyDataset`] if no data rows remain after skipping blanks
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let mut rdr = match ReaderBuilder::new().from_path(path) {
        Ok(rdr) => rdr,
        Err(e) => {
            if let csv::ErrorKind::Io(io) = e.kind() {
                if io.kind() == std::io::ErrorKind::NotFound {
                    return Err(Error::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
            }
            return Err(Error::Parse {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let headers = rdr
        .headers()
        .map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(Error::NoHeaders {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row = Row::new(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect(),
        );
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(Error::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load several CSV files, concatenating rows in file-then-row order.
///
/// Every path is attempted even after a failure; if any path failed, the
/// result is an [`Error::Aggregate`] listing one message per failing path,
/// in input order. A dataset is returned only when all paths load.
pub fn load_all(paths: &[PathBuf]) -> Result<Dataset> {
    let mut all = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        match load(path) {
            Ok(rows) => all.extend(rows),
            Err(e @ Error::FileNotFound { .. }) => failures.push(e.to_string()),
            Err(e) => failures.push(format!("Error reading {}: {}", path.display(), e)),
        }
    }

    if !failures.is_empty() {
        return Err(Error::Aggregate { failures });
    }
    Ok(all)
}
