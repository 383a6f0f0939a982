//! Report generation: the reporter contract and the concrete report kinds.
//!
//! A reporter is a named computation from a loaded dataset to a formatted
//! text table. New report kinds implement [`Reporter`] and add one
//! registration line in [`crate::Registry::built_in`]; the dispatch code
//! never changes.

pub mod average_gdp;

use crate::error::Result;
use crate::models::{ReportData, ReportRow, Row};

/// Capability contract every report kind implements.
pub trait Reporter {
    /// Compute report rows from the dataset.
    ///
    /// Pure function of its input. Required columns are checked per row on
    /// first use; the first offending row fails the whole call, so no
    /// partial aggregate ever escapes.
    fn generate(&self, dataset: &[Row]) -> Result<ReportData>;

    /// Render report rows as a human-readable table.
    ///
    /// Infallible: any well-formed output of [`Reporter::generate`]
    /// formats cleanly.
    fn format(&self, data: &[ReportRow]) -> String;
}
