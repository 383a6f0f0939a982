//! The `average-gdp` report: arithmetic-mean GDP per country, descending.

use crate::error::{Error, Result};
use crate::models::{ReportData, ReportRow, Row};
use crate::report::Reporter;
use comfy_table::Table;
use comfy_table::presets::ASCII_FULL;
use std::collections::HashMap;

const REQUIRED: &str = "'country' and 'gdp'";

/// Averages the `gdp` column per distinct `country` value.
///
/// Country keys are taken literally: names differing only by case or
/// whitespace form distinct groups. Countries with equal means keep their
/// first-appearance order (the sort is stable).
#[derive(Debug, Default)]
pub struct AverageGdp;

impl Reporter for AverageGdp {
    fn generate(&self, dataset: &[Row]) -> Result<ReportData> {
        // Group in first-seen country order.
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

        for row in dataset {
            let (country, gdp) = match (row.get("country"), row.get("gdp")) {
                (Some(c), Some(g)) => (c, g),
                _ => return Err(Error::Schema { required: REQUIRED }),
            };
            let value = gdp.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
                column: "GDP",
                value: gdp.to_string(),
            })?;
            if !groups.contains_key(country) {
                order.push(country.to_string());
            }
            groups.entry(country.to_string()).or_default().push(value);
        }

        let mut rows: Vec<ReportRow> = order
            .into_iter()
            .map(|country| {
                let values = &groups[&country];
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                ReportRow::new(country, mean)
            })
            .collect();

        // Stable sort: ties keep first-appearance order.
        rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        Ok(rows)
    }

    fn format(&self, data: &[ReportRow]) -> String {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.set_header(vec!["Country", "Average GDP (billions USD)"]);
        for row in data {
            table.add_row(vec![row.label.clone(), format!("{:.2}", row.value)]);
        }
        table.to_string()
    }
}
