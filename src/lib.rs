//! macro-report
//!
//! A lightweight Rust library for aggregating tabular macro-economic data
//! and rendering named reports. Pairs with the `macro-report` CLI.
//!
//! ### Features
//! - Load one or more CSV files into a header-keyed dataset
//! - Pluggable reporters resolved by name through a registry
//! - One built-in report: average GDP per country, sorted descending
//! - Bordered text-table output suitable for diffing
//!
//! ### Example
//! ```no_run
//! use macro_report::{Registry, loader};
//!
//! let dataset = loader::load_all(&["gdp_2022.csv".into(), "gdp_2023.csv".into()])?;
//! let reporter = Registry::built_in().create("average-gdp")?;
//! let data = reporter.generate(&dataset)?;
//! println!("{}", reporter.format(&data));
//! # Ok::<(), macro_report::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod registry;
pub mod report;

pub use error::{Error, Result};
pub use models::{Dataset, ReportData, ReportRow, Row};
pub use registry::Registry;
pub use report::Reporter;
