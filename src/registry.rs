//! Name-keyed reporter registry.
//!
//! Populated once at startup via [`Registry::built_in`] and read-only
//! afterwards. Adding a report kind is one `register` call; resolution and
//! dispatch never change.

use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::report::average_gdp::AverageGdp;

type Constructor = fn() -> Box<dyn Reporter>;

/// Mapping from report name to a zero-argument reporter constructor.
pub struct Registry {
    entries: Vec<(&'static str, Constructor)>,
}

impl Registry {
    /// Empty registry, mainly useful in tests.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding every built-in report kind.
    pub fn built_in() -> Self {
        let mut registry = Self::new();
        registry.register("average-gdp", || Box::new(AverageGdp));
        registry
    }

    /// Associate `name` with a reporter constructor. Last registration for
    /// a name wins; registration happens only during startup.
    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, constructor));
    }

    /// Instantiate a fresh reporter for `name`.
    ///
    /// ### Errors
    /// [`Error::UnknownReport`] listing every registered name when `name`
    /// is absent.
    pub fn create(&self, name: &str) -> Result<Box<dyn Reporter>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, constructor)| constructor())
            .ok_or_else(|| Error::UnknownReport {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Registered report names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::built_in()
    }
}
