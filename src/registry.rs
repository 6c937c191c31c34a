//! Named list of suites and selection by name.

use thiserror::Error;

use crate::suites::{default_suites, Suite};

/// Selects every registered suite.
pub const ALL: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown suite '{name}' (available: {available})")]
    UnknownSuite { name: String, available: String },
    #[error("suite '{0}' is registered twice")]
    Duplicate(String),
}

pub struct Registry {
    suites: Vec<Box<dyn Suite>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { suites: Vec::new() }
    }

    pub fn with_default_suites() -> Self {
        Self {
            suites: default_suites(),
        }
    }

    pub fn with_suite(mut self, suite: impl Suite + 'static) -> Result<Self, RegistryError> {
        self.register(Box::new(suite))?;
        Ok(self)
    }

    pub fn register(&mut self, suite: Box<dyn Suite>) -> Result<(), RegistryError> {
        if self.suites.iter().any(|s| s.name() == suite.name()) {
            return Err(RegistryError::Duplicate(suite.name().to_string()));
        }
        self.suites.push(suite);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.suites.iter().map(|suite| suite.name()).collect()
    }

    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.suites
            .iter()
            .map(|suite| (suite.name(), suite.description()))
            .collect()
    }

    /// Resolve requested names to suites. Registry order wins over request
    /// order and repeated names collapse; `all` selects everything. Every
    /// other name must be registered, `all` or not.
    pub fn select(&mut self, requested: &[String]) -> Result<Vec<&mut dyn Suite>, RegistryError> {
        let names = self.names();
        if let Some(unknown) = requested
            .iter()
            .find(|name| name.as_str() != ALL && !names.contains(&name.as_str()))
        {
            return Err(RegistryError::UnknownSuite {
                name: unknown.clone(),
                available: names.join(", "),
            });
        }
        let select_all = requested.iter().any(|name| name == ALL);

        let mut selected: Vec<&mut dyn Suite> = Vec::new();
        for suite in self.suites.iter_mut() {
            if select_all || requested.iter().any(|name| name == suite.name()) {
                selected.push(suite.as_mut());
            }
        }
        Ok(selected)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_default_suites()
    }
}
