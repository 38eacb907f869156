//! The filter set: accepted values per dimension.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Dimension;
use crate::error::FilterError;

/// Accepted values per dimension. A dimension with no values is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSet {
    /// Only active dimensions are stored; every list is non-empty.
    values: BTreeMap<Dimension, Vec<String>>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to a dimension.
    ///
    /// Values are trimmed. Blank values and exact duplicates are ignored.
    pub fn add(&mut self, dimension: Dimension, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return;
        }
        let list = self.values.entry(dimension).or_default();
        if !list.iter().any(|v| v == value) {
            list.push(value.to_string());
        }
    }

    /// Replaces a dimension's values. An empty list deactivates it.
    pub fn set<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.values.remove(&dimension);
        for value in values {
            self.add(dimension, value);
        }
    }

    /// Builder form of [`FilterSet::set`].
    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set(dimension, values);
        self
    }

    /// Parses `dimension=value` and adds the value.
    pub fn add_spec(&mut self, spec: &str) -> Result<(), FilterError> {
        let Some((name, value)) = spec.split_once('=') else {
            return Err(FilterError::MalformedSpec(spec.to_string()));
        };
        if value.trim().is_empty() {
            return Err(FilterError::MalformedSpec(spec.to_string()));
        }
        let dimension = name.trim().parse::<Dimension>()?;
        self.add(dimension, value);
        Ok(())
    }

    /// Deactivates one dimension.
    pub fn clear_dimension(&mut self, dimension: Dimension) {
        self.values.remove(&dimension);
    }

    /// Deactivates every dimension.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Accepted values for a dimension, empty when inactive.
    pub fn values(&self, dimension: Dimension) -> &[String] {
        self.values.get(&dimension).map_or(&[], Vec::as_slice)
    }

    /// True when the dimension has at least one value.
    pub fn is_active(&self, dimension: Dimension) -> bool {
        self.values.contains_key(&dimension)
    }

    /// True when any dimension is active.
    pub fn has_active(&self) -> bool {
        !self.values.is_empty()
    }

    /// Active dimensions with their values, in dimension order.
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &[String])> {
        self.values.iter().map(|(dim, values)| (*dim, values.as_slice()))
    }
}
