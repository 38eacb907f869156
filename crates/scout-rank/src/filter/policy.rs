//! Default values substituted for absent candidate fields.

use std::collections::BTreeMap;

use scout_config::DEFAULT_POLICY;

use super::Field;
use crate::error::FilterError;

/// Named table of values that stand in for absent candidate fields during filtering.
///
/// The built-in table reads a missing industry as "Technology" and a missing
/// likeliness to respond as "Medium". [`DefaultPolicy::none`] disables substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPolicy {
    /// Substitutes keyed by field.
    values: BTreeMap<Field, String>,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        let values = DEFAULT_POLICY
            .iter()
            .filter_map(|(key, value)| Some((key.parse::<Field>().ok()?, (*value).to_string())))
            .collect();
        Self { values }
    }
}

impl DefaultPolicy {
    /// A policy that never substitutes.
    pub fn none() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builds a policy from a `[defaults]` table keyed by field name.
    ///
    /// Blank values are skipped.
    pub fn from_table(table: &BTreeMap<String, String>) -> Result<Self, FilterError> {
        let mut values = BTreeMap::new();
        for (key, value) in table {
            let field = key.parse::<Field>()?;
            let value = value.trim();
            if !value.is_empty() {
                values.insert(field, value.to_string());
            }
        }
        Ok(Self { values })
    }

    /// Builder that sets one substitute.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// The substitute for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// True when no substitutes are configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Substitutes in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}
