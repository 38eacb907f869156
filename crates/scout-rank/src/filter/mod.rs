//! Structured filters: dimensions, filter sets, the default policy and the predicate engine.

mod dimension;
mod policy;
mod predicate;
mod set;

pub use dimension::{Dimension, DimensionKind, Field};
pub use policy::DefaultPolicy;
pub use predicate::{
    FieldValue, contains_ignore_case, dimension_passes, field_value, first_failure, passes,
};
pub use set::FilterSet;
