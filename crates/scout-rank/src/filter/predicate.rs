//! Predicate evaluation of a filter set against one candidate.

use scout_record::CandidateRecord;

use super::{DefaultPolicy, Dimension, DimensionKind, Field, FilterSet};

/// Case-insensitive substring test shared by every filter and the location bonus.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A candidate field as seen by the predicate engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Field is absent or empty and the policy has no substitute.
    Absent,
    /// Single-valued field.
    One(&'a str),
    /// List-valued field.
    Many(&'a [String]),
}

impl FieldValue<'_> {
    /// True when any accepted value is a substring of the field (of any element for lists).
    fn matches_any(&self, accepted: &[String]) -> bool {
        match self {
            Self::Absent => false,
            Self::One(text) => accepted.iter().any(|v| contains_ignore_case(text, v)),
            Self::Many(items) => items
                .iter()
                .any(|item| accepted.iter().any(|v| contains_ignore_case(item, v))),
        }
    }
}

/// Reads a field from a candidate, falling back to the policy's substitute.
pub fn field_value<'a>(
    candidate: &'a CandidateRecord,
    field: Field,
    policy: &'a DefaultPolicy,
) -> FieldValue<'a> {
    let value = match field {
        Field::Title => one(&candidate.title),
        Field::Company => one(&candidate.company),
        Field::Schools => many(&candidate.schools),
        Field::Location => one(&candidate.location),
        Field::FundingRound => one(&candidate.funding_round),
        Field::LikelinessToRespond => one(&candidate.likeliness_to_respond),
        Field::Industry => one(&candidate.industry),
        Field::CompanyGrowth => one(&candidate.company_growth),
        Field::Investors => many(&candidate.investors),
        Field::Degree => one(&candidate.degree),
        Field::PastTitles => many(&candidate.past_titles),
        Field::CurrentTenure => one(&candidate.current_tenure),
        Field::YearsOfExperience => one(&candidate.years_of_experience),
        Field::GraduationYear => one(&candidate.graduation_year),
    };
    match (value, policy.get(field)) {
        (FieldValue::Absent, Some(substitute)) => FieldValue::One(substitute),
        (value, _) => value,
    }
}

/// Optional tag; blank counts as absent.
fn one(value: &Option<String>) -> FieldValue<'_> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => FieldValue::One(text),
        _ => FieldValue::Absent,
    }
}

/// List tag; empty counts as absent.
fn many(values: &[String]) -> FieldValue<'_> {
    if values.is_empty() {
        FieldValue::Absent
    } else {
        FieldValue::Many(values)
    }
}

/// Evaluates one active dimension.
pub fn dimension_passes(
    candidate: &CandidateRecord,
    dimension: Dimension,
    accepted: &[String],
    policy: &DefaultPolicy,
) -> bool {
    let value = field_value(candidate, dimension.field(), policy);
    match dimension.kind() {
        DimensionKind::Inclusion => value.matches_any(accepted),
        // Absent fields pass exclusions vacuously.
        DimensionKind::Exclusion => !value.matches_any(accepted),
    }
}

/// The first active dimension the candidate fails, if any.
pub fn first_failure(
    candidate: &CandidateRecord,
    filters: &FilterSet,
    policy: &DefaultPolicy,
) -> Option<Dimension> {
    filters
        .active()
        .find(|(dim, accepted)| !dimension_passes(candidate, *dim, accepted, policy))
        .map(|(dim, _)| dim)
}

/// True when the candidate passes every active dimension.
pub fn passes(candidate: &CandidateRecord, filters: &FilterSet, policy: &DefaultPolicy) -> bool {
    first_failure(candidate, filters, policy).is_none()
}
