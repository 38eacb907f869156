//! Filter dimensions and the candidate fields they read.

use std::{fmt, str};

use serde::Serialize;

use crate::error::FilterError;

/// Whether a dimension admits or rejects matching candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// Candidate passes when any value matches.
    Inclusion,
    /// Candidate fails when any value matches.
    Exclusion,
}

/// One of the 17 named filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Current title contains a value.
    Titles,
    /// Current company contains a value.
    Companies,
    /// Any school contains a value.
    Schools,
    /// Location contains a value. Also drives the keyword location bonus.
    Locations,
    /// Funding round contains a value.
    FundingRounds,
    /// Likeliness to respond contains a value.
    LikelinessToRespond,
    /// Industry contains a value.
    Industry,
    /// Company growth contains a value.
    Growth,
    /// Any investor contains a value.
    Investors,
    /// Current title must not contain any value.
    ExcludeTitles,
    /// Current company must not contain any value.
    ExcludeCompanies,
    /// Degree contains a value.
    Degrees,
    /// Degree must not contain any value.
    ExcludeDegrees,
    /// Any past title contains a value.
    PastJobTitles,
    /// Current tenure contains a value.
    CurrentTenure,
    /// Years of experience contains a value.
    YearsOfExperience,
    /// Graduation year contains a value.
    GraduationYear,
}

impl Dimension {
    /// All dimensions, in evaluation order.
    pub const ALL: [Self; 17] = [
        Self::Titles,
        Self::Companies,
        Self::Schools,
        Self::Locations,
        Self::FundingRounds,
        Self::LikelinessToRespond,
        Self::Industry,
        Self::Growth,
        Self::Investors,
        Self::ExcludeTitles,
        Self::ExcludeCompanies,
        Self::Degrees,
        Self::ExcludeDegrees,
        Self::PastJobTitles,
        Self::CurrentTenure,
        Self::YearsOfExperience,
        Self::GraduationYear,
    ];

    /// The dashboard's camelCase name for this dimension.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Titles => "titles",
            Self::Companies => "companies",
            Self::Schools => "schools",
            Self::Locations => "locations",
            Self::FundingRounds => "fundingRounds",
            Self::LikelinessToRespond => "likelinessToRespond",
            Self::Industry => "industry",
            Self::Growth => "growth",
            Self::Investors => "investors",
            Self::ExcludeTitles => "excludeTitles",
            Self::ExcludeCompanies => "excludeCompanies",
            Self::Degrees => "degrees",
            Self::ExcludeDegrees => "excludeDegrees",
            Self::PastJobTitles => "pastJobTitles",
            Self::CurrentTenure => "currentTenure",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::GraduationYear => "graduationYear",
        }
    }

    /// Inclusion or exclusion.
    pub fn kind(&self) -> DimensionKind {
        match self {
            Self::ExcludeTitles | Self::ExcludeCompanies | Self::ExcludeDegrees => {
                DimensionKind::Exclusion
            }
            _ => DimensionKind::Inclusion,
        }
    }

    /// The candidate field this dimension reads.
    pub fn field(&self) -> Field {
        match self {
            Self::Titles | Self::ExcludeTitles => Field::Title,
            Self::Companies | Self::ExcludeCompanies => Field::Company,
            Self::Schools => Field::Schools,
            Self::Locations => Field::Location,
            Self::FundingRounds => Field::FundingRound,
            Self::LikelinessToRespond => Field::LikelinessToRespond,
            Self::Industry => Field::Industry,
            Self::Growth => Field::CompanyGrowth,
            Self::Investors => Field::Investors,
            Self::Degrees | Self::ExcludeDegrees => Field::Degree,
            Self::PastJobTitles => Field::PastTitles,
            Self::CurrentTenure => Field::CurrentTenure,
            Self::YearsOfExperience => Field::YearsOfExperience,
            Self::GraduationYear => Field::GraduationYear,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for Dimension {
    type Err = FilterError;

    /// Accepts camelCase, snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_name(s);
        Self::ALL
            .into_iter()
            .find(|dim| fold_name(dim.name()) == wanted)
            .ok_or_else(|| FilterError::UnknownDimension(s.to_string()))
    }
}

/// A candidate attribute that filters read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `title`
    Title,
    /// `company`
    Company,
    /// `schools`
    Schools,
    /// `location`
    Location,
    /// `funding_round`
    FundingRound,
    /// `likeliness_to_respond`
    LikelinessToRespond,
    /// `industry`
    Industry,
    /// `company_growth`
    CompanyGrowth,
    /// `investors`
    Investors,
    /// `degree`
    Degree,
    /// `past_titles`
    PastTitles,
    /// `current_tenure`
    CurrentTenure,
    /// `years_of_experience`
    YearsOfExperience,
    /// `graduation_year`
    GraduationYear,
}

impl Field {
    /// All fields.
    pub const ALL: [Self; 14] = [
        Self::Title,
        Self::Company,
        Self::Schools,
        Self::Location,
        Self::FundingRound,
        Self::LikelinessToRespond,
        Self::Industry,
        Self::CompanyGrowth,
        Self::Investors,
        Self::Degree,
        Self::PastTitles,
        Self::CurrentTenure,
        Self::YearsOfExperience,
        Self::GraduationYear,
    ];

    /// The snake_case record field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Schools => "schools",
            Self::Location => "location",
            Self::FundingRound => "funding_round",
            Self::LikelinessToRespond => "likeliness_to_respond",
            Self::Industry => "industry",
            Self::CompanyGrowth => "company_growth",
            Self::Investors => "investors",
            Self::Degree => "degree",
            Self::PastTitles => "past_titles",
            Self::CurrentTenure => "current_tenure",
            Self::YearsOfExperience => "years_of_experience",
            Self::GraduationYear => "graduation_year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for Field {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_name(s);
        Self::ALL
            .into_iter()
            .find(|field| fold_name(field.name()) == wanted)
            .ok_or_else(|| FilterError::UnknownField(s.to_string()))
    }
}

/// Lowercases and drops `_`/`-` so naming conventions compare equal.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_any_case_convention() {
        assert_eq!("fundingRounds".parse::<Dimension>(), Ok(Dimension::FundingRounds));
        assert_eq!("funding_rounds".parse::<Dimension>(), Ok(Dimension::FundingRounds));
        assert_eq!("exclude-titles".parse::<Dimension>(), Ok(Dimension::ExcludeTitles));
        assert_eq!(
            "nope".parse::<Dimension>(),
            Err(FilterError::UnknownDimension("nope".into()))
        );
    }

    #[test]
    fn names_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(dim.name().parse::<Dimension>(), Ok(dim));
        }
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn exactly_three_exclusions() {
        let exclusions: Vec<_> = Dimension::ALL
            .into_iter()
            .filter(|d| d.kind() == DimensionKind::Exclusion)
            .collect();
        assert_eq!(
            exclusions,
            vec![
                Dimension::ExcludeTitles,
                Dimension::ExcludeCompanies,
                Dimension::ExcludeDegrees
            ]
        );
    }

    #[test]
    fn paired_dimensions_share_a_field() {
        assert_eq!(Dimension::Titles.field(), Dimension::ExcludeTitles.field());
        assert_eq!(Dimension::Companies.field(), Dimension::ExcludeCompanies.field());
        assert_eq!(Dimension::Degrees.field(), Dimension::ExcludeDegrees.field());
        assert_eq!(Dimension::Growth.field(), Field::CompanyGrowth);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&Dimension::LikelinessToRespond).unwrap();
        assert_eq!(json, "\"likelinessToRespond\"");
    }
}
