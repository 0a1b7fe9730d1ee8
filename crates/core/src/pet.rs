//! Pet categories: species and presentation gender.
//!
//! The client submits a combined category string (`cat_female`,
//! `dog_male`, ...). Title eligibility only cares about the species; the
//! gender half feeds prompt composition.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pet species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    /// The English noun used in prompt text.
    pub fn word(self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }
}

/// Presentation gender for prompt composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn word(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

/// A parsed pet category: species plus gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetCategory {
    pub species: Species,
    pub gender: Gender,
}

impl PetCategory {
    /// Parse a client category string.
    ///
    /// Accepts the combined form (`cat_female`, `dog_male`) and the bare
    /// species form (`cat`, `dog`), which defaults to male for prompt
    /// purposes (matching the pre-gender clients).
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let (species, gender) = match raw {
            "cat" => (Species::Cat, Gender::Male),
            "dog" => (Species::Dog, Gender::Male),
            "cat_female" => (Species::Cat, Gender::Female),
            "cat_male" => (Species::Cat, Gender::Male),
            "dog_female" => (Species::Dog, Gender::Female),
            "dog_male" => (Species::Dog, Gender::Male),
            other => {
                return Err(CoreError::InvalidRequest(format!(
                    "Unknown pet category '{other}'"
                )))
            }
        };
        Ok(Self { species, gender })
    }

    /// The wire form (`cat_female`, ...).
    pub fn as_str(&self) -> &'static str {
        match (self.species, self.gender) {
            (Species::Cat, Gender::Female) => "cat_female",
            (Species::Cat, Gender::Male) => "cat_male",
            (Species::Dog, Gender::Female) => "dog_female",
            (Species::Dog, Gender::Male) => "dog_male",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_categories() {
        let c = PetCategory::parse("cat_female").unwrap();
        assert_eq!(c.species, Species::Cat);
        assert_eq!(c.gender, Gender::Female);
    }

    #[test]
    fn bare_species_defaults_to_male() {
        let c = PetCategory::parse("dog").unwrap();
        assert_eq!(c.species, Species::Dog);
        assert_eq!(c.gender, Gender::Male);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(PetCategory::parse("hamster").is_err());
    }
}
