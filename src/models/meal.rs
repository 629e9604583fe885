use serde::{Deserialize, Serialize};

use crate::models::de::{lenient_number, string_or_number};

/// A dinner definition from the catalog.
///
/// Base ingredient quantities are calibrated for `number_of_people`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "Slug", deserialize_with = "string_or_number")]
    pub slug: String,

    #[serde(rename = "Name", default, deserialize_with = "string_or_number")]
    pub name: String,

    #[serde(rename = "PreparationTimeMinutes", deserialize_with = "lenient_number")]
    pub preparation_time_minutes: u32,

    #[serde(rename = "CanBeLeftovers")]
    pub can_be_leftovers: bool,

    #[serde(rename = "NumberOfPeople", deserialize_with = "lenient_number")]
    pub number_of_people: u32,
}

impl Meal {
    /// Name for display, falling back to the slug.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.slug
        } else {
            &self.name
        }
    }

    /// Reject definitions the planner cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("Slug must not be empty".to_string());
        }
        if self.number_of_people == 0 {
            return Err(format!(
                "meal '{}' must serve at least one person",
                self.slug
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            slug: "lasagne".to_string(),
            name: "Lasagne".to_string(),
            preparation_time_minutes: 60,
            can_be_leftovers: true,
            number_of_people: 4,
        }
    }

    #[test]
    fn test_deserialize_numeric_slug() {
        let meal: Meal = serde_json::from_str(
            r#"{"Slug": 12, "Name": "Soup", "PreparationTimeMinutes": 20, "CanBeLeftovers": false, "NumberOfPeople": 2}"#,
        )
        .unwrap();
        assert_eq!(meal.slug, "12");
        assert_eq!(meal.number_of_people, 2);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<Meal, _> =
            serde_json::from_str(r#"{"Slug": "soup", "PreparationTimeMinutes": 20}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(sample_meal().validate().is_ok());

        let mut nobody = sample_meal();
        nobody.number_of_people = 0;
        assert!(nobody.validate().is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_slug() {
        let mut meal = sample_meal();
        meal.name.clear();
        assert_eq!(meal.display_name(), "lasagne");
    }
}
