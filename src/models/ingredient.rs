use serde::{Deserialize, Serialize};

use crate::models::de::{lenient_number, lenient_optional_number, string_or_number};

/// A product needed for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Slug of the owning meal.
    #[serde(rename = "Meal", deserialize_with = "string_or_number")]
    pub meal: String,

    #[serde(rename = "Product", default, deserialize_with = "string_or_number")]
    pub product: String,

    /// Identifier matched against the discount set.
    #[serde(rename = "Id", deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(rename = "Url", default)]
    pub url: String,

    #[serde(rename = "Quantity", deserialize_with = "lenient_number")]
    pub quantity: f64,

    #[serde(
        rename = "MaxShelfLifeInDays",
        default,
        deserialize_with = "lenient_optional_number"
    )]
    pub max_shelf_life_in_days: Option<f64>,

    /// Only acceptable in a plan while discounted.
    #[serde(rename = "IsBonusRequired")]
    pub is_bonus_required: bool,
}

impl Ingredient {
    /// Shelf life that actually constrains planning; zero means unconstrained.
    pub fn shelf_life_limit(&self) -> Option<f64> {
        self.max_shelf_life_in_days.filter(|days| *days != 0.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("ingredient of meal '{}' has no Id", self.meal));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(format!(
                "ingredient '{}' must have a positive Quantity, got {}",
                self.id, self.quantity
            ));
        }
        if let Some(days) = self.max_shelf_life_in_days {
            if !days.is_finite() || days < 0.0 {
                return Err(format!(
                    "ingredient '{}' has invalid MaxShelfLifeInDays {}",
                    self.id, days
                ));
            }
        }
        Ok(())
    }
}
