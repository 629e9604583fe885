use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{day_name, Ingredient, Meal};

/// A meal committed to a day, with everything needed to shop for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlannedMeal {
    pub meal: Meal,

    /// Ingredients scaled for the day's headcount.
    pub ingredients: Vec<Ingredient>,

    /// Subset of `ingredients` currently discounted.
    pub discounted: Vec<Ingredient>,

    /// Number of discounted ingredients.
    pub score: usize,

    pub shopping_list: String,
}

impl PlannedMeal {
    pub fn slug(&self) -> &str {
        &self.meal.slug
    }
}

/// One day of a plan. `meal` is `None` when nothing was feasible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlanEntry {
    #[serde(with = "crate::models::de::weekday")]
    pub day: Weekday,
    pub date: NaiveDate,
    pub meal: Option<PlannedMeal>,
}

/// Day-by-day outcome of a planning run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Plan {
    entries: Vec<PlanEntry>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    /// Entry for the given day (first match if a day repeats).
    pub fn get(&self, day: Weekday) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.day == day)
    }

    /// Entry looked up by day name ("Monday", "mon", ...).
    pub fn get_by_name(&self, name: &str) -> Option<&PlanEntry> {
        crate::models::parse_weekday(name).and_then(|day| self.get(day))
    }

    /// The meal planned for a day, if any.
    pub fn meal_for(&self, day: Weekday) -> Option<&PlannedMeal> {
        self.get(day).and_then(|e| e.meal.as_ref())
    }

    /// Slugs of all committed meals.
    pub fn committed_slugs(&self) -> HashSet<&str> {
        self.entries
            .iter()
            .filter_map(|e| e.meal.as_ref())
            .map(|m| m.slug())
            .collect()
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter()
    }

    /// Day names in plan order.
    pub fn day_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| day_name(e.day)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
