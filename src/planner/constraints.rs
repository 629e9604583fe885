//! Feasibility predicates for a (day, meal, ingredients) triple.
//!
//! Every check here is a pure boolean; none of them can fail.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DiscountSet, Ingredient, Meal, WeekDay};
use crate::planner::constants::{DELIVERY_WEEKDAY, LEFTOVER_DAY};

/// How bonus-required ingredients are checked against the discount set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountPolicy {
    /// Every bonus-required ingredient must be discounted.
    #[default]
    AllRequired,
    /// One discounted bonus-required ingredient is enough.
    AnyRequired,
}

impl DiscountPolicy {
    pub fn is_satisfied(self, ingredients: &[Ingredient], discounts: &DiscountSet) -> bool {
        match self {
            DiscountPolicy::AllRequired => {
                is_discount_requirement_satisfied(ingredients, discounts)
            }
            DiscountPolicy::AnyRequired => {
                is_partial_discount_requirement_satisfied(ingredients, discounts)
            }
        }
    }
}

/// ISO weekday number: Monday = 1 ... Sunday = 7.
pub fn iso_weekday_number(day: Weekday) -> u32 {
    day.number_from_monday()
}

pub fn is_preparation_time_valid(meal: &Meal, day: &WeekDay) -> bool {
    meal.preparation_time_minutes <= day.max_preparation_time
}

/// Always true except on the leftover day, where the meal must keep and
/// someone must be there to eat the leftovers.
pub fn is_leftover_valid(day: &WeekDay, meal: &Meal) -> bool {
    if day.day != LEFTOVER_DAY {
        return true;
    }
    day.number_of_people_leftovers > 0 && meal.can_be_leftovers
}

/// Whether quantities should be scaled up to cover leftovers.
pub fn is_leftover_mode_active(day: &WeekDay, meal: &Meal) -> bool {
    day.day == LEFTOVER_DAY && is_leftover_valid(day, meal)
}

pub fn has_ingredients(ingredients: &[Ingredient]) -> bool {
    !ingredients.is_empty()
}

pub fn is_not_already_planned(meal: &Meal, committed: &HashSet<String>) -> bool {
    !committed.contains(&meal.slug)
}

/// All bonus-required ingredients are discounted (vacuously true without any).
pub fn is_discount_requirement_satisfied(
    ingredients: &[Ingredient],
    discounts: &DiscountSet,
) -> bool {
    ingredients
        .iter()
        .filter(|i| i.is_bonus_required)
        .all(|i| discounts.contains(&i.id))
}

/// At least one bonus-required ingredient is discounted, or none are required.
pub fn is_partial_discount_requirement_satisfied(
    ingredients: &[Ingredient],
    discounts: &DiscountSet,
) -> bool {
    let mut required = ingredients.iter().filter(|i| i.is_bonus_required).peekable();
    if required.peek().is_none() {
        return true;
    }
    required.any(|i| discounts.contains(&i.id))
}

/// Every ingredient with a shelf life must last from delivery until `date`.
pub fn is_shelf_life_valid(ingredients: &[Ingredient], date: NaiveDate) -> bool {
    let days_after_delivery = iso_weekday_number(date.weekday()) as f64
        - iso_weekday_number(DELIVERY_WEEKDAY) as f64;

    ingredients.iter().all(|i| match i.shelf_life_limit() {
        Some(days) => days >= days_after_delivery,
        None => true,
    })
}
