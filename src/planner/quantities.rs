use crate::models::{Ingredient, Meal, WeekDay};

/// Integer factor applied to a meal's base quantities for a day.
///
/// Without leftovers the meal is cooked for its own headcount, so the
/// multiplier is 1. With leftovers it is `ceil(total headcount / meal headcount)`.
pub fn leftover_multiplier(day: &WeekDay, meal: &Meal, leftover_mode_active: bool) -> u32 {
    if !leftover_mode_active || meal.number_of_people == 0 {
        return 1;
    }
    day.total_headcount().div_ceil(meal.number_of_people)
}

/// Ingredients of `meal` scaled for `day`. Input is left untouched.
pub fn resolve_ingredients(
    day: &WeekDay,
    meal: &Meal,
    ingredients: &[Ingredient],
    leftover_mode_active: bool,
) -> Vec<Ingredient> {
    let multiplier = leftover_multiplier(day, meal, leftover_mode_active) as f64;

    ingredients
        .iter()
        .map(|i| Ingredient {
            quantity: i.quantity * multiplier,
            ..i.clone()
        })
        .collect()
}

/// Ingredients owned by `meal`, in input order.
pub fn ingredients_for_meal(meal: &Meal, ingredients: &[Ingredient]) -> Vec<Ingredient> {
    ingredients
        .iter()
        .filter(|i| i.meal == meal.slug)
        .cloned()
        .collect()
}
