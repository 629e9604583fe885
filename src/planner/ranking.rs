use std::collections::HashSet;

use chrono::Datelike;
use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::{DiscountSet, Ingredient, Meal, Plan, PlanEntry, PlannedMeal, WeekDay};
use crate::planner::constants::{
    INGREDIENTS_RANGE, MEALS_RANGE, SHOPPING_LIST_BASE_URL, WEEK_RANGE,
};
use crate::planner::constraints::{
    has_ingredients, is_leftover_mode_active, is_leftover_valid, is_not_already_planned,
    is_preparation_time_valid, is_shelf_life_valid, DiscountPolicy,
};
use crate::planner::quantities::{ingredients_for_meal, resolve_ingredients};
use crate::planner::shopping::build_shopping_list_reference_with;

/// Settings shared by both ranking variants.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub discount_policy: DiscountPolicy,
    pub shopping_list_base_url: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            discount_policy: DiscountPolicy::default(),
            shopping_list_base_url: SHOPPING_LIST_BASE_URL.to_string(),
        }
    }
}

/// Feasible meal for a day with its resolved ingredients and discount score.
#[derive(Debug)]
struct Candidate<'a> {
    meal: &'a Meal,
    ingredients: Vec<Ingredient>,
    score: usize,
}

impl Candidate<'_> {
    fn into_planned(self, discounts: &DiscountSet, config: &PlannerConfig) -> PlannedMeal {
        let discounted: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| discounts.contains(&i.id))
            .cloned()
            .collect();
        let shopping_list =
            build_shopping_list_reference_with(&config.shopping_list_base_url, &self.ingredients);

        PlannedMeal {
            meal: self.meal.clone(),
            ingredients: self.ingredients,
            discounted,
            score: self.score,
            shopping_list,
        }
    }
}

/// Number of ingredients whose identifier is discounted.
pub fn discount_score(ingredients: &[Ingredient], discounts: &DiscountSet) -> usize {
    ingredients
        .iter()
        .filter(|i| discounts.contains(&i.id))
        .count()
}

/// Reject malformed catalog data before any ranking happens.
///
/// Ingredients pointing at an unknown meal are not an error; they can never
/// be paired and are only reported.
pub fn validate_catalog(
    meals: &[Meal],
    ingredients: &[Ingredient],
    week: &[WeekDay],
) -> Result<()> {
    let mut slugs = HashSet::new();
    for (idx, meal) in meals.iter().enumerate() {
        meal.validate()
            .map_err(|msg| PlannerError::input_shape(MEALS_RANGE, idx + 1, msg))?;
        if !slugs.insert(meal.slug.as_str()) {
            return Err(PlannerError::input_shape(
                MEALS_RANGE,
                idx + 1,
                format!("duplicate Slug '{}'", meal.slug),
            ));
        }
    }

    for (idx, ingredient) in ingredients.iter().enumerate() {
        ingredient
            .validate()
            .map_err(|msg| PlannerError::input_shape(INGREDIENTS_RANGE, idx + 1, msg))?;
        if !slugs.contains(ingredient.meal.as_str()) {
            tracing::warn!(
                meal = %ingredient.meal,
                product = %ingredient.id,
                "ingredient refers to unknown meal, ignoring"
            );
        }
    }

    for (idx, day) in week.iter().enumerate() {
        day.validate()
            .map_err(|msg| PlannerError::input_shape(WEEK_RANGE, idx + 1, msg))?;
        if day.date.weekday() != day.day {
            tracing::warn!(
                row = idx + 1,
                range = WEEK_RANGE,
                day = day.name(),
                date = %day.date,
                "day name does not match its date"
            );
        }
    }

    Ok(())
}

/// Meals paired with their own ingredients, longest preparation first.
fn paired_candidates<'a>(
    meals: &'a [Meal],
    ingredients: &[Ingredient],
) -> Vec<(&'a Meal, Vec<Ingredient>)> {
    let mut paired: Vec<(&Meal, Vec<Ingredient>)> = meals
        .iter()
        .map(|meal| (meal, ingredients_for_meal(meal, ingredients)))
        .collect();
    paired.sort_by(|a, b| b.0.preparation_time_minutes.cmp(&a.0.preparation_time_minutes));
    paired
}

/// Resolve, filter and score every meal for one day, best score first.
///
/// `committed` switches on the de-duplication checks: when present, meals
/// without ingredients and meals already planned are dropped.
fn feasible_candidates<'a>(
    day: &WeekDay,
    meals: &'a [Meal],
    ingredients: &[Ingredient],
    discounts: &DiscountSet,
    committed: Option<&HashSet<String>>,
    config: &PlannerConfig,
) -> Vec<Candidate<'a>> {
    let paired = paired_candidates(meals, ingredients);
    let total = paired.len();

    let mut survivors: Vec<Candidate> = paired
        .into_iter()
        .filter_map(|(meal, owned)| {
            let leftover_mode = is_leftover_mode_active(day, meal);
            let resolved = resolve_ingredients(day, meal, &owned, leftover_mode);

            let feasible = is_preparation_time_valid(meal, day)
                && is_leftover_valid(day, meal)
                && config.discount_policy.is_satisfied(&resolved, discounts)
                && is_shelf_life_valid(&resolved, day.date)
                && committed.is_none_or(|planned| {
                    has_ingredients(&resolved) && is_not_already_planned(meal, planned)
                });

            if !feasible {
                return None;
            }

            let score = discount_score(&resolved, discounts);
            Some(Candidate {
                meal,
                ingredients: resolved,
                score,
            })
        })
        .collect();

    // Stable: equal scores keep the preparation-time order.
    survivors.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        day = day.name(),
        date = %day.date,
        candidates = total,
        survivors = survivors.len(),
        "evaluated candidates"
    );

    survivors
}

/// Pick the meal for a single day given the slugs already committed earlier.
///
/// The best-scoring survivor wins when it uses at least one discounted
/// product. Otherwise every survivor is equally good and one is drawn from
/// `rng`.
pub fn rank_day<R: Rng + ?Sized>(
    day: &WeekDay,
    meals: &[Meal],
    ingredients: &[Ingredient],
    discounts: &DiscountSet,
    committed: &HashSet<String>,
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<PlannedMeal> {
    let mut survivors =
        feasible_candidates(day, meals, ingredients, discounts, Some(committed), config);

    let top_score = survivors.first()?.score;
    let idx = if top_score > 0 {
        0
    } else {
        rng.gen_range(0..survivors.len())
    };

    Some(survivors.swap_remove(idx).into_planned(discounts, config))
}

/// Plan the whole week, never repeating a meal.
///
/// Days are handled strictly in the given order; each commitment is visible
/// to the days after it.
pub fn rank_meals<R: Rng + ?Sized>(
    meals: &[Meal],
    discounts: &DiscountSet,
    ingredients: &[Ingredient],
    week: &[WeekDay],
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Plan> {
    validate_catalog(meals, ingredients, week)?;

    let mut plan = Plan::new();
    let mut committed: HashSet<String> = HashSet::new();

    for day in week {
        let meal = rank_day(day, meals, ingredients, discounts, &committed, config, rng);
        log_outcome(day, meal.as_ref());

        if let Some(planned) = &meal {
            committed.insert(planned.slug().to_string());
        }

        plan.push(PlanEntry {
            day: day.day,
            date: day.date,
            meal,
        });
    }

    Ok(plan)
}

/// Legacy strict matching: per day the first survivor by score, positionally.
///
/// No de-duplication across days and no random choice.
pub fn match_meals(
    meals: &[Meal],
    discounts: &DiscountSet,
    ingredients: &[Ingredient],
    week: &[WeekDay],
    config: &PlannerConfig,
) -> Result<Vec<Option<PlannedMeal>>> {
    validate_catalog(meals, ingredients, week)?;

    Ok(week
        .iter()
        .map(|day| {
            let meal = feasible_candidates(day, meals, ingredients, discounts, None, config)
                .into_iter()
                .next()
                .map(|c| c.into_planned(discounts, config));
            log_outcome(day, meal.as_ref());
            meal
        })
        .collect())
}

fn log_outcome(day: &WeekDay, meal: Option<&PlannedMeal>) {
    match meal {
        Some(planned) => tracing::info!(
            day = day.name(),
            meal = %planned.slug(),
            score = planned.score,
            "committed meal"
        ),
        None => tracing::info!(day = day.name(), "no feasible meal"),
    }
}
