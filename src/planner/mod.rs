pub mod constants;
pub mod constraints;
pub mod quantities;
pub mod ranking;
pub mod shopping;

pub use constants::*;
pub use constraints::{
    has_ingredients, is_discount_requirement_satisfied, is_leftover_mode_active,
    is_leftover_valid, is_not_already_planned, is_partial_discount_requirement_satisfied,
    is_preparation_time_valid, is_shelf_life_valid, iso_weekday_number, DiscountPolicy,
};
pub use quantities::{ingredients_for_meal, leftover_multiplier, resolve_ingredients};
pub use ranking::{
    discount_score, match_meals, rank_day, rank_meals, validate_catalog, PlannerConfig,
};
pub use shopping::{build_shopping_list_reference, build_shopping_list_reference_with};
