pub mod de;
pub mod discount;
pub mod ingredient;
pub mod meal;
pub mod plan;
pub mod week;

pub use discount::DiscountSet;
pub use ingredient::Ingredient;
pub use meal::Meal;
pub use plan::{Plan, PlanEntry, PlannedMeal};
pub use week::{day_name, parse_weekday, WeekDay};
