use chrono::Weekday;

/// Weekday on which groceries are delivered; shelf life is counted from here.
pub const DELIVERY_WEEKDAY: Weekday = Weekday::Tue;

/// The one day per week where leftover rules apply.
pub const LEFTOVER_DAY: Weekday = Weekday::Sun;

/// Base of the "add multiple products to my list" link.
pub const SHOPPING_LIST_BASE_URL: &str = "https://www.ah.nl/mijnlijst/add-multiple?";

/// Query parameter carrying one `id:quantity` pair.
pub const SHOPPING_LIST_PARAM: &str = "p";

/// Default catalog range names.
pub const MEALS_RANGE: &str = "Meals";
pub const INGREDIENTS_RANGE: &str = "Products";
pub const WEEK_RANGE: &str = "Week";
