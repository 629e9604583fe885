use crate::models::Ingredient;
use crate::planner::constants::{SHOPPING_LIST_BASE_URL, SHOPPING_LIST_PARAM};

/// Link that adds every ingredient with its quantity to the shopping list.
pub fn build_shopping_list_reference(ingredients: &[Ingredient]) -> String {
    build_shopping_list_reference_with(SHOPPING_LIST_BASE_URL, ingredients)
}

/// Same as [`build_shopping_list_reference`] against a custom base URL.
///
/// Entries are `p=<id>:<quantity>`, joined with `&`, in ingredient order.
pub fn build_shopping_list_reference_with(base_url: &str, ingredients: &[Ingredient]) -> String {
    let params: Vec<String> = ingredients
        .iter()
        .map(|i| {
            format!(
                "{}={}:{}",
                SHOPPING_LIST_PARAM,
                urlencoding::encode(&i.id),
                format_quantity(i.quantity)
            )
        })
        .collect();

    format!("{}{}", base_url, params.join("&"))
}

/// Whole quantities without a fractional part, others as-is.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}
