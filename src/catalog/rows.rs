//! Adapting loosely typed catalog rows into domain records.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::{PlannerError, Result};

/// One catalog row: header name to raw cell text.
pub type Row = HashMap<String, String>;

/// Convert a single cell into a typed JSON value.
///
/// `TRUE`/`FALSE` become booleans, empty cells yield `None` so the field
/// counts as absent. Numeric text becomes a number only when the number
/// prints back as the exact same text; anything else stays a string so
/// identifiers like "12345678901234567890" or "1.50" survive unchanged.
pub fn coerce_cell(raw: &str) -> Option<Value> {
    let cell = raw.trim();
    if cell.is_empty() {
        return None;
    }
    if cell.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if cell.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    let number = cell
        .parse::<i64>()
        .ok()
        .map(Number::from)
        .or_else(|| cell.parse::<f64>().ok().and_then(Number::from_f64));

    match number {
        Some(n) if n.to_string() == cell => Some(Value::Number(n)),
        _ => Some(Value::String(cell.to_string())),
    }
}

pub fn coerce_row(row: &Row) -> Map<String, Value> {
    row.iter()
        .filter_map(|(key, raw)| coerce_cell(raw).map(|value| (key.trim().to_string(), value)))
        .collect()
}

/// Deserialize every row of `range`, failing on the first malformed one.
pub fn rows_to_records<T: DeserializeOwned>(range: &str, rows: &[Row]) -> Result<Vec<T>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            serde_json::from_value(Value::Object(coerce_row(row)))
                .map_err(|e| PlannerError::input_shape(range, idx + 1, e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::discounts::parse_discount_list;
    use crate::models::{Ingredient, Meal};
    use crate::planner::discount_score;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_coerce_cell() {
        assert_eq!(coerce_cell("TRUE"), Some(Value::Bool(true)));
        assert_eq!(coerce_cell("false"), Some(Value::Bool(false)));
        assert_eq!(coerce_cell("42"), Some(Value::Number(42.into())));
        assert_eq!(coerce_cell(" 1.5 "), Number::from_f64(1.5).map(Value::Number));
        assert_eq!(coerce_cell("-3"), Some(Value::Number((-3).into())));
        assert_eq!(coerce_cell("2024-03-04"), Some(Value::String("2024-03-04".into())));
        assert_eq!(coerce_cell("   "), None);
        assert_eq!(coerce_cell("0042"), Some(Value::String("0042".into())));
        assert_eq!(coerce_cell("0"), Some(Value::Number(0.into())));
    }

    #[test]
    fn test_rows_to_meals() {
        let rows = vec![row(&[
            ("Slug", "pasta-pesto"),
            ("Name", "Pasta pesto"),
            ("PreparationTimeMinutes", "20"),
            ("CanBeLeftovers", "TRUE"),
            ("NumberOfPeople", "2"),
        ])];

        let meals: Vec<Meal> = rows_to_records("Meals", &rows).unwrap();
        assert_eq!(meals[0].slug, "pasta-pesto");
        assert!(meals[0].can_be_leftovers);
        assert_eq!(meals[0].preparation_time_minutes, 20);
    }

    #[test]
    fn test_empty_shelf_life_is_absent() {
        let rows = vec![row(&[
            ("Meal", "pasta-pesto"),
            ("Product", "Pesto"),
            ("Id", "123456"),
            ("Url", "https://example.org/pesto"),
            ("Quantity", "1"),
            ("MaxShelfLifeInDays", ""),
            ("IsBonusRequired", "FALSE"),
        ])];

        let ingredients: Vec<Ingredient> = rows_to_records("Products", &rows).unwrap();
        assert_eq!(ingredients[0].id, "123456");
        assert_eq!(ingredients[0].max_shelf_life_in_days, None);
        assert!(!ingredients[0].is_bonus_required);
    }

    #[test]
    fn test_numeric_text_that_does_not_round_trip_stays_text() {
        assert_eq!(
            coerce_cell("12345678901234567890"),
            Some(Value::String("12345678901234567890".into()))
        );
        assert_eq!(coerce_cell("1.50"), Some(Value::String("1.50".into())));
        assert_eq!(coerce_cell("1e3"), Some(Value::String("1e3".into())));
        assert_eq!(coerce_cell("+5"), Some(Value::String("+5".into())));
    }

    #[test]
    fn test_long_identifier_matches_discounts() {
        let rows = vec![row(&[
            ("Meal", "chili"),
            ("Id", "12345678901234567890"),
            ("Quantity", "1.50"),
            ("IsBonusRequired", "TRUE"),
        ])];

        let ingredients: Vec<Ingredient> = rows_to_records("Products", &rows).unwrap();
        assert_eq!(ingredients[0].id, "12345678901234567890");
        assert_eq!(ingredients[0].quantity, 1.5);

        let from_json = parse_discount_list("[12345678901234567890]").unwrap();
        let from_text = parse_discount_list("12345678901234567890\n").unwrap();
        assert_eq!(discount_score(&ingredients, &from_json), 1);
        assert_eq!(discount_score(&ingredients, &from_text), 1);
    }

    #[test]
    fn test_numeric_fields_accept_text_cells() {
        let rows = vec![row(&[
            ("Slug", "1.50"),
            ("PreparationTimeMinutes", "+15"),
            ("CanBeLeftovers", "FALSE"),
            ("NumberOfPeople", "007"),
        ])];

        let meals: Vec<Meal> = rows_to_records("Meals", &rows).unwrap();
        assert_eq!(meals[0].slug, "1.50");
        assert_eq!(meals[0].preparation_time_minutes, 15);
        assert_eq!(meals[0].number_of_people, 7);
    }

    #[test]
    fn test_malformed_row_reports_position() {
        let rows = vec![
            row(&[
                ("Slug", "a"),
                ("PreparationTimeMinutes", "10"),
                ("CanBeLeftovers", "FALSE"),
                ("NumberOfPeople", "2"),
            ]),
            row(&[
                ("Slug", "b"),
                ("PreparationTimeMinutes", "soon"),
                ("CanBeLeftovers", "FALSE"),
                ("NumberOfPeople", "2"),
            ]),
        ];

        let err = rows_to_records::<Meal>("Meals", &rows).unwrap_err();
        match err {
            PlannerError::InputShape { range, row, .. } => {
                assert_eq!(range, "Meals");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
