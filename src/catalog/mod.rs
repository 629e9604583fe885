//! Acquisition of catalog rows and discounts, and their adaptation into
//! domain records.

pub mod discounts;
pub mod rows;
pub mod source;

pub use discounts::{
    discount_source_for, parse_discount_list, DiscountFile, DiscountSource, HttpDiscountSource,
};
pub use rows::{coerce_cell, coerce_row, rows_to_records, Row};
pub use source::{parse_csv_rows, CatalogSource, CsvCatalog};

use crate::error::Result;
use crate::models::{DiscountSet, Ingredient, Meal, WeekDay};
use crate::planner::constants::{INGREDIENTS_RANGE, MEALS_RANGE, WEEK_RANGE};

/// Names of the ranges holding meals, ingredients and the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRanges {
    pub meals: String,
    pub ingredients: String,
    pub week: String,
}

impl Default for CatalogRanges {
    fn default() -> Self {
        Self {
            meals: MEALS_RANGE.to_string(),
            ingredients: INGREDIENTS_RANGE.to_string(),
            week: WEEK_RANGE.to_string(),
        }
    }
}

/// Everything the planner needs besides the discounts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub meals: Vec<Meal>,
    pub ingredients: Vec<Ingredient>,
    pub week: Vec<WeekDay>,
}

/// Fetch the three ranges concurrently and adapt them into records.
pub async fn load_catalog<S: CatalogSource + ?Sized>(
    source: &S,
    dataset: &str,
    ranges: &CatalogRanges,
) -> Result<Catalog> {
    let (meal_rows, ingredient_rows, week_rows) = tokio::try_join!(
        source.fetch_range(dataset, &ranges.meals),
        source.fetch_range(dataset, &ranges.ingredients),
        source.fetch_range(dataset, &ranges.week),
    )?;

    let catalog = Catalog {
        meals: rows_to_records(&ranges.meals, &meal_rows)?,
        ingredients: rows_to_records(&ranges.ingredients, &ingredient_rows)?,
        week: rows_to_records(&ranges.week, &week_rows)?,
    };

    tracing::info!(
        dataset,
        meals = catalog.meals.len(),
        ingredients = catalog.ingredients.len(),
        days = catalog.week.len(),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Fetch catalog and discounts concurrently. Either failing aborts the run.
pub async fn acquire<C, D>(
    catalog_source: &C,
    discount_source: &D,
    dataset: &str,
    ranges: &CatalogRanges,
) -> Result<(Catalog, DiscountSet)>
where
    C: CatalogSource + ?Sized,
    D: DiscountSource + ?Sized,
{
    let (catalog, discounts) = tokio::try_join!(
        load_catalog(catalog_source, dataset, ranges),
        discount_source.fetch(),
    )?;
    tracing::info!(discounts = discounts.len(), "discounts loaded");
    Ok((catalog, discounts))
}
