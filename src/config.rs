use std::path::PathBuf;

use crate::catalog::CatalogRanges;
use crate::cli::Cli;
use crate::error::{PlannerError, Result};
use crate::planner::{DiscountPolicy, PlannerConfig};

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Everything a run needs, assembled from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_dir: PathBuf,
    pub dataset: String,
    pub ranges: CatalogRanges,
    pub discounts: String,
    pub planner: PlannerConfig,
    pub telemetry: TelemetryConfig,
}

/// Load a `.env` file if present so its values reach the CLI parser.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        for (name, value) in [
            ("dataset", &cli.dataset),
            ("meals-range", &cli.meals_range),
            ("ingredients-range", &cli.ingredients_range),
            ("week-range", &cli.week_range),
            ("discounts", &cli.discounts),
            ("shopping-list-url", &cli.shopping_list_url),
        ] {
            if value.trim().is_empty() {
                return Err(PlannerError::Config(format!("--{} must not be empty", name)));
            }
        }

        let discount_policy = if cli.partial_discounts {
            DiscountPolicy::AnyRequired
        } else {
            DiscountPolicy::AllRequired
        };

        Ok(Self {
            catalog_dir: cli.catalog_dir.clone(),
            dataset: cli.dataset.clone(),
            ranges: CatalogRanges {
                meals: cli.meals_range.clone(),
                ingredients: cli.ingredients_range.clone(),
                week: cli.week_range.clone(),
            },
            discounts: cli.discounts.clone(),
            planner: PlannerConfig {
                discount_policy,
                shopping_list_base_url: cli.shopping_list_url.clone(),
            },
            telemetry: TelemetryConfig {
                log_level: cli.log_level.clone(),
            },
        })
    }
}
