use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::{
    INGREDIENTS_RANGE, MEALS_RANGE, SHOPPING_LIST_BASE_URL, WEEK_RANGE,
};

/// Weekly dinner planner that favours discounted products.
#[derive(Parser, Debug)]
#[command(name = "bonus_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding one sub-directory of CSV ranges per dataset.
    #[arg(long, env = "MEALPLAN_CATALOG_DIR", default_value = "catalog")]
    pub catalog_dir: PathBuf,

    /// Dataset (sub-directory) to read.
    #[arg(long, env = "MEALPLAN_DATASET", default_value = "current")]
    pub dataset: String,

    #[arg(long, env = "MEALPLAN_MEALS_RANGE", default_value = MEALS_RANGE)]
    pub meals_range: String,

    #[arg(long, env = "MEALPLAN_INGREDIENTS_RANGE", default_value = INGREDIENTS_RANGE)]
    pub ingredients_range: String,

    #[arg(long, env = "MEALPLAN_WEEK_RANGE", default_value = WEEK_RANGE)]
    pub week_range: String,

    /// Discounted product list: a file path or an http(s) URL.
    #[arg(long, env = "MEALPLAN_DISCOUNTS", default_value = "discounts.json")]
    pub discounts: String,

    /// Base URL of the shopping-list link.
    #[arg(long, env = "MEALPLAN_SHOPPING_LIST_URL", default_value = SHOPPING_LIST_BASE_URL)]
    pub shopping_list_url: String,

    /// Accept a meal when any of its bonus-required products is discounted.
    #[arg(long)]
    pub partial_discounts: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "MEALPLAN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Plan the week without repeating meals (default).
    Plan {
        /// Seed for the tie-break between equally scored meals.
        #[arg(long, env = "MEALPLAN_SEED")]
        seed: Option<u64>,
    },

    /// Strict legacy matching: best meal per day, repeats allowed.
    Match,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { seed: None }
    }
}
