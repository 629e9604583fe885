use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bonus_meal_planner::catalog::{acquire, discount_source_for, CsvCatalog};
use bonus_meal_planner::cli::{Cli, Command};
use bonus_meal_planner::config::{load_dotenv, AppConfig};
use bonus_meal_planner::error::Result;
use bonus_meal_planner::interface::{display_matches, display_plan};
use bonus_meal_planner::planner::{match_meals, rank_meals};
use bonus_meal_planner::telemetry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;
    telemetry::init(&config.telemetry)?;

    let catalog_source = CsvCatalog::new(&config.catalog_dir);
    let discount_source = discount_source_for(&config.discounts);
    let (catalog, discounts) = acquire(
        &catalog_source,
        discount_source.as_ref(),
        &config.dataset,
        &config.ranges,
    )
    .await?;

    match cli.command.unwrap_or_default() {
        Command::Plan { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let plan = rank_meals(
                &catalog.meals,
                &discounts,
                &catalog.ingredients,
                &catalog.week,
                &config.planner,
                &mut rng,
            )?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                display_plan(&plan);
            }
        }
        Command::Match => {
            let matches = match_meals(
                &catalog.meals,
                &discounts,
                &catalog.ingredients,
                &catalog.week,
                &config.planner,
            )?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                display_matches(&catalog.week, &matches);
            }
        }
    }

    Ok(())
}
