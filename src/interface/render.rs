use chrono::NaiveDate;

use crate::models::{day_name, Plan, PlannedMeal, WeekDay};

/// One summary line for a day.
pub fn format_entry(
    day: &str,
    date: NaiveDate,
    meal: Option<&PlannedMeal>,
    width: usize,
) -> String {
    match meal {
        Some(planned) => format!(
            "{:<9} {}  {:<width$}  {} discounted",
            day,
            date,
            planned.meal.display_name(),
            planned.score,
            width = width
        ),
        None => format!("{:<9} {}  (no meal found)", day, date),
    }
}

fn name_width<'a>(meals: impl Iterator<Item = Option<&'a PlannedMeal>>) -> usize {
    meals
        .flatten()
        .map(|m| m.meal.display_name().len())
        .max()
        .unwrap_or(10)
}

fn display_details(planned: &PlannedMeal) {
    for ingredient in &planned.discounted {
        println!("          + {} ({})", ingredient.product, ingredient.id);
    }
    println!("          {}", planned.shopping_list);
}

/// Print a ranked plan, one block per day.
pub fn display_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("No days to plan.");
        return;
    }

    let width = name_width(plan.iter().map(|e| e.meal.as_ref()));

    println!();
    println!("=== Meal Plan ===");
    println!();

    for entry in plan.iter() {
        println!(
            "{}",
            format_entry(day_name(entry.day), entry.date, entry.meal.as_ref(), width)
        );
        if let Some(planned) = &entry.meal {
            display_details(planned);
        }
    }

    let planned = plan.iter().filter(|e| e.meal.is_some()).count();
    println!();
    println!("--- Summary ---");
    println!("Days planned: {}/{}", planned, plan.len());
    println!();
}

/// Print the positional output of strict matching.
pub fn display_matches(week: &[WeekDay], matches: &[Option<PlannedMeal>]) {
    if week.is_empty() {
        println!("No days to plan.");
        return;
    }

    let width = name_width(matches.iter().map(Option::as_ref));

    println!();
    println!("=== Matched Meals ===");
    println!();

    for (day, meal) in week.iter().zip(matches) {
        println!("{}", format_entry(day.name(), day.date, meal.as_ref(), width));
        if let Some(planned) = meal {
            display_details(planned);
        }
    }
    println!();
}
