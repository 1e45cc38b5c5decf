use clap::Parser;

use max_weight_rs::catalog::{filter_by_weight, load_catalog};
use max_weight_rs::cli::{Algorithm, Cli, Command, FilterArgs};
use max_weight_rs::error::{MaxWeightError, Result};
use max_weight_rs::interface::{
    display_comparison, display_food_list, display_report, CompareReport, SolveReport,
};
use max_weight_rs::models::FoodItem;
use max_weight_rs::solver::{solve_dynamic, solve_exhaustive};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show { filter } => cmd_show(&cli.file, &filter),
        Command::Solve {
            budget,
            algorithm,
            filter,
            json,
        } => cmd_solve(&cli.file, budget, algorithm, &filter, json),
        Command::Compare {
            budget,
            filter,
            json,
        } => cmd_compare(&cli.file, budget, &filter, json),
    }
}

fn apply_filter<'a>(catalog: &'a [FoodItem], filter: &FilterArgs) -> Vec<&'a FoodItem> {
    filter_by_weight(
        catalog,
        filter.min_weight,
        filter.max_weight,
        filter.limit.unwrap_or(usize::MAX),
    )
}

/// The exhaustive solver enumerates subsets through a 64-bit mask.
fn check_exhaustive_bound(count: usize) -> Result<()> {
    if count >= 64 {
        return Err(MaxWeightError::InvalidInput(format!(
            "exhaustive search needs fewer than 64 items, got {}; narrow the input with --limit",
            count
        )));
    }
    Ok(())
}

fn cmd_show(file_path: &str, filter: &FilterArgs) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    println!("Loaded {} foods from {}", catalog.len(), file_path);

    let foods = apply_filter(&catalog, filter);
    display_food_list(&foods, "Food catalog");
    Ok(())
}

fn cmd_solve(
    file_path: &str,
    budget: f64,
    algorithm: Algorithm,
    filter: &FilterArgs,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    let foods = apply_filter(&catalog, filter);

    let selection = match algorithm {
        Algorithm::Dynamic => solve_dynamic(&foods, budget),
        Algorithm::Exhaustive => {
            check_exhaustive_bound(foods.len())?;
            solve_exhaustive(&foods, budget)
        }
    };

    let report = SolveReport::new(algorithm.name(), budget, selection);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}

fn cmd_compare(file_path: &str, budget: f64, filter: &FilterArgs, json: bool) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    let foods = apply_filter(&catalog, filter);
    check_exhaustive_bound(foods.len())?;

    let dynamic = SolveReport::new(
        Algorithm::Dynamic.name(),
        budget,
        solve_dynamic(&foods, budget),
    );
    let exhaustive = SolveReport::new(
        Algorithm::Exhaustive.name(),
        budget,
        solve_exhaustive(&foods, budget),
    );

    let report = CompareReport::new(dynamic, exhaustive);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_comparison(&report);
    }
    Ok(())
}
