use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use pouchamama_rs::catalog::{find_product, load_catalog, ProductMatch};
use pouchamama_rs::cli::{Cli, Command};
use pouchamama_rs::error::{Result, StoreError};
use pouchamama_rs::interface::{
    display_active_filters, display_cart, display_product, display_product_list,
    run_planning_session,
};
use pouchamama_rs::logging::init_logging;
use pouchamama_rs::models::{Category, Goal};
use pouchamama_rs::shop::{write_products_csv, CalorieRange, ShopFilter};
use pouchamama_rs::state::{CartStore, MealPlanner};
use pouchamama_rs::Catalog;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = open_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Shop {
            diets,
            exclude,
            min_calories,
            max_calories,
            csv,
        } => cmd_shop(&catalog, &diets, &exclude, min_calories, max_calories, csv),
        Command::Product { query } => cmd_product(&catalog, &query),
        Command::Plan { days, goal } => cmd_plan(&catalog, days, goal),
    }
}

fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            let catalog = Catalog::builtin()?;
            info!(products = catalog.len(), "using built-in catalog");
            Ok(catalog)
        }
    }
}

/// List products matching the shop filters.
fn cmd_shop(
    catalog: &Catalog,
    diets: &[Category],
    exclude: &[String],
    min_calories: f64,
    max_calories: f64,
    csv: Option<PathBuf>,
) -> Result<()> {
    let range = CalorieRange::new(min_calories, max_calories)?;
    let mut filter = ShopFilter::new().with_calorie_range(range);
    for diet in diets {
        filter = filter.with_diet(*diet);
    }
    let known = catalog.allergens();
    for allergen in exclude {
        if !known.contains(&allergen.to_lowercase()) {
            println!(
                "Note: no meal lists '{}' (known allergens: {})",
                allergen,
                known.join(", ")
            );
        }
        filter = filter.excluding(allergen);
    }

    let shown = filter.apply(catalog);

    display_active_filters(&filter);
    display_product_list(&shown);

    if let Some(path) = csv {
        write_products_csv(&shown, &path)?;
        println!("Listing written to {}", path.display());
    }

    Ok(())
}

/// Show details for a single product.
fn cmd_product(catalog: &Catalog, query: &str) -> Result<()> {
    let found = find_product(catalog, query)
        .ok_or_else(|| StoreError::ProductNotFound(query.to_string()))?;

    if let ProductMatch::Fuzzy { product, score } = found {
        println!(
            "No exact match for '{}', showing '{}' (similarity {:.0}%)",
            query,
            product.name,
            score * 100.0
        );
    }

    display_product(found.product());
    Ok(())
}

/// Interactive meal planning with a session cart.
fn cmd_plan(catalog: &Catalog, days: u8, goal: Goal) -> Result<()> {
    if catalog.is_empty() {
        println!("The catalog is empty, nothing to plan with.");
        return Ok(());
    }

    let mut planner = MealPlanner::new(catalog);
    planner.set_trip_length(days)?;
    planner.set_goal(goal);

    let mut cart = CartStore::new();

    println!("Design your meal plan: {} meals available.", catalog.len());
    run_planning_session(&mut planner, &mut cart)?;

    display_cart(&cart);
    Ok(())
}
