use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::interface::render::{display_cart, display_day};
use crate::models::{Goal, Product};
use crate::planner::{MAX_TRIP_LENGTH, MIN_TRIP_LENGTH};
use crate::state::{CartStore, MealPlanner};

/// One entry of the planning menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlannerAction {
    AddMeal,
    RemoveMeal,
    ClearDay,
    NextDay,
    PreviousDay,
    PickDay,
    TripLength,
    ChangeGoal,
    AddAllToCart,
    ViewCart,
    RemoveFromCart,
    Done,
}

impl PlannerAction {
    const ALL: [PlannerAction; 12] = [
        PlannerAction::AddMeal,
        PlannerAction::RemoveMeal,
        PlannerAction::ClearDay,
        PlannerAction::NextDay,
        PlannerAction::PreviousDay,
        PlannerAction::PickDay,
        PlannerAction::TripLength,
        PlannerAction::ChangeGoal,
        PlannerAction::AddAllToCart,
        PlannerAction::ViewCart,
        PlannerAction::RemoveFromCart,
        PlannerAction::Done,
    ];

    fn label(&self) -> &'static str {
        match self {
            PlannerAction::AddMeal => "Add a meal to this day",
            PlannerAction::RemoveMeal => "Remove a meal from this day",
            PlannerAction::ClearDay => "Clear this day",
            PlannerAction::NextDay => "Next day",
            PlannerAction::PreviousDay => "Previous day",
            PlannerAction::PickDay => "Go to day...",
            PlannerAction::TripLength => "Change trip length",
            PlannerAction::ChangeGoal => "Change goal",
            PlannerAction::AddAllToCart => "Add all to cart",
            PlannerAction::ViewCart => "View cart",
            PlannerAction::RemoveFromCart => "Remove one item from cart",
            PlannerAction::Done => "Done",
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a trip length between 1 and 7 days.
pub fn prompt_trip_length(current: u8) -> Result<u8> {
    let options: Vec<String> = (MIN_TRIP_LENGTH..=MAX_TRIP_LENGTH)
        .map(|d| format!("{} {}", d, if d == 1 { "day" } else { "days" }))
        .collect();

    let selection = Select::new()
        .with_prompt("Trip length")
        .items(&options)
        .default(current.saturating_sub(MIN_TRIP_LENGTH) as usize)
        .interact()?;

    Ok(MIN_TRIP_LENGTH + selection as u8)
}

/// Prompt for a recommendation goal.
pub fn prompt_goal(current: Goal) -> Result<Goal> {
    let options: Vec<String> = Goal::ALL
        .iter()
        .map(|g| format!("{} - {}", g.label(), g.description()))
        .collect();
    let default = Goal::ALL.iter().position(|g| *g == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for a day within the trip.
pub fn prompt_day(current: u8, trip_length: u8) -> Result<u8> {
    let options: Vec<String> = (1..=trip_length).map(|d| format!("Day {}", d)).collect();

    let selection = Select::new()
        .with_prompt("Go to day")
        .items(&options)
        .default(current.saturating_sub(1) as usize)
        .interact()?;

    Ok(selection as u8 + 1)
}

/// Let the user pick one product. Returns None if they back out.
pub fn prompt_product<'a>(
    prompt: &str,
    products: &[&'a Product],
) -> Result<Option<&'a Product>> {
    let mut options: Vec<String> = products
        .iter()
        .map(|p| {
            format!(
                "{} - {:.0} cal, {:.0}g protein, ${:.2}",
                p.name, p.calories, p.protein, p.price
            )
        })
        .collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(products.get(selection).copied())
}

/// Run the interactive day-by-day planner against a session cart.
pub fn run_planning_session(planner: &mut MealPlanner<'_>, cart: &mut CartStore) -> Result<()> {
    let labels: Vec<&str> = PlannerAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        display_day(planner);

        let selection = Select::new()
            .with_prompt(format!("What next? (cart: {} items)", cart.total_items()))
            .items(&labels)
            .default(0)
            .interact()?;

        match PlannerAction::ALL[selection] {
            PlannerAction::AddMeal => {
                let offered = planner.recommended_products();
                if offered.is_empty() {
                    println!("No meals match the {} goal.", planner.goal());
                    continue;
                }
                let prompt = format!("Add to Day {}", planner.current_day());
                if let Some(product) = prompt_product(&prompt, &offered)? {
                    planner.add_to_day(&product.id)?;
                }
            }
            PlannerAction::RemoveMeal => {
                let catalog = planner.catalog();
                let planned: Vec<&Product> = planner
                    .current_day_plan()
                    .map(|plan| plan.keys().filter_map(|id| catalog.get(id)).collect())
                    .unwrap_or_default();
                if planned.is_empty() {
                    println!("Nothing planned for this day.");
                    continue;
                }
                if let Some(product) = prompt_product("Remove one", &planned)? {
                    planner.remove_from_day(&product.id);
                }
            }
            PlannerAction::ClearDay => {
                if planner.has_selections(planner.current_day()) {
                    let prompt = format!("Clear all meals for Day {}?", planner.current_day());
                    if prompt_yes_no(&prompt, false)? {
                        planner.clear_day();
                    }
                }
            }
            PlannerAction::NextDay => {
                planner.next_day();
            }
            PlannerAction::PreviousDay => {
                planner.previous_day();
            }
            PlannerAction::PickDay => {
                let day = prompt_day(planner.current_day(), planner.trip_length())?;
                planner.select_day(day)?;
            }
            PlannerAction::TripLength => {
                let days = prompt_trip_length(planner.trip_length())?;
                planner.set_trip_length(days)?;
            }
            PlannerAction::ChangeGoal => {
                let goal = prompt_goal(planner.goal())?;
                planner.set_goal(goal);
            }
            PlannerAction::AddAllToCart => {
                if planner.trip_totals().is_empty() {
                    println!("Add meals to your plan first.");
                    continue;
                }
                let added = planner.commit_to_cart(cart);
                println!("Added {} meals to your cart.", added);
            }
            PlannerAction::ViewCart => display_cart(cart),
            PlannerAction::RemoveFromCart => {
                let catalog = planner.catalog();
                let in_cart: Vec<&Product> = cart
                    .lines()
                    .iter()
                    .filter_map(|line| catalog.get(line.id()))
                    .collect();
                if in_cart.is_empty() {
                    println!("Your cart is empty.");
                    continue;
                }
                if let Some(product) = prompt_product("Remove one from cart", &in_cart)? {
                    cart.remove_item(&product.id);
                }
            }
            PlannerAction::Done => break,
        }
    }

    Ok(())
}
