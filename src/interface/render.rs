use crate::models::{NutritionTotals, Product};
use crate::shop::ShopFilter;
use crate::state::{CartStore, MealPlanner};

/// Display a product listing in a formatted table.
pub fn display_product_list(products: &[&Product]) {
    let noun = if products.len() == 1 { "meal" } else { "meals" };
    println!("Showing {} {}", products.len(), noun);

    if products.is_empty() {
        println!("No meals match your filters.");
        return;
    }

    println!();
    let max_name_len = products.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for product in products {
        let allergens = if product.allergens.is_empty() {
            String::new()
        } else {
            format!("  [contains {}]", product.allergens.join(", "))
        };

        println!(
            "{:>3}. {:<width$}  {:<12} ${:>6.2} | {:>4.0} cal  P:{:>2.0} C:{:>2.0} F:{:>2.0}{}",
            product.id,
            product.name,
            product.category.label(),
            product.price,
            product.calories,
            product.protein,
            product.carbs,
            product.fat,
            allergens,
            width = max_name_len
        );
    }
    println!();
}

/// Display the active filters as one line of "pills".
pub fn display_active_filters(filter: &ShopFilter) {
    if !filter.has_active_filters() {
        return;
    }

    let mut pills: Vec<String> = filter.diets().iter().map(|d| d.label().to_string()).collect();
    pills.extend(filter.excluded_allergens().iter().map(|a| format!("No {}", a)));

    let range = filter.calorie_range();
    if range.is_narrower_than_default() {
        pills.push(format!("{:.0}-{:.0} cal", range.min(), range.max()));
    }

    println!("Filters: {}", pills.join(" | "));
}

/// Display full details for one product, including ingredient origins.
pub fn display_product(product: &Product) {
    println!();
    println!("=== {} ===", product.name);
    println!("{}", product.description);
    println!();
    println!("Category:  {}", product.category);
    println!("Price:     ${:.2}", product.price);
    println!(
        "Nutrition: {:.0} cal | protein {:.0}g | carbs {:.0}g | fat {:.0}g",
        product.calories, product.protein, product.carbs, product.fat
    );

    if product.allergens.is_empty() {
        println!("Allergens: none");
    } else {
        println!("Allergens: {}", product.allergens.join(", "));
    }

    if !product.ingredients.is_empty() {
        println!();
        println!("--- Ingredient origins ---");
        for ing in &product.ingredients {
            println!(
                "  {:<20} {:<14} ({:.0}, {:.0})",
                ing.name, ing.region, ing.x, ing.y
            );
        }
    }
    println!();
}

fn display_totals(label: &str, totals: &NutritionTotals) {
    println!(
        "{}: {} meals | {:.0} cal | protein {:.0}g | carbs {:.0}g | fat {:.0}g",
        label, totals.items, totals.calories, totals.protein, totals.carbs, totals.fat
    );
}

/// Display the current day's selections and the day and trip totals.
pub fn display_day(planner: &MealPlanner<'_>) {
    let day = planner.current_day();

    println!();
    println!(
        "=== Day {} of {} ({} goal) ===",
        day,
        planner.trip_length(),
        planner.goal()
    );

    let days: Vec<String> = (1..=planner.trip_length())
        .map(|d| {
            if d == day {
                format!("[{}]", d)
            } else if planner.has_selections(d) {
                format!("{}*", d)
            } else {
                d.to_string()
            }
        })
        .collect();
    println!("Days: {}", days.join(" "));
    println!();

    match planner.current_day_plan() {
        Some(plan) => {
            for (id, qty) in plan {
                let name = planner
                    .catalog()
                    .get(id)
                    .map(|p| p.name.as_str())
                    .unwrap_or(id.as_str());
                println!("  {} x {}", qty, name);
            }
        }
        None => println!("  (no meals planned)"),
    }

    println!();
    display_totals(&format!("Day {}", day), &planner.day_totals(day));
    display_totals(
        &format!("Full trip ({} days)", planner.trip_length()),
        &planner.trip_totals(),
    );
    println!();
}

/// Display cart lines, item count and subtotal.
pub fn display_cart(cart: &CartStore) {
    println!();
    println!("=== Cart ===");

    if cart.is_empty() {
        println!("Your cart is empty.");
        println!();
        return;
    }

    let max_name_len = cart
        .lines()
        .iter()
        .map(|l| l.item.name.len())
        .max()
        .unwrap_or(10);

    for line in cart.lines() {
        println!(
            "  {:>2} x {:<width$}  ${:>7.2}",
            line.quantity,
            line.item.name,
            line.line_total(),
            width = max_name_len
        );
    }

    println!();
    println!("Total items: {}", cart.total_items());
    println!("Subtotal:    ${:.2}", cart.subtotal());
    println!();
}
