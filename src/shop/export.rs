use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::Product;

/// Write a product listing to a CSV file.
pub fn write_products_csv(products: &[&Product], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id", "name", "category", "price", "calories", "protein", "carbs", "fat", "allergens",
    ])?;

    for product in products {
        wtr.write_record([
            product.id.clone(),
            product.name.clone(),
            product.category.label().to_string(),
            format!("{:.2}", product.price),
            format!("{}", product.calories),
            format!("{}", product.protein),
            format!("{}", product.carbs),
            format!("{}", product.fat),
            product.allergens.join(";"),
        ])?;
    }

    wtr.flush()?;
    info!(rows = products.len(), path = %path.display(), "exported product listing");
    Ok(())
}
