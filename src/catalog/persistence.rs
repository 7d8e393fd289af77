use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Product;

/// Load a catalog from a JSON file holding an array of product records.
///
/// Duplicate ids are an error rather than last-wins, since carts and plans
/// key on the id.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&content)?;

    let catalog = Catalog::new(products)?;
    info!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let json = r#"[
            {"id": "a", "name": "Trail Chili", "description": "Beans", "price": 9.5,
             "category": "vegan", "calories": 450, "protein": 22, "carbs": 60, "fat": 9,
             "allergens": ["soy"],
             "ingredients": [{"name": "Beans", "region": "Cusco", "x": 50, "y": 60}]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let chili = catalog.get("a").unwrap();
        assert_eq!(chili.name, "Trail Chili");
        assert_eq!(chili.image, "");
        assert_eq!(chili.ingredients[0].region, "Cusco");
    }

    #[test]
    fn test_load_catalog_rejects_duplicates() {
        let json = r#"[
            {"id": "a", "name": "One", "description": "", "price": 1, "category": "vegan",
             "calories": 300, "protein": 10, "carbs": 40, "fat": 5},
            {"id": "a", "name": "Two", "description": "", "price": 2, "category": "vegetarian",
             "calories": 350, "protein": 12, "carbs": 45, "fat": 6}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(StoreError::DuplicateProductId(_))
        ));
    }

    #[test]
    fn test_load_catalog_bad_category() {
        let json = r#"[
            {"id": "a", "name": "One", "description": "", "price": 1, "category": "keto",
             "calories": 300, "protein": 10, "carbs": 40, "fat": 5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_catalog(file.path()), Err(StoreError::Json(_))));
    }
}
