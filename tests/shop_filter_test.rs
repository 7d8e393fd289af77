use std::collections::HashSet;

use pouchamama_rs::{CalorieRange, Catalog, Category, ShopFilter};

fn ids(catalog: &Catalog, filter: &ShopFilter) -> Vec<String> {
    filter.apply(catalog).iter().map(|p| p.id.clone()).collect()
}

fn id_set(catalog: &Catalog, filter: &ShopFilter) -> HashSet<String> {
    ids(catalog, filter).into_iter().collect()
}

#[test]
fn test_vegan_default_range() {
    let catalog = Catalog::builtin().unwrap();
    let filter = ShopFilter::new().with_diet(Category::Vegan);

    assert_eq!(ids(&catalog, &filter), vec!["1", "5"]);
}

#[test]
fn test_exclude_dairy() {
    let catalog = Catalog::builtin().unwrap();

    let filter = ShopFilter::new().excluding("dairy");
    assert_eq!(ids(&catalog, &filter), vec!["1", "2", "4", "5"]);

    // Still removed when combined with a diet that would include them
    let filter = ShopFilter::new()
        .with_diet(Category::Vegetarian)
        .with_diet(Category::HighProtein)
        .excluding("dairy");
    assert_eq!(ids(&catalog, &filter), vec!["2", "4"]);
}

#[test]
fn test_multiple_diets_are_a_union() {
    let catalog = Catalog::builtin().unwrap();
    let filter = ShopFilter::new()
        .with_diet(Category::Vegan)
        .with_diet(Category::Vegetarian);

    assert_eq!(ids(&catalog, &filter), vec!["1", "5", "6"]);
}

#[test]
fn test_calorie_range_narrowing() {
    let catalog = Catalog::builtin().unwrap();
    let filter =
        ShopFilter::new().with_calorie_range(CalorieRange::new(380.0, 480.0).unwrap());

    assert_eq!(ids(&catalog, &filter), vec!["1", "3", "5"]);
    assert!(filter.has_active_filters());
}

#[test]
fn test_widening_range_never_shrinks() {
    let catalog = Catalog::builtin().unwrap();
    let ranges = [
        (400.0, 420.0),
        (380.0, 480.0),
        (340.0, 520.0),
        (200.0, 600.0),
        (0.0, 1000.0),
    ];

    let mut previous: HashSet<String> = HashSet::new();
    for (min, max) in ranges {
        let filter = ShopFilter::new()
            .excluding("soy")
            .with_calorie_range(CalorieRange::new(min, max).unwrap());
        let current = id_set(&catalog, &filter);
        assert!(
            previous.is_subset(&current),
            "range {}-{} dropped products",
            min,
            max
        );
        previous = current;
    }
}

#[test]
fn test_removing_filters_never_shrinks() {
    let catalog = Catalog::builtin().unwrap();
    let mut filter = ShopFilter::new()
        .with_diet(Category::HighProtein)
        .excluding("nuts")
        .excluding("soy")
        .with_calorie_range(CalorieRange::new(300.0, 560.0).unwrap());

    let mut previous = id_set(&catalog, &filter);
    assert_eq!(previous, HashSet::from(["4".to_string()]));

    // Peel filters off one at a time
    filter.toggle_allergen("soy");
    let current = id_set(&catalog, &filter);
    assert!(previous.is_subset(&current));
    previous = current;

    filter.toggle_diet(Category::Vegan);
    let current = id_set(&catalog, &filter);
    assert!(previous.is_subset(&current));
    previous = current;

    filter.toggle_diet(Category::HighProtein);
    filter.toggle_diet(Category::Vegan);
    let current = id_set(&catalog, &filter);
    assert!(previous.is_subset(&current));
    previous = current;

    filter.clear();
    let current = id_set(&catalog, &filter);
    assert!(previous.is_subset(&current));
    assert_eq!(current.len(), catalog.len());
}

#[test]
fn test_exclude_non_ascii_allergen() {
    let base = Catalog::builtin().unwrap();
    let mut products = base.products().to_vec();
    products[0].allergens = vec!["ÑORA".to_string()];
    let catalog = Catalog::new(products).unwrap();

    let filter = ShopFilter::new().excluding("ÑORA");
    assert_eq!(ids(&catalog, &filter), vec!["2", "3", "4", "5", "6"]);

    // Lowercase spelling from the allergen vocabulary excludes it too
    assert!(catalog.allergens().contains(&"ñora".to_string()));
    let filter = ShopFilter::new().excluding("ñora");
    assert_eq!(ids(&catalog, &filter), vec!["2", "3", "4", "5", "6"]);
}

#[test]
fn test_no_match() {
    let catalog = Catalog::builtin().unwrap();
    let filter = ShopFilter::new()
        .with_diet(Category::Vegetarian)
        .excluding("dairy");

    assert!(filter.apply(&catalog).is_empty());
}
