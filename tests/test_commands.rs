//! Degrading handlers: callers always get a usable value

mod common;

use common::{draft, init_test_db, schemaless_db, tomato_soup, unreachable_db};
use recipe_lib::commands::recipe::{
    create, delete, get_by_id, list_all, list_by_category, list_categories, list_favorites,
    search, set_favorite, update, INVALID_ID,
};
use recipe_lib::domain::{Recipe, RecipeDraft};

#[test]
fn happy_path_matches_typed_layer() {
    let db = init_test_db();
    let soup = tomato_soup();

    let id = create(&db.gw, &soup);
    assert!(id > 0);
    assert_eq!(get_by_id(&db.gw, id), Some(Recipe::from_draft(id, soup.clone())));

    let mut changed = Recipe::from_draft(id, soup);
    changed.servings = 2;
    assert!(update(&db.gw, &changed));
    assert!(set_favorite(&db.gw, id, true));

    let fetched = get_by_id(&db.gw, id).unwrap();
    assert_eq!(fetched.servings, 2);
    assert!(fetched.favorite);
    assert_eq!(list_favorites(&db.gw).len(), 1);

    assert!(delete(&db.gw, id));
    assert_eq!(get_by_id(&db.gw, id), None);
}

#[test]
fn queries_return_plain_sequences() {
    let db = init_test_db();
    create(&db.gw, &draft("Chicken Soup", Some("Soup"), "chicken, water"));
    create(&db.gw, &draft("Apple Tart", Some("Dessert"), "apples"));

    assert_eq!(list_all(&db.gw).len(), 2);
    assert_eq!(search(&db.gw, "CHICK").len(), 1);
    assert_eq!(list_by_category(&db.gw, "Dessert")[0].name, "Apple Tart");
    assert_eq!(list_categories(&db.gw), vec!["Dessert", "Soup"]);
}

#[test]
fn missing_rows_degrade_to_false() {
    let db = init_test_db();
    assert!(!update(&db.gw, &Recipe::from_draft(31, tomato_soup())));
    assert!(!delete(&db.gw, 31));
    assert!(!set_favorite(&db.gw, 31, true));
    assert_eq!(get_by_id(&db.gw, 31), None);
}

#[test]
fn invalid_draft_yields_sentinel_id() {
    let db = init_test_db();
    assert_eq!(create(&db.gw, &RecipeDraft::new("")), INVALID_ID);
    assert!(list_all(&db.gw).is_empty());
}

#[test]
fn large_batches_and_long_cooks_are_stored() {
    let db = init_test_db();
    let chili = RecipeDraft {
        cook_time: 1320,
        servings: 150,
        ..RecipeDraft::new("Party Chili")
    };
    let id = create(&db.gw, &chili);
    assert!(id > 0);
    assert_eq!(list_all(&db.gw).len(), 1);
    assert_eq!(get_by_id(&db.gw, id).unwrap().servings, 150);
}

#[test]
fn unreachable_store_degrades_everywhere() {
    let db = unreachable_db();
    assert!(list_all(&db.gw).is_empty());
    assert_eq!(get_by_id(&db.gw, 1), None);
    assert_eq!(create(&db.gw, &tomato_soup()), INVALID_ID);
    assert!(!update(&db.gw, &Recipe::from_draft(1, tomato_soup())));
    assert!(!delete(&db.gw, 1));
    assert!(search(&db.gw, "soup").is_empty());
    assert!(list_by_category(&db.gw, "Soup").is_empty());
    assert!(list_categories(&db.gw).is_empty());
    assert!(!set_favorite(&db.gw, 1, true));
}

#[test]
fn statement_failures_degrade_too() {
    let db = schemaless_db();
    assert!(list_all(&db.gw).is_empty());
    assert_eq!(create(&db.gw, &tomato_soup()), INVALID_ID);
    assert!(list_favorites(&db.gw).is_empty());
}
