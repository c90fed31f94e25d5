#![allow(dead_code)]

use recipe_lib::domain::RecipeDraft;
use recipe_lib::infra::{Gateway, StoreConfig};
use tempfile::TempDir;

/// Fresh on-disk store; the directory lives as long as this value.
pub struct TestDb {
    pub gw: Gateway,
    _dir: TempDir,
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let gw = Gateway::open(StoreConfig::new(dir.path().join("recipes.db"))).unwrap();
    TestDb { gw, _dir: dir }
}

/// Store whose file was never created and may not be created.
pub fn unreachable_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        database_path: dir.path().join("missing.db"),
        create_if_missing: false,
    };
    TestDb {
        gw: Gateway::new(config),
        _dir: dir,
    }
}

/// Reachable store without the `recipes` table.
pub fn schemaless_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let gw = Gateway::new(StoreConfig::new(dir.path().join("empty.db")));
    TestDb { gw, _dir: dir }
}

pub fn tomato_soup() -> RecipeDraft {
    RecipeDraft {
        name: "Tomato Soup".to_string(),
        category: Some("Soup".to_string()),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        difficulty: "Easy".to_string(),
        ingredients: "tomato, salt".to_string(),
        instructions: "boil".to_string(),
        notes: Some(String::new()),
        favorite: false,
    }
}

pub fn draft(name: &str, category: Option<&str>, ingredients: &str) -> RecipeDraft {
    RecipeDraft {
        category: category.map(str::to_string),
        ingredients: ingredients.to_string(),
        instructions: "cook it".to_string(),
        ..RecipeDraft::new(name)
    }
}
