//! Application use cases.

mod recipe;

pub use recipe::{
    recipe_create, recipe_delete, recipe_get, recipe_list_all, recipe_list_by_category,
    recipe_list_categories, recipe_list_favorites, recipe_search, recipe_set_favorite,
    recipe_update,
};
