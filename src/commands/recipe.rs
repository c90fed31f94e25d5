use crate::app::{
    recipe_create, recipe_delete, recipe_get, recipe_list_all, recipe_list_by_category,
    recipe_list_categories, recipe_list_favorites, recipe_search, recipe_set_favorite,
    recipe_update,
};
use crate::domain::{Recipe, RecipeDraft};
use crate::error::AppError;
use crate::infra::Gateway;

/// Returned by [`create`] when nothing was stored.
pub const INVALID_ID: i64 = -1;

fn log_failure(op: &str, e: &AppError) {
    match e {
        AppError::NotFound(_) => log::warn!("{} failed [{}]: {}", op, e.code(), e),
        _ => log::error!("{} failed [{}]: {}", op, e.code(), e),
    }
}

fn or_empty<T>(op: &str, res: Result<Vec<T>, AppError>) -> Vec<T> {
    res.unwrap_or_else(|e| {
        log_failure(op, &e);
        Vec::new()
    })
}

fn succeeded(op: &str, res: Result<(), AppError>) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            log_failure(op, &e);
            false
        }
    }
}

pub fn list_all(gw: &Gateway) -> Vec<Recipe> {
    or_empty("list_all", recipe_list_all(gw))
}

pub fn get_by_id(gw: &Gateway, id: i64) -> Option<Recipe> {
    recipe_get(gw, id).unwrap_or_else(|e| {
        log_failure("get_by_id", &e);
        None
    })
}

pub fn create(gw: &Gateway, draft: &RecipeDraft) -> i64 {
    recipe_create(gw, draft).unwrap_or_else(|e| {
        log_failure("create", &e);
        INVALID_ID
    })
}

pub fn update(gw: &Gateway, recipe: &Recipe) -> bool {
    succeeded("update", recipe_update(gw, recipe))
}

pub fn delete(gw: &Gateway, id: i64) -> bool {
    succeeded("delete", recipe_delete(gw, id))
}

pub fn search(gw: &Gateway, term: &str) -> Vec<Recipe> {
    or_empty("search", recipe_search(gw, term))
}

pub fn list_by_category(gw: &Gateway, category: &str) -> Vec<Recipe> {
    or_empty("list_by_category", recipe_list_by_category(gw, category))
}

pub fn list_favorites(gw: &Gateway) -> Vec<Recipe> {
    or_empty("list_favorites", recipe_list_favorites(gw))
}

pub fn list_categories(gw: &Gateway) -> Vec<String> {
    or_empty("list_categories", recipe_list_categories(gw))
}

pub fn set_favorite(gw: &Gateway, id: i64, favorite: bool) -> bool {
    succeeded("set_favorite", recipe_set_favorite(gw, id, favorite))
}
