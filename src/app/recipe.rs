//! Recipe use cases over the `recipes` table.

use crate::domain::{Recipe, RecipeDraft};
use crate::error::AppError;
use crate::infra::Gateway;
use rusqlite::{params, OptionalExtension, Params, Row};

const COLUMNS: &str = "id, name, category, prep_time, cook_time, servings, difficulty, \
                       ingredients, instructions, notes, favorite";

/// Free-text columns may be NULL and counts may be out of range in stores
/// this crate did not create; those read as empty text and clamp into `u32`.
fn map_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get(0)?,
        name: text(row, 1)?,
        category: row.get(2)?,
        prep_time: count(row, 3)?,
        cook_time: count(row, 4)?,
        servings: count(row, 5)?,
        difficulty: text(row, 6)?,
        ingredients: text(row, 7)?,
        instructions: text(row, 8)?,
        notes: row.get(9)?,
        favorite: row.get::<_, Option<i64>>(10)?.unwrap_or(0) != 0,
    })
}

fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn count(row: &Row<'_>, idx: usize) -> rusqlite::Result<u32> {
    let v = row.get::<_, Option<i64>>(idx)?.unwrap_or(0);
    Ok(v.clamp(0, i64::from(u32::MAX)) as u32)
}

fn query_recipes<P: Params>(gw: &Gateway, sql: &str, params: P) -> Result<Vec<Recipe>, AppError> {
    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_recipe)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Escape LIKE wildcards so the term matches literally, then wrap it in `%`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

pub fn recipe_list_all(gw: &Gateway) -> Result<Vec<Recipe>, AppError> {
    let sql = format!("SELECT {} FROM recipes ORDER BY name", COLUMNS);
    query_recipes(gw, &sql, [])
}

/// `Ok(None)` when no row has this id.
pub fn recipe_get(gw: &Gateway, id: i64) -> Result<Option<Recipe>, AppError> {
    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let sql = format!("SELECT {} FROM recipes WHERE id = ?1", COLUMNS);
    let recipe = conn.query_row(&sql, [id], map_recipe).optional()?;
    Ok(recipe)
}

/// Insert a draft and return the id the store assigned.
pub fn recipe_create(gw: &Gateway, draft: &RecipeDraft) -> Result<i64, AppError> {
    draft.validate()?;

    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let inserted = conn
        .execute(
            "INSERT INTO recipes (name, category, prep_time, cook_time, servings, difficulty, ingredients, instructions, notes, favorite) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                draft.name,
                draft.category,
                draft.prep_time,
                draft.cook_time,
                draft.servings,
                draft.difficulty,
                draft.ingredients,
                draft.instructions,
                draft.notes,
                draft.favorite,
            ],
        )?;
    if inserted == 0 {
        return Err(AppError::Statement("insert affected no rows".into()));
    }

    let id = conn.last_insert_rowid();
    if id <= 0 {
        return Err(AppError::Statement("store returned no id".into()));
    }
    log::debug!("Created recipe {} ({})", id, draft.name);
    Ok(id)
}

/// Rewrite every field of an existing recipe.
pub fn recipe_update(gw: &Gateway, recipe: &Recipe) -> Result<(), AppError> {
    recipe.validate()?;

    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let changed = conn
        .execute(
            "UPDATE recipes SET name = ?1, category = ?2, prep_time = ?3, cook_time = ?4, servings = ?5, difficulty = ?6, ingredients = ?7, instructions = ?8, notes = ?9, favorite = ?10 WHERE id = ?11",
            params![
                recipe.name,
                recipe.category,
                recipe.prep_time,
                recipe.cook_time,
                recipe.servings,
                recipe.difficulty,
                recipe.ingredients,
                recipe.instructions,
                recipe.notes,
                recipe.favorite,
                recipe.id,
            ],
        )?;
    if changed == 0 {
        return Err(AppError::NotFound(recipe.id));
    }
    Ok(())
}

pub fn recipe_delete(gw: &Gateway, id: i64) -> Result<(), AppError> {
    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let deleted = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::NotFound(id));
    }
    log::debug!("Deleted recipe {}", id);
    Ok(())
}

/// Literal, ASCII case-insensitive substring match on name, category or
/// ingredients. An empty term matches every recipe.
pub fn recipe_search(gw: &Gateway, term: &str) -> Result<Vec<Recipe>, AppError> {
    let sql = format!(
        r"SELECT {} FROM recipes WHERE name LIKE ?1 ESCAPE '\' OR category LIKE ?1 ESCAPE '\' OR ingredients LIKE ?1 ESCAPE '\' ORDER BY name",
        COLUMNS
    );
    query_recipes(gw, &sql, [like_pattern(term)])
}

/// Exact category match.
pub fn recipe_list_by_category(gw: &Gateway, category: &str) -> Result<Vec<Recipe>, AppError> {
    let sql = format!("SELECT {} FROM recipes WHERE category = ?1 ORDER BY name", COLUMNS);
    query_recipes(gw, &sql, [category])
}

pub fn recipe_list_favorites(gw: &Gateway) -> Result<Vec<Recipe>, AppError> {
    let sql = format!("SELECT {} FROM recipes WHERE favorite = 1 ORDER BY name", COLUMNS);
    query_recipes(gw, &sql, [])
}

/// Distinct non-empty categories, ascending.
pub fn recipe_list_categories(gw: &Gateway) -> Result<Vec<String>, AppError> {
    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let mut stmt = conn.prepare(
        "SELECT DISTINCT category FROM recipes WHERE category IS NOT NULL AND category != '' ORDER BY category",
    )?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn recipe_set_favorite(gw: &Gateway, id: i64, favorite: bool) -> Result<(), AppError> {
    let handle = gw.acquire()?;
    let conn = handle.conn()?;
    let changed = conn.execute(
        "UPDATE recipes SET favorite = ?1 WHERE id = ?2",
        params![favorite, id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("chicken"), "%chicken%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
