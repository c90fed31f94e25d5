//! Recipe record, its unsaved draft form, and editor rules.

use crate::domain::Difficulty;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREP_TIME: u32 = 15;
pub const DEFAULT_COOK_TIME: u32 = 30;
pub const DEFAULT_SERVINGS: u32 = 4;

pub const MIN_SERVINGS: u32 = 1;

/// Editor input limits. Not enforced by the repository.
pub const FORM_MAX_MINUTES: u32 = 999;
pub const FORM_MAX_SERVINGS: u32 = 100;

/// A recipe that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub category: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub ingredients: String,
    pub instructions: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl RecipeDraft {
    /// Draft pre-filled with the editor's defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            prep_time: DEFAULT_PREP_TIME,
            cook_time: DEFAULT_COOK_TIME,
            servings: DEFAULT_SERVINGS,
            difficulty: Difficulty::default().as_str().to_string(),
            ingredients: String::new(),
            instructions: String::new(),
            notes: None,
            favorite: false,
        }
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Trim every text field, as the editor does before saving.
    pub fn trimmed(mut self) -> Self {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.difficulty);
        trim_in_place(&mut self.ingredients);
        trim_in_place(&mut self.instructions);
        if let Some(c) = self.category.as_mut() {
            trim_in_place(c);
        }
        if let Some(n) = self.notes.as_mut() {
            trim_in_place(n);
        }
        self
    }

    /// Rules every stored recipe must satisfy.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_fields(&self.name, self.servings)
    }

    /// `validate` plus the editor's input limits.
    pub fn validate_form(&self) -> Result<(), AppError> {
        self.validate()?;
        validate_form_limits(self.prep_time, self.cook_time, self.servings)
    }
}

/// A stored recipe. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub ingredients: String,
    pub instructions: String,
    pub notes: Option<String>,
    pub favorite: bool,
}

impl Recipe {
    pub fn from_draft(id: i64, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            difficulty: draft.difficulty,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            notes: draft.notes,
            favorite: draft.favorite,
        }
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Known level for the stored difficulty text, if any.
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_fields(&self.name, self.servings)
    }
}

impl From<Recipe> for RecipeDraft {
    fn from(r: Recipe) -> Self {
        Self {
            name: r.name,
            category: r.category,
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            servings: r.servings,
            difficulty: r.difficulty,
            ingredients: r.ingredients,
            instructions: r.instructions,
            notes: r.notes,
            favorite: r.favorite,
        }
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

fn validate_fields(name: &str, servings: u32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if servings < MIN_SERVINGS {
        return Err(AppError::Validation(format!(
            "servings must be at least {}",
            MIN_SERVINGS
        )));
    }
    Ok(())
}

fn validate_form_limits(prep_time: u32, cook_time: u32, servings: u32) -> Result<(), AppError> {
    if prep_time > FORM_MAX_MINUTES || cook_time > FORM_MAX_MINUTES {
        return Err(AppError::Validation(format!(
            "times must be between 0 and {} minutes",
            FORM_MAX_MINUTES
        )));
    }
    if servings > FORM_MAX_SERVINGS {
        return Err(AppError::Validation(format!(
            "servings must be between {} and {}",
            MIN_SERVINGS, FORM_MAX_SERVINGS
        )));
    }
    Ok(())
}

fn trim_in_place(s: &mut String) {
    let t = s.trim();
    if t.len() != s.len() {
        *s = t.to_string();
    }
}
