//! Character name rules shared by player and admin creation.

use midgard_core::error::AppError;
use midgard_entity::character::model::MAX_NAME_LENGTH;

/// Trim and check a requested character name.
pub fn normalize_name(name: Option<&str>) -> Result<String, AppError> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::validation("Character name is required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Character name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}

/// Check a requested job class, defaulting to the novice class.
pub fn normalize_class(class: Option<i16>) -> Result<i16, AppError> {
    match class {
        None => Ok(0),
        Some(c) if c >= 0 => Ok(c),
        Some(_) => Err(AppError::validation("Invalid character class")),
    }
}

/// Conflict message naming the character.
pub fn name_taken(name: &str) -> AppError {
    AppError::conflict(format!("Character \"{name}\" already exists"))
}
