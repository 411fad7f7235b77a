//! Personaje (character) entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `personajes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Personaje {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Centimetres.
    pub height: i32,
    /// Kilograms.
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    /// In-universe notation, e.g. `"19BBY"`.
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
}

/// DTO for inserting a character. Used by seeding; there is no HTTP create route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonaje {
    pub first_name: String,
    pub last_name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
}
