//! Repository for the `personajes` table.

use holonet_core::types::DbId;
use sqlx::PgPool;

use crate::models::personaje::{CreatePersonaje, Personaje};

const COLUMNS: &str = "id, first_name, last_name, height, mass, hair_color, skin_color, \
                       eye_color, birth_year, gender, homeworld";

/// Read access to the character catalog, plus the insert used by seeding.
pub struct PersonajeRepo;

impl PersonajeRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePersonaje) -> Result<Personaje, sqlx::Error> {
        let query = format!(
            "INSERT INTO personajes (first_name, last_name, height, mass, hair_color,
                                     skin_color, eye_color, birth_year, gender, homeworld)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personaje>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.height)
            .bind(input.mass)
            .bind(&input.hair_color)
            .bind(&input.skin_color)
            .bind(&input.eye_color)
            .bind(&input.birth_year)
            .bind(&input.gender)
            .bind(&input.homeworld)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personaje>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personajes WHERE id = $1");
        sqlx::query_as::<_, Personaje>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a character with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM personajes WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List every character ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Personaje>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personajes ORDER BY id");
        sqlx::query_as::<_, Personaje>(&query).fetch_all(pool).await
    }

    /// Total number of characters.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM personajes")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
