//! Repository for the `planetas` table.

use holonet_core::types::DbId;
use sqlx::PgPool;

use crate::models::planeta::{CreatePlaneta, Planeta};

const COLUMNS: &str = "id, name, rotation_period, orbital_period, diameter, climate, \
                       gravity, terrain, surface_water, population";

/// Read access to the planet catalog, plus the insert used by seeding.
pub struct PlanetaRepo;

impl PlanetaRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlaneta) -> Result<Planeta, sqlx::Error> {
        let query = format!(
            "INSERT INTO planetas (name, rotation_period, orbital_period, diameter, climate,
                                   gravity, terrain, surface_water, population)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planeta>(&query)
            .bind(&input.name)
            .bind(input.rotation_period)
            .bind(input.orbital_period)
            .bind(input.diameter)
            .bind(&input.climate)
            .bind(&input.gravity)
            .bind(&input.terrain)
            .bind(input.surface_water)
            .bind(input.population)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planeta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planetas WHERE id = $1");
        sqlx::query_as::<_, Planeta>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a planet with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM planetas WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List every planet ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planeta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planetas ORDER BY id");
        sqlx::query_as::<_, Planeta>(&query).fetch_all(pool).await
    }

    /// Total number of planets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planetas")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
