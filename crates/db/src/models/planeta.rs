//! Planeta (planet) entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planetas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Planeta {
    pub id: DbId,
    pub name: String,
    /// Standard hours per day.
    pub rotation_period: i32,
    /// Standard days per year.
    pub orbital_period: i32,
    /// Kilometres.
    pub diameter: i32,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    /// Percentage of the surface covered by water.
    pub surface_water: i32,
    pub population: i64,
}

/// DTO for inserting a planet. Used by seeding; there is no HTTP create route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaneta {
    pub name: String,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub diameter: i32,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: i32,
    pub population: i64,
}
