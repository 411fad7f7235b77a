//! Startup seeding: the acting user and the demo catalog.
//!
//! Every favorite is written for the acting user, so [`ensure_acting_user`]
//! runs on every startup. Characters and planets have no HTTP create route,
//! so a fresh database has nothing to favorite; [`seed_demo_data`] fills the
//! catalog with a small canonical set when enabled. Both are safe to run
//! repeatedly: each table is only seeded while empty.

use holonet_core::favorites::ACTING_USER_ID;
use sqlx::PgPool;
use tracing::info;

use crate::models::personaje::CreatePersonaje;
use crate::models::planeta::CreatePlaneta;
use crate::repositories::{PersonajeRepo, PlanetaRepo};

/// Counts of rows inserted by one seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub personajes: u64,
    pub planetas: u64,
}

/// Seed the acting user, characters and planets where missing.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport {
        users: ensure_acting_user(pool).await?,
        ..SeedReport::default()
    };

    if PersonajeRepo::count(pool).await? == 0 {
        for personaje in demo_personajes() {
            PersonajeRepo::create(pool, &personaje).await?;
            report.personajes += 1;
        }
    }

    if PlanetaRepo::count(pool).await? == 0 {
        for planeta in demo_planetas() {
            PlanetaRepo::create(pool, &planeta).await?;
            report.planetas += 1;
        }
    }

    info!(
        users = report.users,
        personajes = report.personajes,
        planetas = report.planetas,
        "Demo data seeded"
    );
    Ok(report)
}

/// Ensure the user every favorites operation acts as exists.
///
/// Without it, adding a favorite fails the owner foreign key. The row is
/// inserted with an explicit id, so the sequence is moved past it afterwards
/// to keep later registrations from colliding. Returns the number of rows
/// inserted (0 when the user already existed).
pub async fn ensure_acting_user(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let inserted = sqlx::query(
        "INSERT INTO users (id, email, password)
         VALUES ($1, 'acting-user@holonet.local', 'changeme')
         ON CONFLICT DO NOTHING",
    )
    .bind(ACTING_USER_ID)
    .execute(pool)
    .await?
    .rows_affected();

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('users', 'id'),
                       GREATEST((SELECT MAX(id) FROM users), 1))",
    )
    .execute(pool)
    .await?;

    Ok(inserted)
}

#[allow(clippy::too_many_arguments)]
fn personaje(
    first_name: &str,
    last_name: &str,
    height: i32,
    mass: i32,
    hair_color: &str,
    skin_color: &str,
    eye_color: &str,
    birth_year: &str,
    gender: &str,
    homeworld: &str,
) -> CreatePersonaje {
    CreatePersonaje {
        first_name: first_name.into(),
        last_name: last_name.into(),
        height,
        mass,
        hair_color: hair_color.into(),
        skin_color: skin_color.into(),
        eye_color: eye_color.into(),
        birth_year: birth_year.into(),
        gender: gender.into(),
        homeworld: homeworld.into(),
    }
}

#[rustfmt::skip]
fn demo_personajes() -> Vec<CreatePersonaje> {
    vec![
        personaje("Luke", "Skywalker", 172, 77, "blond", "fair", "blue", "19BBY", "male", "Tatooine"),
        personaje("Leia", "Organa", 150, 49, "brown", "light", "brown", "19BBY", "female", "Alderaan"),
        personaje("Han", "Solo", 180, 80, "brown", "fair", "brown", "29BBY", "male", "Corellia"),
        personaje("Obi-Wan", "Kenobi", 182, 77, "auburn, white", "fair", "blue-gray", "57BBY", "male", "Stewjon"),
        personaje("Padme", "Amidala", 165, 45, "brown", "light", "brown", "46BBY", "female", "Naboo"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn planeta(
    name: &str,
    rotation_period: i32,
    orbital_period: i32,
    diameter: i32,
    climate: &str,
    gravity: &str,
    terrain: &str,
    surface_water: i32,
    population: i64,
) -> CreatePlaneta {
    CreatePlaneta {
        name: name.into(),
        rotation_period,
        orbital_period,
        diameter,
        climate: climate.into(),
        gravity: gravity.into(),
        terrain: terrain.into(),
        surface_water,
        population,
    }
}

#[rustfmt::skip]
fn demo_planetas() -> Vec<CreatePlaneta> {
    vec![
        planeta("Tatooine", 23, 304, 10465, "arid", "1 standard", "desert", 1, 200_000),
        planeta("Alderaan", 24, 364, 12500, "temperate", "1 standard", "grasslands, mountains", 40, 2_000_000_000),
        planeta("Hoth", 23, 549, 7200, "frozen", "1.1 standard", "tundra, ice caves, mountain ranges", 100, 0),
        planeta("Naboo", 26, 312, 12120, "temperate", "1 standard", "grassy hills, swamps, forests, mountains", 12, 4_500_000_000),
        planeta("Coruscant", 24, 368, 12240, "temperate", "1 standard", "cityscape, mountains", 0, 1_000_000_000_000),
    ]
}
