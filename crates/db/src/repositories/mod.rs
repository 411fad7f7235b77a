//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod favorito_repo;
pub mod personaje_repo;
pub mod planeta_repo;
pub mod user_repo;

pub use favorito_repo::FavoritoRepo;
pub use personaje_repo::PersonajeRepo;
pub use planeta_repo::PlanetaRepo;
pub use user_repo::UserRepo;
