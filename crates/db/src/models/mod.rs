//! Row structs and DTOs, one module per table.
//!
//! Row structs derive `FromRow` and select only the declared attributes of
//! each entity. Where a row holds a secret (users), a separate response type
//! is the serializable projection.

pub mod favorito;
pub mod personaje;
pub mod planeta;
pub mod user;
