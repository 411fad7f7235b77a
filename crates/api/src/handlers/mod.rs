//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `holonet_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod favorite;
pub mod personaje;
pub mod planeta;
pub mod user;
