//! Favorito (user favorite) entity model.

use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A favorite row from the `favoritos` table.
///
/// Exactly one of `planetas_id` / `personajes_id` is set for rows created
/// through `FavoritoRepo::create`. The unset one serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorito {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub planetas_id: Option<DbId>,
    pub personajes_id: Option<DbId>,
}
