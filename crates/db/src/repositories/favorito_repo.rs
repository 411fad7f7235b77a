//! Repository for the `favoritos` table.

use holonet_core::favorites::FavoriteTarget;
use holonet_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorito::Favorito;

const COLUMNS: &str = "id, user_id, planetas_id, personajes_id";

/// Column holding the foreign key for the given target kind.
fn target_column(target: FavoriteTarget) -> &'static str {
    match target {
        FavoriteTarget::Planeta(_) => "planetas_id",
        FavoriteTarget::Personaje(_) => "personajes_id",
    }
}

/// Provides insert, list and delete operations for favorites.
///
/// No update path exists.
pub struct FavoritoRepo;

impl FavoritoRepo {
    /// Insert a favorite for `user_id` pointing at `target`.
    ///
    /// The column for the other target kind is always written as NULL.
    /// Duplicates are not checked: repeated calls create repeated rows.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Favorito, sqlx::Error> {
        let query = format!(
            "INSERT INTO favoritos (user_id, planetas_id, personajes_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorito>(&query)
            .bind(user_id)
            .bind(target.planeta_id())
            .bind(target.personaje_id())
            .fetch_one(pool)
            .await
    }

    /// List all favorites owned by `user_id`, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorito>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favoritos WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Favorito>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the first (lowest id) favorite pointing at `target`.
    ///
    /// Not scoped to any user: whichever user owns the first matching row
    /// loses it. Returns the removed row, or `None` if nothing matched.
    pub async fn delete_first_by_target(
        pool: &PgPool,
        target: FavoriteTarget,
    ) -> Result<Option<Favorito>, sqlx::Error> {
        let column = target_column(target);
        let query = format!(
            "DELETE FROM favoritos
             WHERE id = (
                 SELECT id FROM favoritos WHERE {column} = $1 ORDER BY id LIMIT 1
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorito>(&query)
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }
}
