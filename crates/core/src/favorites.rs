//! Favorite targets and the acting-user placeholder.
//!
//! A favorite links a user to exactly one planet or exactly one character.
//! [`FavoriteTarget`] is the only way to describe the target of a new
//! favorite, so "both set" and "neither set" cannot be constructed.

use crate::types::DbId;

/// The user every favorites operation acts as.
///
/// There is no authentication layer, so the caller's identity is never
/// derived from the request. Listing and adding favorites always use this
/// id. Deleting favorites is NOT scoped to it (see
/// `FavoritoRepo::delete_first_by_target`). Replace both once real sessions
/// exist.
///
/// The server creates this user at startup (`holonet_db::seed::ensure_acting_user`)
/// so new favorites satisfy the owner foreign key.
pub const ACTING_USER_ID: DbId = 1;

/// Response message for a successful user creation.
pub const MSG_CREATED_USER: &str = "created user";

/// Response message when the email is already registered.
pub const MSG_EXISTED_USER: &str = "existed user";

/// Response message for a successful favorite insert.
pub const MSG_CREATED_FAVORITE: &str = "created favorite";

/// Response message for a successful favorite removal.
pub const MSG_DELETED_FAVORITE: &str = "deleted favorite";

/// The entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// A row in `planetas`.
    Planeta(DbId),
    /// A row in `personajes`.
    Personaje(DbId),
}

impl FavoriteTarget {
    /// Value for the `planetas_id` column.
    pub fn planeta_id(self) -> Option<DbId> {
        match self {
            FavoriteTarget::Planeta(id) => Some(id),
            FavoriteTarget::Personaje(_) => None,
        }
    }

    /// Value for the `personajes_id` column.
    pub fn personaje_id(self) -> Option<DbId> {
        match self {
            FavoriteTarget::Planeta(_) => None,
            FavoriteTarget::Personaje(id) => Some(id),
        }
    }

    /// The raw id of the target, whichever kind it is.
    pub fn id(self) -> DbId {
        match self {
            FavoriteTarget::Planeta(id) | FavoriteTarget::Personaje(id) => id,
        }
    }

    /// Entity name used in logs and structured errors.
    pub fn entity(self) -> &'static str {
        match self {
            FavoriteTarget::Planeta(_) => "Planeta",
            FavoriteTarget::Personaje(_) => "Personaje",
        }
    }

    /// Message returned when the target does not exist or has no favorite.
    pub fn not_exist_message(self) -> &'static str {
        match self {
            FavoriteTarget::Planeta(_) => "Not exist planet",
            FavoriteTarget::Personaje(_) => "Not exist people",
        }
    }
}
