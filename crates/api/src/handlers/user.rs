//! Handlers for the `/user` resource.

use axum::extract::State;
use axum::Json;
use holonet_core::favorites::{ACTING_USER_ID, MSG_CREATED_USER, MSG_EXISTED_USER};
use holonet_db::models::favorito::Favorito;
use holonet_db::models::user::{CreateUser, UserResponse};
use holonet_db::repositories::{FavoritoRepo, UserRepo};

use crate::error::{is_unique_violation, AppResult};
use crate::extract::JsonBody;
use crate::response::{MsgReply, MsgResponse};
use crate::state::AppState;

/// GET /user
///
/// Every user, without passwords.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/favorites
///
/// Favorites of the fixed acting user. The caller's identity is never read
/// from the request; see [`ACTING_USER_ID`].
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorito>>> {
    let favorites = FavoritoRepo::list_by_user(&state.pool, ACTING_USER_ID).await?;
    Ok(Json(favorites))
}

/// POST /user/create
///
/// Registers `email` unless it is already taken. The password is stored as
/// given (no hashing).
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<MsgReply> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        tracing::debug!("Registration rejected: email already exists");
        return Ok(MsgResponse::bad_request(MSG_EXISTED_USER));
    }

    match UserRepo::create(&state.pool, &input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User created");
            Ok(MsgResponse::ok(MSG_CREATED_USER))
        }
        // Lost a race with a concurrent registration of the same email.
        Err(err) if is_unique_violation(&err, "uq_users_email") => {
            Ok(MsgResponse::bad_request(MSG_EXISTED_USER))
        }
        Err(err) => Err(err.into()),
    }
}
