//! Shared response types for API handlers.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// `{ "msg": ... }` body used for the outcome of write operations.
///
/// Both success and expected failures ("existed user", "Not exist planet")
/// use this shape; only the status code differs.
#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: &'static str,
}

/// Handler return type for write operations.
pub type MsgReply = (StatusCode, Json<MsgResponse>);

impl MsgResponse {
    /// 200 with the given message.
    pub fn ok(msg: &'static str) -> MsgReply {
        (StatusCode::OK, Json(MsgResponse { msg }))
    }

    /// 400 with the given message.
    pub fn bad_request(msg: &'static str) -> MsgReply {
        (StatusCode::BAD_REQUEST, Json(MsgResponse { msg }))
    }
}
