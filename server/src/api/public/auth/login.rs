use crate::api::{error_response, ErrorResponse};
use crate::auth::{authenticate, create_session};
use crate::db::DbPool;
use crate::get_conn;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"username": "cook", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let user = match authenticate(&mut conn, &req.username, &req.password) {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::debug!("login rejected");
            return error_response(StatusCode::UNAUTHORIZED, "Invalid credentials");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to look up user");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
        }
    };

    let token = match create_session(&mut conn, user.id) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "failed to create session");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session");
        }
    };

    tracing::info!(user_id = %user.id, "user logged in");
    (StatusCode::OK, Json(LoginResponse { token })).into_response()
}
