use crate::api::{error_response, ErrorResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::repo;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match repo::get_by_id(&mut conn, id) {
        Ok(Some(recipe)) if recipe.is_editable_by(user.id) => {}
        Ok(_) => return error_response(StatusCode::NOT_FOUND, "Recipe not found"),
        Err(e) => {
            tracing::error!(error = %e, recipe_id = %id, "failed to fetch recipe");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch recipe");
        }
    }

    match repo::delete(&mut conn, id) {
        Ok(0) => error_response(StatusCode::NOT_FOUND, "Recipe not found"),
        Ok(_) => {
            tracing::info!(recipe_id = %id, user_id = %user.id, "recipe deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, recipe_id = %id, "failed to delete recipe");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete recipe")
        }
    }
}
