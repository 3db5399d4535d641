use crate::api::{error_response, ErrorResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::repo;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{Recipe, RecipeFields};
use std::sync::Arc;
use uuid::Uuid;

/// Replace every editable field. Owner and creation time are kept.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeFields,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecipeFields>,
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

    let fields = match request.validate() {
        Ok(f) => f,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match repo::update(&mut conn, id, &fields) {
        Ok(recipe) => {
            tracing::info!(recipe_id = %id, user_id = %user.id, "recipe updated");
            (StatusCode::OK, Json(recipe)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, recipe_id = %id, "failed to update recipe");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update recipe")
        }
    }
}
