use crate::api::{error_response, ErrorResponse};
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::repo;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::Recipe;
use std::sync::Arc;
use uuid::Uuid;

/// Private recipes are reported as missing to everyone but their owner.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn get_recipe(
    viewer: MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match repo::get_by_id(&mut conn, id) {
        Ok(Some(recipe)) if recipe.is_visible_to(viewer.viewer_id()) => {
            (StatusCode::OK, Json(recipe)).into_response()
        }
        Ok(_) => error_response(StatusCode::NOT_FOUND, "Recipe not found"),
        Err(e) => {
            tracing::error!(error = %e, recipe_id = %id, "failed to fetch recipe");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch recipe")
        }
    }
}
