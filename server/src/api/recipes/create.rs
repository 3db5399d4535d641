use crate::api::{error_response, ErrorResponse};
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::repo;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder_core::RecipeFields;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
}

/// Anonymous submissions are stored without an owner.
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeFields,
    responses(
        (status = 201, description = "Recipe created successfully", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    viewer: MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<RecipeFields>,
) -> impl IntoResponse {
    let fields = match request.validate() {
        Ok(f) => f,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let owner = viewer.viewer_id();
    let mut conn = get_conn!(pool);

    match repo::create(&mut conn, &fields, owner) {
        Ok(recipe) => {
            tracing::info!(recipe_id = %recipe.id, owner = ?owner, "recipe created");
            (
                StatusCode::CREATED,
                Json(CreateRecipeResponse { id: recipe.id }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create recipe");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create recipe")
        }
    }
}
