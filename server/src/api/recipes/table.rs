use crate::api::{error_response, ErrorResponse};
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::repo;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{
    build_sorted_listing, sort_columns, Direction, Recipe, SortColumn, SortField, SortSpec,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeTableResponse {
    pub recipes: Vec<Recipe>,
    /// Field the recipes are actually ordered by
    pub current_sort: SortField,
    pub current_dir: Direction,
    /// Header link state for each sortable column
    pub columns: Vec<SortColumn>,
}

impl RecipeTableResponse {
    fn new(recipes: Vec<Recipe>, spec: SortSpec) -> Self {
        Self {
            recipes,
            current_sort: spec.field,
            current_dir: spec.direction,
            columns: sort_columns(spec),
        }
    }
}

/// All visible recipes ordered by a whitelisted column.
///
/// Unknown `sort` values order by cost; any `dir` other than `desc` is ascending.
#[utoipa::path(
    get,
    path = "/api/recipes/table",
    tag = "recipes",
    params(
        ("sort" = Option<String>, Query, description = "One of name, description, cost, time, is_public (default: cost)"),
        ("dir" = Option<String>, Query, description = "asc or desc (default: asc)")
    ),
    responses(
        (status = 200, description = "Sorted recipes visible to the caller", body = RecipeTableResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn recipe_table(
    viewer: MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let spec = SortSpec::from_params(
        params.get("sort").map(String::as_str),
        params.get("dir").map(String::as_str),
    );
    let viewer_id = viewer.viewer_id();
    let mut conn = get_conn!(pool);

    let recipes = match repo::find_visible(&mut conn, viewer_id) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "failed to load recipes");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch recipes");
        }
    };

    let listing = build_sorted_listing(viewer_id, spec, recipes);
    (StatusCode::OK, Json(RecipeTableResponse::new(listing, spec))).into_response()
}
