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
use larder_core::{build_recent_listing, paginate, parse_page_number, Page, Recipe, PAGE_SIZE};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Page returned (1-based)
    pub page: usize,
    pub page_size: usize,
    /// Total number of visible recipes
    pub total: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
    pub pagination: PaginationMetadata,
}

impl From<Page<Recipe>> for ListRecipesResponse {
    fn from(page: Page<Recipe>) -> Self {
        Self {
            pagination: PaginationMetadata {
                page: page.number,
                page_size: page.page_size,
                total: page.total,
                num_pages: page.num_pages,
                has_next: page.has_next,
                has_previous: page.has_previous,
            },
            recipes: page.items,
        }
    }
}

/// Newest recipes first, six per page.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1). Invalid values mean 1; pages past the end return the last page.")
    ),
    responses(
        (status = 200, description = "Recipes visible to the caller", body = ListRecipesResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    viewer: MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let viewer_id = viewer.viewer_id();
    let mut conn = get_conn!(pool);

    let recipes = match repo::find_visible(&mut conn, viewer_id) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "failed to load recipes");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch recipes");
        }
    };

    let listing = build_recent_listing(viewer_id, recipes);
    let page = paginate(
        listing,
        parse_page_number(params.get("page").map(String::as_str)),
        PAGE_SIZE,
    );

    (StatusCode::OK, Json(ListRecipesResponse::from(page))).into_response()
}
