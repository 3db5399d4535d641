use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use larder_core::{AutofillDraft, AutofillResolver};
use std::collections::HashMap;
use std::sync::Arc;

/// Look up a recipe name in the external recipe database.
///
/// Always 200: `success` says whether the draft holds anything.
#[utoipa::path(
    get,
    path = "/api/recipes/autofill",
    tag = "recipes",
    params(
        ("name" = Option<String>, Query, description = "Free-text recipe name")
    ),
    responses(
        (status = 200, description = "Draft fields, or success=false", body = AutofillDraft)
    )
)]
pub async fn autofill(
    State(resolver): State<Arc<AutofillResolver>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let name = params.get("name").map(String::as_str).unwrap_or_default();
    Json(resolver.resolve(name).await)
}
