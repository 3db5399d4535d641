pub mod autofill;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod table;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/table", get(table::recipe_table))
        .route("/autofill", get(autofill::autofill))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        table::recipe_table,
        autofill::autofill,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        larder_core::Recipe,
        larder_core::RecipeFields,
        larder_core::AutofillDraft,
        larder_core::SortField,
        larder_core::Direction,
        larder_core::SortColumn,
        list::ListRecipesResponse,
        list::PaginationMetadata,
        table::RecipeTableResponse,
        create::CreateRecipeResponse,
    ))
)]
pub struct ApiDoc;
