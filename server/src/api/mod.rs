pub mod public;
pub mod recipes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// `(status, {"error": message})` as a response.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![public::ApiDoc::openapi(), recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = openapi();
        for path in [
            "/api/auth/signup",
            "/api/auth/login",
            "/api/recipes",
            "/api/recipes/table",
            "/api/recipes/autofill",
            "/api/recipes/{id}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_openapi_has_shared_schemas() {
        let spec = openapi();
        let components = spec.components.expect("components");
        for schema in ["ErrorResponse", "Recipe", "AutofillDraft", "SortColumn"] {
            assert!(components.schemas.contains_key(schema), "missing {}", schema);
        }
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
