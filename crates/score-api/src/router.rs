use axum::Router;
use axum::routing::get;

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, errors::ApiError, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/api/vault-score/{network}/{address}",
            get(handlers::get_vault_score),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("The requested resource was not found".to_string())
}
