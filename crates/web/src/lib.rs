use std::time::Duration;

use axum::Router;
use storage::ReceiptStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::receipts::handlers::process_receipt,
        features::receipts::handlers::get_points,
    ),
    components(
        schemas(
            storage::dto::receipt::ProcessReceiptRequest,
            storage::dto::receipt::ReceiptItemRequest,
            storage::dto::receipt::ProcessReceiptResponse,
            storage::dto::receipt::PointsResponse,
        )
    ),
    tags(
        (name = "receipts", description = "Receipt scoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the application router around a shared receipt store.
pub fn app(store: ReceiptStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/receipts", features::receipts::routes::routes())
        .with_state(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
