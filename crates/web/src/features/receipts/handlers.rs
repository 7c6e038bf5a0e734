use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    ReceiptStore,
    dto::receipt::{PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = ProcessReceiptRequest,
    responses(
        (status = 200, description = "Receipt scored, returns its id", body = ProcessReceiptResponse),
        (status = 400, description = "Invalid receipt")
    ),
    tag = "receipts"
)]
pub async fn process_receipt(
    State(store): State<ReceiptStore>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected receipt body: {}", rejection.body_text());
        WebError::BadRequest("Invalid request body".to_string())
    })?;
    payload.validate()?;

    let scored = services::process_receipt(&store, payload).await?;

    Ok(Json(ProcessReceiptResponse {
        id: scored.receipt_id,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Receipt ID returned by /receipts/process")
    ),
    responses(
        (status = 200, description = "Points awarded to the receipt", body = PointsResponse),
        (status = 400, description = "Malformed receipt ID"),
        (status = 404, description = "No receipt found for that ID")
    ),
    tag = "receipts"
)]
pub async fn get_points(
    State(store): State<ReceiptStore>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let receipt_id = Uuid::parse_str(&id)
        .map_err(|_| WebError::BadRequest("Invalid receipt ID format".to_string()))?;

    let points = services::get_points(&store, receipt_id).await?;

    Ok(Json(PointsResponse { points }).into_response())
}
