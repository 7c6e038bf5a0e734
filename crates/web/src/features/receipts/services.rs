use storage::{
    ReceiptStore,
    dto::receipt::ProcessReceiptRequest,
    error::Result,
    models::{Receipt, ScoredReceipt},
    services::receipt_processing,
};
use uuid::Uuid;

/// Score a validated receipt and remember the result
pub async fn process_receipt(
    store: &ReceiptStore,
    request: ProcessReceiptRequest,
) -> Result<ScoredReceipt> {
    let receipt = Receipt::from(request);
    receipt_processing::process_receipt(store, &receipt).await
}

/// Get the points stored for a receipt
pub async fn get_points(store: &ReceiptStore, receipt_id: Uuid) -> Result<u64> {
    receipt_processing::get_points(store, receipt_id).await
}
