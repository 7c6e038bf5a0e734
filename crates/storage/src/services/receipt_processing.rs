use uuid::Uuid;

use crate::error::Result;
use crate::models::{Receipt, ScoredReceipt};
use crate::services::points_computation;
use crate::store::ReceiptStore;

/// Score a receipt and record the result under a new id.
///
/// Nothing is stored when the receipt fails to parse.
pub async fn process_receipt(store: &ReceiptStore, receipt: &Receipt) -> Result<ScoredReceipt> {
    let points = points_computation::compute_points(receipt)?;

    let scored = store.create(points).await;
    tracing::info!(receipt_id = %scored.receipt_id, points, "Receipt processed");

    Ok(scored)
}

/// Points previously awarded to the receipt with this id.
pub async fn get_points(store: &ReceiptStore, receipt_id: Uuid) -> Result<u64> {
    store.get(receipt_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReceiptField, StorageError};
    use crate::models::Item;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Test Store".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "15:00".to_string(),
            total: "10.00".to_string(),
            items: vec![Item::new("Item 1", "10.00")],
        }
    }

    #[tokio::test]
    async fn test_processed_receipt_can_be_queried() {
        let store = ReceiptStore::new();

        let scored = process_receipt(&store, &receipt()).await.unwrap();

        // 9 + 50 + 25 + 0 + 2 + 6 + 10
        assert_eq!(scored.points, 102);
        assert_eq!(get_points(&store, scored.receipt_id).await.unwrap(), 102);
    }

    #[tokio::test]
    async fn test_parse_failure_stores_nothing() {
        let store = ReceiptStore::new();
        let mut bad = receipt();
        bad.purchase_time = "3pm".to_string();

        let err = process_receipt(&store, &bad).await.unwrap_err();

        match err {
            StorageError::Parse(e) => assert_eq!(e.field, ReceiptField::PurchaseTime),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_points_for_unknown_id() {
        let store = ReceiptStore::new();

        let result = get_points(&store, Uuid::new_v4()).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }
}
