use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::ScoredReceipt;

/// Process-local store of scored receipts, keyed by receipt id.
///
/// Cloning the store hands out another handle to the same map, so it can be
/// shared across request handlers. Entries are only ever inserted; nothing is
/// evicted until the process exits.
#[derive(Debug, Default, Clone)]
pub struct ReceiptStore {
    points: Arc<RwLock<HashMap<Uuid, u64>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `points` under a freshly generated v4 id and return the entry.
    pub async fn create(&self, points: u64) -> ScoredReceipt {
        let receipt_id = Uuid::new_v4();

        let mut map = self.points.write().await;
        map.entry(receipt_id).or_insert(points);

        ScoredReceipt { receipt_id, points }
    }

    pub async fn get(&self, receipt_id: Uuid) -> Result<u64> {
        let map = self.points.read().await;
        map.get(&receipt_id).copied().ok_or(StorageError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}
