use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of scoring one receipt. Never modified once stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub receipt_id: Uuid,
    pub points: u64,
}
