mod receipt;
mod scored_receipt;

pub use receipt::{Item, Receipt};
pub use scored_receipt::ScoredReceipt;
