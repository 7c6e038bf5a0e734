//! Receipt scoring: the points rules, the in-memory store of scored
//! receipts, and the request types the HTTP layer decodes.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use store::ReceiptStore;
