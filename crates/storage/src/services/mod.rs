pub mod points_computation;
pub mod receipt_processing;
