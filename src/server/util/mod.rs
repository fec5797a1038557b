//! Small helpers shared across the service layer.

pub mod forest;
pub mod pagination;
