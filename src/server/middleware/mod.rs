//! Request extractors that validate path and query input before handlers run.

pub mod validation;
