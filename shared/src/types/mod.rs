//! Common type definitions shared across layers

mod pagination;

pub use pagination::Pagination;
