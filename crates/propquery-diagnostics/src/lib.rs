//! Property condition diagnostics
//!
//! This crate provides the error handling infrastructure for condition
//! construction and dispatch, including error codes and the error taxonomy.

mod error;
mod error_code;

pub use error::ConditionError;
pub use error_code::{
    ErrorCode, ErrorInfo, PQ0100, PQ0101, PQ0102, PQ0103, PQ0104, PQ0200, PQ0201,
};

/// Result type for condition operations
pub type ConditionResult<T> = std::result::Result<T, ConditionError>;
