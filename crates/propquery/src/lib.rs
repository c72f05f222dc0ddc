//! Typed property conditions for query builders
//!
//! This crate turns a declarative filter (a property, a comparison operator
//! and its operand values) into a single call on a query builder:
//! - Operands are validated against the property's semantic type
//! - Dates are normalized to epoch milliseconds, booleans to 0/1
//! - Dispatch selects one builder operation per operator and operand kind
//!
//! # Example
//!
//! ```ignore
//! use propquery::prelude::*;
//!
//! let age = Property::new(1, "age", PropertyType::Integer32);
//! let condition = age.between(18, 65)?;
//! condition.apply_to(&mut builder);
//! ```

// Re-export all public APIs from internal crates
pub use propquery_condition as condition;
pub use propquery_diagnostics as diagnostics;
pub use propquery_types as types;

mod conditions;

pub use conditions::PropertyConditions;

// Convenience re-exports
pub use propquery_condition::{
    BuilderOp, Condition, Dispatch, DispatchConfig, Dispatcher, OperandCoercer, Operator,
    QueryBuilder, Unmatched,
};
pub use propquery_diagnostics::{ConditionError, ConditionResult, ErrorCode};
pub use propquery_types::{Operand, OperandKind, Property, PropertyType, RawValue};

/// Commonly used items
pub mod prelude {
    pub use crate::PropertyConditions;
    pub use propquery_condition::{Condition, Dispatcher, Operator, QueryBuilder};
    pub use propquery_diagnostics::{ConditionError, ConditionResult};
    pub use propquery_types::{Property, PropertyType, RawValue};
}
