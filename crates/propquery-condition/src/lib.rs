//! Property conditions
//!
//! This crate turns a declarative filter (a property, an operator and zero,
//! one or many operand values) into calls against a query builder:
//!
//! - **Coercion**: operands are validated against the property's semantic
//!   type and normalized (dates to epoch milliseconds, booleans to 0/1)
//! - **Conditions**: immutable values that can only be built through coercion
//! - **Dispatch**: an exhaustive match over operator and operand kind that
//!   selects exactly one builder operation
//!
//! # Example
//!
//! ```ignore
//! use propquery_condition::{Condition, Operator};
//! use propquery_types::{Property, PropertyType};
//!
//! let age = Property::new(2, "age", PropertyType::Integer64);
//! let condition = Condition::with_values(age, Operator::Between, [18i64, 65])?;
//! condition.apply_to(&mut builder);
//! ```
//!
//! # Unmatched dispatch
//!
//! Some operator/kind pairs have no builder operation (for example Equals on
//! a double). `Condition::apply_to` skips those silently; a `Dispatcher`
//! configured with `Unmatched::Reject` reports them as errors instead.

pub mod builder;
pub mod coercion;
pub mod condition;
pub mod config;
pub mod dispatch;
pub mod operator;

pub use builder::{BuilderOp, QueryBuilder};
pub use coercion::OperandCoercer;
pub use condition::{Condition, Operands, Payload};
pub use config::{DispatchConfig, Unmatched};
pub use dispatch::{Dispatch, Dispatcher};
pub use operator::{OperandArity, Operator};

pub use propquery_diagnostics::{ConditionError, ConditionResult};
