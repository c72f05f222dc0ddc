//! Property condition types
//!
//! This crate defines the values that flow through condition building:
//! - Property metadata (semantic type, id, name)
//! - Raw operand values as supplied by callers
//! - Normalized operands, a closed union decided once at coercion time

pub mod operand;
pub mod property;
pub mod value;

pub use operand::{Operand, OperandKind};
pub use property::{Property, PropertyType};
pub use value::RawValue;
