//! Condition error types

use crate::{ErrorCode, PQ0100, PQ0101, PQ0102, PQ0103, PQ0104, PQ0200, PQ0201};
use std::fmt;
use thiserror::Error;

/// Errors raised while building or dispatching a property condition
///
/// Every coercion failure names the property and the rejected raw value,
/// so callers can tell exactly which pairing was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// A sequence was supplied where a single value is required
    #[error(
        "Illegal value for property '{property}': found array {value}, but a simple value is required"
    )]
    InvalidOperandShape { property: String, value: String },

    /// The operand kind does not fit the property's semantic type
    #[error(
        "Illegal value for property '{property}': expected {expected}, found {value}"
    )]
    InvalidOperandType {
        property: String,
        expected: String,
        value: String,
    },

    /// The operand kind fits but its value does not
    #[error("Illegal value {value} for property '{property}': {reason}")]
    InvalidOperandValue {
        property: String,
        value: String,
        reason: String,
    },

    /// An operator that needs operands received none
    #[error("Operator {operator} on property '{property}' requires operand values")]
    MissingOperands { property: String, operator: String },

    /// The number of operands does not match the operator
    #[error(
        "Operator {operator} on property '{property}' expects {expected} operand(s), found {found}"
    )]
    InvalidOperandCount {
        property: String,
        operator: String,
        expected: String,
        found: usize,
    },

    /// Operator name outside the known set
    #[error("Unsupported operator: {operator}")]
    UnsupportedOperator { operator: String },

    /// No builder operation exists for the operator and operand kind
    #[error(
        "No builder operation for {operator} on {kind} operands of property '{property}'"
    )]
    UnsupportedOperandKind {
        property: String,
        operator: String,
        kind: String,
    },
}

impl ConditionError {
    /// Create an invalid operand shape error
    pub fn invalid_shape(property: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::InvalidOperandShape {
            property: property.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid operand type error
    pub fn invalid_type(
        property: impl Into<String>,
        expected: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        Self::InvalidOperandType {
            property: property.into(),
            expected: expected.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid operand value error
    pub fn invalid_value(
        property: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperandValue {
            property: property.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a missing operands error
    pub fn missing_operands(property: impl Into<String>, operator: impl fmt::Display) -> Self {
        Self::MissingOperands {
            property: property.into(),
            operator: operator.to_string(),
        }
    }

    /// Create an invalid operand count error
    pub fn invalid_count(
        property: impl Into<String>,
        operator: impl fmt::Display,
        expected: impl Into<String>,
        found: usize,
    ) -> Self {
        Self::InvalidOperandCount {
            property: property.into(),
            operator: operator.to_string(),
            expected: expected.into(),
            found,
        }
    }

    /// Create an unsupported operator error
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Create an unsupported operand kind error
    pub fn unsupported_kind(
        property: impl Into<String>,
        operator: impl fmt::Display,
        kind: impl fmt::Display,
    ) -> Self {
        Self::UnsupportedOperandKind {
            property: property.into(),
            operator: operator.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidOperandShape { .. } => PQ0100,
            Self::InvalidOperandType { .. } => PQ0101,
            Self::InvalidOperandValue { .. } => PQ0102,
            Self::MissingOperands { .. } => PQ0103,
            Self::InvalidOperandCount { .. } => PQ0104,
            Self::UnsupportedOperator { .. } => PQ0200,
            Self::UnsupportedOperandKind { .. } => PQ0201,
        }
    }

    /// Name of the property the error refers to, if any
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::InvalidOperandShape { property, .. }
            | Self::InvalidOperandType { property, .. }
            | Self::InvalidOperandValue { property, .. }
            | Self::MissingOperands { property, .. }
            | Self::InvalidOperandCount { property, .. }
            | Self::UnsupportedOperandKind { property, .. } => Some(property),
            Self::UnsupportedOperator { .. } => None,
        }
    }

    /// Whether the error was raised while coercing operands
    pub fn is_coercion_error(&self) -> bool {
        self.code().is_coercion_error()
    }
}
