//! Comparison operators

use propquery_diagnostics::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison kind applied by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    /// Equality
    Equals,
    /// Inequality
    NotEquals,
    /// Inclusive range
    Between,
    /// Membership in a set of values
    In,
    /// Greater than
    GreaterThan,
    /// Less than
    LessThan,
    /// Property has no value
    IsNull,
    /// Property has a value
    IsNotNull,
}

/// Number of operands an operator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandArity {
    /// No operand (null checks)
    None,
    /// Exactly one operand
    One,
    /// Exactly two operands (range bounds)
    Two,
    /// One or more operands
    AtLeastOne,
}

impl OperandArity {
    /// Check if `count` operands satisfy this arity
    pub const fn accepts(&self, count: usize) -> bool {
        match self {
            Self::None => count == 0,
            Self::One => count == 1,
            Self::Two => count == 2,
            Self::AtLeastOne => count >= 1,
        }
    }

    /// Human-readable expected count
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::AtLeastOne => "at least 1",
        }
    }
}

impl Operator {
    /// All operators, in declaration order
    pub const ALL: [Operator; 8] = [
        Self::Equals,
        Self::NotEquals,
        Self::Between,
        Self::In,
        Self::GreaterThan,
        Self::LessThan,
        Self::IsNull,
        Self::IsNotNull,
    ];

    /// Get the canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
        }
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Between => "between",
            Self::In => "in",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::IsNull => "is null",
            Self::IsNotNull => "is not null",
        }
    }

    /// Number of operands this operator takes
    pub const fn arity(&self) -> OperandArity {
        match self {
            Self::IsNull | Self::IsNotNull => OperandArity::None,
            Self::Equals | Self::NotEquals | Self::GreaterThan | Self::LessThan => {
                OperandArity::One
            }
            Self::Between => OperandArity::Two,
            Self::In => OperandArity::AtLeastOne,
        }
    }

    /// Check if this is a null check
    pub const fn is_null_check(&self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// Check if all operands must share one kind
    pub const fn requires_uniform_operands(&self) -> bool {
        matches!(self, Self::Between | Self::In)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = ConditionError;

    /// Parse a canonical operator name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConditionError::unsupported_operator(s))
    }
}
