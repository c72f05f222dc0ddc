//! Normalized operands
//!
//! After coercion every operand is one of five kinds. Dispatch matches on
//! this closed set instead of probing runtime types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a normalized operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandKind {
    /// 64-bit signed integer
    Long,
    /// 32-bit signed integer
    Int,
    /// 64-bit float
    Double,
    /// 32-bit float
    Float,
    /// String
    String,
}

impl OperandKind {
    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Int => "int",
            Self::Double => "double",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value compared against a property, already normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Operand {
    /// 64-bit signed integer (also epoch milliseconds for dates)
    Long(i64),
    /// 32-bit signed integer (also 0/1 for booleans)
    Int(i32),
    /// 64-bit float
    Double(f64),
    /// 32-bit float
    Float(f32),
    /// String
    String(String),
}

impl Operand {
    /// Get the kind tag
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Long(_) => OperandKind::Long,
            Self::Int(_) => OperandKind::Int,
            Self::Double(_) => OperandKind::Double,
            Self::Float(_) => OperandKind::Float,
            Self::String(_) => OperandKind::String,
        }
    }

    /// Try to get as Long
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Try to get as Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(l) => write!(f, "{}L", l),
            Self::Int(i) => write!(f, "{}", i),
            Self::Double(v) => write!(f, "{}d", v),
            Self::Float(v) => write!(f, "{}f", v),
            Self::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
