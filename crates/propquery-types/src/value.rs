//! Raw operand values
//!
//! `RawValue` is what callers hand to a condition before coercion. It may
//! hold kinds that never survive coercion (booleans, dates, arrays); the
//! coercer either normalizes them or rejects them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Operand value as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum RawValue {
    /// Boolean value
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// String value
    String(String),
    /// Point in time
    Date(DateTime<Utc>),
    /// Sequence of values; only valid as the payload of multi-operand operators
    Array(Vec<RawValue>),
}

impl RawValue {
    /// Short name of the value kind, used in error messages
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
        }
    }

    /// Check if this value is a sequence
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this value is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int(_) | Self::Long(_) | Self::Float(_) | Self::Double(_)
        )
    }

    /// Numeric value widened to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(f64::from(*i)),
            Self::Long(l) => Some(*l as f64),
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Long(l) => write!(f, "{}L", l),
            Self::Float(v) => write!(f, "{}f", v),
            Self::Double(v) => write!(f, "{}d", v),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Date(d) => write!(f, "@{}", d.to_rfc3339()),
            Self::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<SystemTime> for RawValue {
    fn from(value: SystemTime) -> Self {
        Self::Date(DateTime::<Utc>::from(value))
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}
