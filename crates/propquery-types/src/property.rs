//! Property metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Semantic type declared by a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Boolean, stored as 0/1
    Boolean,
    /// 8-bit signed integer
    Integer8,
    /// 16-bit signed integer
    Integer16,
    /// 32-bit signed integer
    Integer32,
    /// 64-bit signed integer
    Integer64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// UTF-8 string
    String,
    /// Point in time, stored as epoch milliseconds
    DateTime,
}

impl PropertyType {
    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer8 => "Integer8",
            Self::Integer16 => "Integer16",
            Self::Integer32 => "Integer32",
            Self::Integer64 => "Integer64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::DateTime => "DateTime",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed field descriptor on which conditions are expressed
///
/// Properties are owned by the surrounding schema; this crate only reads
/// their semantic type. Clones share the name allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    id: u32,
    name: Arc<str>,
    property_type: PropertyType,
}

impl Property {
    /// Create a new property descriptor
    pub fn new(id: u32, name: impl Into<Arc<str>>, property_type: PropertyType) -> Self {
        Self {
            id,
            name: name.into(),
            property_type,
        }
    }

    /// Schema id of the property
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared semantic type
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.property_type)
    }
}
