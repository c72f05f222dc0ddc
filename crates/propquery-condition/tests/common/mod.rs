//! Common test utilities for condition testing
//!
//! This module provides shared testing infrastructure including:
//! - Property fixtures for each semantic type
//! - A recording query builder

#![allow(dead_code)]

pub mod mocks;

pub use mocks::{Call, RecordingBuilder};

use propquery_types::{Property, PropertyType};

pub fn long_prop() -> Property {
    Property::new(1, "id", PropertyType::Integer64)
}

pub fn int_prop() -> Property {
    Property::new(2, "age", PropertyType::Integer32)
}

pub fn string_prop() -> Property {
    Property::new(3, "name", PropertyType::String)
}

pub fn double_prop() -> Property {
    Property::new(4, "score", PropertyType::Float64)
}

pub fn bool_prop() -> Property {
    Property::new(5, "active", PropertyType::Boolean)
}

pub fn date_prop() -> Property {
    Property::new(6, "created", PropertyType::DateTime)
}
