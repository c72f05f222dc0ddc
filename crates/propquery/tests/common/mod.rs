//! Common test utilities for the facade
//!
//! Provides a query builder that renders SQL-like predicates and a small
//! schema of properties.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::SqlBuilder;

use propquery::{Property, PropertyType};

pub struct Schema {
    pub id: Property,
    pub age: Property,
    pub name: Property,
    pub score: Property,
    pub ratio: Property,
    pub active: Property,
    pub created: Property,
}

pub fn schema() -> Schema {
    Schema {
        id: Property::new(1, "id", PropertyType::Integer64),
        age: Property::new(2, "age", PropertyType::Integer32),
        name: Property::new(3, "name", PropertyType::String),
        score: Property::new(4, "score", PropertyType::Float64),
        ratio: Property::new(5, "ratio", PropertyType::Float32),
        active: Property::new(6, "active", PropertyType::Boolean),
        created: Property::new(7, "created", PropertyType::DateTime),
    }
}
