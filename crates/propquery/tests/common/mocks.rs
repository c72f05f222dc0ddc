//! Mock query builder
//!
//! Renders each invoked builder operation as a SQL-like predicate.

use propquery::{Property, QueryBuilder};
use std::fmt::Display;

#[derive(Debug, Default)]
pub struct SqlBuilder {
    pub predicates: Vec<String>,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predicates joined with AND
    pub fn where_clause(&self) -> String {
        self.predicates.join(" AND ")
    }

    fn compare(&mut self, property: &Property, op: &str, value: impl Display) {
        self.predicates
            .push(format!("{} {} {}", property.name(), op, value));
    }

    fn list<T: Display>(&mut self, property: &Property, values: &[T]) {
        let items: Vec<String> = values.iter().map(ToString::to_string).collect();
        self.predicates
            .push(format!("{} IN ({})", property.name(), items.join(", ")));
    }
}

impl QueryBuilder for SqlBuilder {
    fn equal_long(&mut self, property: &Property, value: i64) {
        self.compare(property, "=", value);
    }

    fn equal_int(&mut self, property: &Property, value: i32) {
        self.compare(property, "=", value);
    }

    fn equal_string(&mut self, property: &Property, value: &str) {
        self.compare(property, "=", format!("'{value}'"));
    }

    fn not_equal_long(&mut self, property: &Property, value: i64) {
        self.compare(property, "<>", value);
    }

    fn not_equal_int(&mut self, property: &Property, value: i32) {
        self.compare(property, "<>", value);
    }

    fn not_equal_string(&mut self, property: &Property, value: &str) {
        self.compare(property, "<>", format!("'{value}'"));
    }

    fn greater_long(&mut self, property: &Property, value: i64) {
        self.compare(property, ">", value);
    }

    fn greater_int(&mut self, property: &Property, value: i32) {
        self.compare(property, ">", value);
    }

    fn greater_double(&mut self, property: &Property, value: f64) {
        self.compare(property, ">", value);
    }

    fn greater_float(&mut self, property: &Property, value: f32) {
        self.compare(property, ">", value);
    }

    fn less_long(&mut self, property: &Property, value: i64) {
        self.compare(property, "<", value);
    }

    fn less_int(&mut self, property: &Property, value: i32) {
        self.compare(property, "<", value);
    }

    fn less_double(&mut self, property: &Property, value: f64) {
        self.compare(property, "<", value);
    }

    fn less_float(&mut self, property: &Property, value: f32) {
        self.compare(property, "<", value);
    }

    fn between_long(&mut self, property: &Property, low: i64, high: i64) {
        self.compare(property, "BETWEEN", format!("{low} AND {high}"));
    }

    fn between_int(&mut self, property: &Property, low: i32, high: i32) {
        self.compare(property, "BETWEEN", format!("{low} AND {high}"));
    }

    fn in_long(&mut self, property: &Property, values: &[i64]) {
        self.list(property, values);
    }

    fn in_int(&mut self, property: &Property, values: &[i32]) {
        self.list(property, values);
    }

    fn is_null(&mut self, property: &Property) {
        self.compare(property, "IS", "NULL");
    }

    fn not_null(&mut self, property: &Property) {
        self.compare(property, "IS NOT", "NULL");
    }
}
