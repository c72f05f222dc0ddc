//! Mock query builder
//!
//! Records every builder invocation so tests can assert on the exact
//! sequence of calls a dispatch produced.

use propquery_condition::QueryBuilder;
use propquery_types::Property;

/// A single recorded builder invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EqualLong(String, i64),
    EqualInt(String, i32),
    EqualString(String, String),
    NotEqualLong(String, i64),
    NotEqualInt(String, i32),
    NotEqualString(String, String),
    GreaterLong(String, i64),
    GreaterInt(String, i32),
    GreaterDouble(String, f64),
    GreaterFloat(String, f32),
    LessLong(String, i64),
    LessInt(String, i32),
    LessDouble(String, f64),
    LessFloat(String, f32),
    BetweenLong(String, i64, i64),
    BetweenInt(String, i32, i32),
    InLong(String, Vec<i64>),
    InInt(String, Vec<i32>),
    IsNull(String),
    NotNull(String),
}

/// Query builder that records calls instead of building a query
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<Call>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The only recorded call; panics unless exactly one was made
    pub fn single(&self) -> &Call {
        assert_eq!(
            self.calls.len(),
            1,
            "expected exactly one call: {:?}",
            self.calls
        );
        &self.calls[0]
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call);
    }
}

fn name(property: &Property) -> String {
    property.name().to_string()
}

impl QueryBuilder for RecordingBuilder {
    fn equal_long(&mut self, property: &Property, value: i64) {
        self.record(Call::EqualLong(name(property), value));
    }

    fn equal_int(&mut self, property: &Property, value: i32) {
        self.record(Call::EqualInt(name(property), value));
    }

    fn equal_string(&mut self, property: &Property, value: &str) {
        self.record(Call::EqualString(name(property), value.to_string()));
    }

    fn not_equal_long(&mut self, property: &Property, value: i64) {
        self.record(Call::NotEqualLong(name(property), value));
    }

    fn not_equal_int(&mut self, property: &Property, value: i32) {
        self.record(Call::NotEqualInt(name(property), value));
    }

    fn not_equal_string(&mut self, property: &Property, value: &str) {
        self.record(Call::NotEqualString(name(property), value.to_string()));
    }

    fn greater_long(&mut self, property: &Property, value: i64) {
        self.record(Call::GreaterLong(name(property), value));
    }

    fn greater_int(&mut self, property: &Property, value: i32) {
        self.record(Call::GreaterInt(name(property), value));
    }

    fn greater_double(&mut self, property: &Property, value: f64) {
        self.record(Call::GreaterDouble(name(property), value));
    }

    fn greater_float(&mut self, property: &Property, value: f32) {
        self.record(Call::GreaterFloat(name(property), value));
    }

    fn less_long(&mut self, property: &Property, value: i64) {
        self.record(Call::LessLong(name(property), value));
    }

    fn less_int(&mut self, property: &Property, value: i32) {
        self.record(Call::LessInt(name(property), value));
    }

    fn less_double(&mut self, property: &Property, value: f64) {
        self.record(Call::LessDouble(name(property), value));
    }

    fn less_float(&mut self, property: &Property, value: f32) {
        self.record(Call::LessFloat(name(property), value));
    }

    fn between_long(&mut self, property: &Property, low: i64, high: i64) {
        self.record(Call::BetweenLong(name(property), low, high));
    }

    fn between_int(&mut self, property: &Property, low: i32, high: i32) {
        self.record(Call::BetweenInt(name(property), low, high));
    }

    fn in_long(&mut self, property: &Property, values: &[i64]) {
        self.record(Call::InLong(name(property), values.to_vec()));
    }

    fn in_int(&mut self, property: &Property, values: &[i32]) {
        self.record(Call::InInt(name(property), values.to_vec()));
    }

    fn is_null(&mut self, property: &Property) {
        self.record(Call::IsNull(name(property)));
    }

    fn not_null(&mut self, property: &Property) {
        self.record(Call::NotNull(name(property)));
    }
}
