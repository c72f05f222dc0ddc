//! Query builder collaborator
//!
//! The builder is the lower-level query construction API. It exposes one
//! method per operator and operand kind and expects operands that have
//! already been normalized.

use propquery_types::Property;
use std::fmt;

/// Query construction API driven by condition dispatch
pub trait QueryBuilder {
    fn equal_long(&mut self, property: &Property, value: i64);
    fn equal_int(&mut self, property: &Property, value: i32);
    fn equal_string(&mut self, property: &Property, value: &str);

    fn not_equal_long(&mut self, property: &Property, value: i64);
    fn not_equal_int(&mut self, property: &Property, value: i32);
    fn not_equal_string(&mut self, property: &Property, value: &str);

    fn greater_long(&mut self, property: &Property, value: i64);
    fn greater_int(&mut self, property: &Property, value: i32);
    fn greater_double(&mut self, property: &Property, value: f64);
    fn greater_float(&mut self, property: &Property, value: f32);

    fn less_long(&mut self, property: &Property, value: i64);
    fn less_int(&mut self, property: &Property, value: i32);
    fn less_double(&mut self, property: &Property, value: f64);
    fn less_float(&mut self, property: &Property, value: f32);

    /// Inclusive range on a long property
    fn between_long(&mut self, property: &Property, low: i64, high: i64);
    /// Inclusive range on an int property
    fn between_int(&mut self, property: &Property, low: i32, high: i32);

    fn in_long(&mut self, property: &Property, values: &[i64]);
    fn in_int(&mut self, property: &Property, values: &[i32]);

    fn is_null(&mut self, property: &Property);
    fn not_null(&mut self, property: &Property);
}

/// Names a single `QueryBuilder` operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderOp {
    EqualLong,
    EqualInt,
    EqualString,
    NotEqualLong,
    NotEqualInt,
    NotEqualString,
    GreaterLong,
    GreaterInt,
    GreaterDouble,
    GreaterFloat,
    LessLong,
    LessInt,
    LessDouble,
    LessFloat,
    BetweenLong,
    BetweenInt,
    InLong,
    InInt,
    IsNull,
    NotNull,
}

impl BuilderOp {
    /// Name of the builder method
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EqualLong => "equal_long",
            Self::EqualInt => "equal_int",
            Self::EqualString => "equal_string",
            Self::NotEqualLong => "not_equal_long",
            Self::NotEqualInt => "not_equal_int",
            Self::NotEqualString => "not_equal_string",
            Self::GreaterLong => "greater_long",
            Self::GreaterInt => "greater_int",
            Self::GreaterDouble => "greater_double",
            Self::GreaterFloat => "greater_float",
            Self::LessLong => "less_long",
            Self::LessInt => "less_int",
            Self::LessDouble => "less_double",
            Self::LessFloat => "less_float",
            Self::BetweenLong => "between_long",
            Self::BetweenInt => "between_int",
            Self::InLong => "in_long",
            Self::InInt => "in_int",
            Self::IsNull => "is_null",
            Self::NotNull => "not_null",
        }
    }
}

impl fmt::Display for BuilderOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
