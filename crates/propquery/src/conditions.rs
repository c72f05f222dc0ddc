//! Condition shorthands on properties

use propquery_condition::{Condition, Operator};
use propquery_diagnostics::ConditionResult;
use propquery_types::{Property, RawValue};

/// Builds conditions directly from a property
///
/// Each method clones the property (a shared name, no deep copy) and goes
/// through the same coercion as the `Condition` constructors.
pub trait PropertyConditions {
    /// `property == value`
    fn equals(&self, value: impl Into<RawValue>) -> ConditionResult<Condition>;

    /// `property != value`
    fn not_equals(&self, value: impl Into<RawValue>) -> ConditionResult<Condition>;

    /// `property > value`
    fn greater_than(&self, value: impl Into<RawValue>) -> ConditionResult<Condition>;

    /// `property < value`
    fn less_than(&self, value: impl Into<RawValue>) -> ConditionResult<Condition>;

    /// `low <= property <= high`; bounds are kept in the given order
    fn between<T: Into<RawValue>>(&self, low: T, high: T) -> ConditionResult<Condition>;

    /// `property in values`
    fn one_of<I>(&self, values: I) -> ConditionResult<Condition>
    where
        I: IntoIterator,
        I::Item: Into<RawValue>;

    /// `property is null`
    fn is_null(&self) -> ConditionResult<Condition>;

    /// `property is not null`
    fn is_not_null(&self) -> ConditionResult<Condition>;
}

impl PropertyConditions for Property {
    fn equals(&self, value: impl Into<RawValue>) -> ConditionResult<Condition> {
        Condition::new(self.clone(), Operator::Equals, value)
    }

    fn not_equals(&self, value: impl Into<RawValue>) -> ConditionResult<Condition> {
        Condition::new(self.clone(), Operator::NotEquals, value)
    }

    fn greater_than(&self, value: impl Into<RawValue>) -> ConditionResult<Condition> {
        Condition::new(self.clone(), Operator::GreaterThan, value)
    }

    fn less_than(&self, value: impl Into<RawValue>) -> ConditionResult<Condition> {
        Condition::new(self.clone(), Operator::LessThan, value)
    }

    fn between<T: Into<RawValue>>(&self, low: T, high: T) -> ConditionResult<Condition> {
        Condition::with_values(self.clone(), Operator::Between, [low, high])
    }

    fn one_of<I>(&self, values: I) -> ConditionResult<Condition>
    where
        I: IntoIterator,
        I::Item: Into<RawValue>,
    {
        Condition::with_values(self.clone(), Operator::In, values)
    }

    fn is_null(&self) -> ConditionResult<Condition> {
        Condition::without_operand(self.clone(), Operator::IsNull)
    }

    fn is_not_null(&self) -> ConditionResult<Condition> {
        Condition::without_operand(self.clone(), Operator::IsNotNull)
    }
}
