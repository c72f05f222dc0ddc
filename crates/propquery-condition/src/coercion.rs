//! Operand coercion rules
//!
//! Raw operands are checked against the property's declared semantic type
//! and normalized into canonical operands:
//! - DateTime properties take dates (as epoch milliseconds) or integers,
//!   which pass through unchanged
//! - Boolean properties take booleans, 0/1 numbers or "TRUE"/"FALSE",
//!   all normalized to an int 0/1
//! - Every other property type takes the scalar unchanged; numeric kind
//!   mismatches are left to dispatch

use crate::condition::Operands;
use crate::operator::Operator;
use propquery_diagnostics::{ConditionError, ConditionResult};
use propquery_types::{Operand, Property, PropertyType, RawValue};

/// Validates and normalizes raw operands for a property
///
/// Stateless and pure; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperandCoercer;

impl OperandCoercer {
    /// Create a new operand coercer
    pub fn new() -> Self {
        Self
    }

    /// Coerce a single raw operand
    ///
    /// Rules, in order:
    /// 1. Arrays are rejected; a scalar is required here
    /// 2. DateTime properties accept dates and integers
    /// 3. Boolean properties accept booleans, 0/1 and "TRUE"/"FALSE"
    /// 4. Anything else passes through into the matching operand kind
    pub fn coerce(&self, property: &Property, raw: &RawValue) -> ConditionResult<Operand> {
        if raw.is_array() {
            return Err(ConditionError::invalid_shape(property.name(), raw));
        }

        match property.property_type() {
            PropertyType::DateTime => Self::coerce_date(property, raw),
            PropertyType::Boolean => Self::coerce_boolean(property, raw),
            _ => Self::pass_through(property, raw),
        }
    }

    /// Coerce a sequence of raw operands for `operator`
    ///
    /// An absent or empty sequence is only valid for null checks. Otherwise
    /// each element is coerced in order and the first failure is returned.
    pub fn coerce_all(
        &self,
        property: &Property,
        operator: Operator,
        raw_values: Option<&[RawValue]>,
    ) -> ConditionResult<Operands> {
        let values = match raw_values {
            Some(values) if !values.is_empty() => values,
            _ if operator.is_null_check() => return Ok(Operands::new()),
            _ => return Err(ConditionError::missing_operands(property.name(), operator)),
        };

        values
            .iter()
            .map(|raw| self.coerce(property, raw))
            .collect()
    }

    fn coerce_date(property: &Property, raw: &RawValue) -> ConditionResult<Operand> {
        match raw {
            RawValue::Date(date) => Ok(Operand::Long(date.timestamp_millis())),
            RawValue::Long(millis) => Ok(Operand::Long(*millis)),
            RawValue::Int(millis) => Ok(Operand::Int(*millis)),
            _ => Err(ConditionError::invalid_type(
                property.name(),
                "date or integer",
                raw,
            )),
        }
    }

    fn coerce_boolean(property: &Property, raw: &RawValue) -> ConditionResult<Operand> {
        match raw {
            RawValue::Bool(flag) => Ok(Operand::Int(i32::from(*flag))),
            RawValue::String(s) if s.eq_ignore_ascii_case("TRUE") => Ok(Operand::Int(1)),
            RawValue::String(s) if s.eq_ignore_ascii_case("FALSE") => Ok(Operand::Int(0)),
            RawValue::String(_) => Err(ConditionError::invalid_value(
                property.name(),
                raw,
                "strings must be \"TRUE\" or \"FALSE\" (case insensitive)",
            )),
            _ if raw.is_numeric() => match raw.as_f64() {
                Some(0.0) => Ok(Operand::Int(0)),
                Some(1.0) => Ok(Operand::Int(1)),
                _ => Err(ConditionError::invalid_value(
                    property.name(),
                    raw,
                    "numbers must be 0 or 1",
                )),
            },
            _ => Err(ConditionError::invalid_type(
                property.name(),
                "boolean, 0/1 or \"TRUE\"/\"FALSE\"",
                raw,
            )),
        }
    }

    fn pass_through(property: &Property, raw: &RawValue) -> ConditionResult<Operand> {
        match raw {
            RawValue::Int(i) => Ok(Operand::Int(*i)),
            RawValue::Long(l) => Ok(Operand::Long(*l)),
            RawValue::Float(v) => Ok(Operand::Float(*v)),
            RawValue::Double(v) => Ok(Operand::Double(*v)),
            RawValue::String(s) => Ok(Operand::String(s.clone())),
            RawValue::Bool(_) | RawValue::Date(_) | RawValue::Array(_) => {
                Err(ConditionError::invalid_type(
                    property.name(),
                    format!("{} value", property.property_type()),
                    raw,
                ))
            }
        }
    }
}
