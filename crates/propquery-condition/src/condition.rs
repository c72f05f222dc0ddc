//! Property conditions
//!
//! A `Condition` can only be obtained through coercion, so every instance
//! satisfies the operator's arity and holds normalized operands:
//! - IsNull / IsNotNull: no operand
//! - Equals, NotEquals, GreaterThan, LessThan: exactly one operand
//! - Between: exactly two operands of the same kind
//! - In: one or more operands of the same kind

use crate::builder::QueryBuilder;
use crate::coercion::OperandCoercer;
use crate::dispatch;
use crate::operator::{OperandArity, Operator};
use propquery_diagnostics::{ConditionError, ConditionResult};
use propquery_types::{Operand, OperandKind, Property, RawValue};
use smallvec::{SmallVec, smallvec};
use std::fmt;

/// Operand sequence; range bounds fit inline
pub type Operands = SmallVec<[Operand; 2]>;

/// Operand payload of a condition
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No operand (null checks)
    None,
    /// A single operand
    Single(Operand),
    /// An ordered, uniformly typed operand sequence (Between, In)
    Many(Operands),
}

impl Payload {
    /// Operands as a slice, in order
    pub fn operands(&self) -> &[Operand] {
        match self {
            Self::None => &[],
            Self::Single(operand) => std::slice::from_ref(operand),
            Self::Many(operands) => operands,
        }
    }

    /// Number of operands
    pub fn len(&self) -> usize {
        self.operands().len()
    }

    /// Check if there are no operands
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A validated, immutable filter on one property
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    property: Property,
    operator: Operator,
    payload: Payload,
}

impl Condition {
    /// Build a condition from a single raw value
    ///
    /// `In` accepts a single value as a one-element set; `Between` and the
    /// null checks reject it with an operand count error.
    pub fn new(
        property: Property,
        operator: Operator,
        value: impl Into<RawValue>,
    ) -> ConditionResult<Self> {
        let operand = OperandCoercer::new().coerce(&property, &value.into())?;
        Self::build(property, operator, smallvec![operand])
    }

    /// Build a condition from a sequence of raw values
    pub fn with_values<I>(
        property: Property,
        operator: Operator,
        values: I,
    ) -> ConditionResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<RawValue>,
    {
        let raws: Vec<RawValue> = values.into_iter().map(Into::into).collect();
        let coercer = OperandCoercer::new();
        let operands = coercer.coerce_all(&property, operator, Some(raws.as_slice()))?;
        Self::build(property, operator, operands)
    }

    /// Build a condition that takes no operand
    ///
    /// Fails with `MissingOperands` unless `operator` is a null check.
    pub fn without_operand(property: Property, operator: Operator) -> ConditionResult<Self> {
        let operands = OperandCoercer::new().coerce_all(&property, operator, None)?;
        Self::build(property, operator, operands)
    }

    fn build(property: Property, operator: Operator, operands: Operands) -> ConditionResult<Self> {
        let arity = operator.arity();
        if !arity.accepts(operands.len()) {
            return Err(ConditionError::invalid_count(
                property.name(),
                operator,
                arity.describe(),
                operands.len(),
            ));
        }

        if operator.requires_uniform_operands()
            && let Some(first) = operands.first()
        {
            let kind = first.kind();
            if let Some(other) = operands.iter().find(|operand| operand.kind() != kind) {
                return Err(ConditionError::invalid_type(
                    property.name(),
                    format!("{kind} operand matching the first"),
                    other,
                ));
            }
        }

        let payload = match arity {
            OperandArity::None => Payload::None,
            OperandArity::One => operands
                .into_iter()
                .next()
                .map_or(Payload::None, Payload::Single),
            OperandArity::Two | OperandArity::AtLeastOne => Payload::Many(operands),
        };

        Ok(Self {
            property,
            operator,
            payload,
        })
    }

    /// The property this condition filters on
    pub fn property(&self) -> &Property {
        &self.property
    }

    /// The comparison operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The operand payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Operands in order
    pub fn operands(&self) -> &[Operand] {
        self.payload.operands()
    }

    /// Kind shared by all operands, if there are any
    pub fn operand_kind(&self) -> Option<OperandKind> {
        self.operands().first().map(Operand::kind)
    }

    /// Apply this condition to a query builder
    ///
    /// Invokes at most one builder operation. Operator/kind pairs without a
    /// builder operation are skipped without error; use a strict
    /// [`Dispatcher`](crate::Dispatcher) to surface them.
    pub fn apply_to<B: QueryBuilder + ?Sized>(&self, builder: &mut B) {
        dispatch::dispatch(self, builder);
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property.name(), self.operator.symbol())?;
        match &self.payload {
            Payload::None => Ok(()),
            Payload::Single(operand) => write!(f, " {}", operand),
            Payload::Many(operands) => {
                let sep = if self.operator == Operator::Between {
                    " and "
                } else {
                    ", "
                };
                write!(f, " ")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    write!(f, "{}", operand)?;
                }
                Ok(())
            }
        }
    }
}
