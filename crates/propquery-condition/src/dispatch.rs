//! Condition dispatch
//!
//! Selects the builder operation for a condition with an exhaustive match
//! over operator and operand kind:
//!
//! | Operator               | Operands | Kinds                      |
//! |------------------------|----------|----------------------------|
//! | Equals / NotEquals     | 1        | long, int, string          |
//! | GreaterThan / LessThan | 1        | long, int, double, float   |
//! | Between                | 2        | long, int                  |
//! | In                     | 1..      | long, int                  |
//! | IsNull / IsNotNull     | 0        | -                          |
//!
//! Pairs outside the table invoke nothing.

use crate::builder::{BuilderOp, QueryBuilder};
use crate::condition::{Condition, Payload};
use crate::config::{DispatchConfig, Unmatched};
use crate::operator::Operator;
use log::{debug, trace, warn};
use propquery_diagnostics::{ConditionError, ConditionResult};
use propquery_types::{Operand, OperandKind};

/// Outcome of applying one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The named builder operation was invoked
    Invoked(BuilderOp),
    /// No builder operation matched; nothing was invoked
    Skipped,
}

impl Dispatch {
    /// The invoked operation, if any
    pub fn op(&self) -> Option<BuilderOp> {
        match self {
            Self::Invoked(op) => Some(*op),
            Self::Skipped => None,
        }
    }
}

/// Applies conditions to query builders according to a `DispatchConfig`
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher with the given configuration
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// Apply one condition, invoking at most one builder operation
    pub fn apply<B: QueryBuilder + ?Sized>(
        &self,
        condition: &Condition,
        builder: &mut B,
    ) -> ConditionResult<Dispatch> {
        match dispatch(condition, builder) {
            Some(op) => Ok(Dispatch::Invoked(op)),
            None => match self.config.on_unmatched {
                Unmatched::Ignore => Ok(Dispatch::Skipped),
                Unmatched::Reject => {
                    let kind = condition.operand_kind().map_or("no", |kind| kind.name());
                    let err = ConditionError::unsupported_kind(
                        condition.property().name(),
                        condition.operator(),
                        kind,
                    );
                    let code = err.code();
                    warn!("{code} {}: {condition}", code.info().description);
                    Err(err)
                }
            },
        }
    }

    /// Apply conditions in order, stopping at the first error
    pub fn apply_all<'a, B, I>(
        &self,
        conditions: I,
        builder: &mut B,
    ) -> ConditionResult<Vec<Dispatch>>
    where
        B: QueryBuilder + ?Sized,
        I: IntoIterator<Item = &'a Condition>,
    {
        conditions
            .into_iter()
            .map(|condition| self.apply(condition, builder))
            .collect()
    }
}

/// Invoke the builder operation matching `condition`, if one exists
pub(crate) fn dispatch<B: QueryBuilder + ?Sized>(
    condition: &Condition,
    builder: &mut B,
) -> Option<BuilderOp> {
    let property = condition.property();

    let op = match (condition.operator(), condition.payload()) {
        (Operator::Equals, Payload::Single(operand)) => match operand {
            Operand::Long(v) => {
                builder.equal_long(property, *v);
                Some(BuilderOp::EqualLong)
            }
            Operand::Int(v) => {
                builder.equal_int(property, *v);
                Some(BuilderOp::EqualInt)
            }
            Operand::String(v) => {
                builder.equal_string(property, v);
                Some(BuilderOp::EqualString)
            }
            Operand::Double(_) | Operand::Float(_) => None,
        },
        (Operator::NotEquals, Payload::Single(operand)) => match operand {
            Operand::Long(v) => {
                builder.not_equal_long(property, *v);
                Some(BuilderOp::NotEqualLong)
            }
            Operand::Int(v) => {
                builder.not_equal_int(property, *v);
                Some(BuilderOp::NotEqualInt)
            }
            Operand::String(v) => {
                builder.not_equal_string(property, v);
                Some(BuilderOp::NotEqualString)
            }
            Operand::Double(_) | Operand::Float(_) => None,
        },
        (Operator::GreaterThan, Payload::Single(operand)) => match operand {
            Operand::Long(v) => {
                builder.greater_long(property, *v);
                Some(BuilderOp::GreaterLong)
            }
            Operand::Int(v) => {
                builder.greater_int(property, *v);
                Some(BuilderOp::GreaterInt)
            }
            Operand::Double(v) => {
                builder.greater_double(property, *v);
                Some(BuilderOp::GreaterDouble)
            }
            Operand::Float(v) => {
                builder.greater_float(property, *v);
                Some(BuilderOp::GreaterFloat)
            }
            Operand::String(_) => None,
        },
        (Operator::LessThan, Payload::Single(operand)) => match operand {
            Operand::Long(v) => {
                builder.less_long(property, *v);
                Some(BuilderOp::LessLong)
            }
            Operand::Int(v) => {
                builder.less_int(property, *v);
                Some(BuilderOp::LessInt)
            }
            Operand::Double(v) => {
                builder.less_double(property, *v);
                Some(BuilderOp::LessDouble)
            }
            Operand::Float(v) => {
                builder.less_float(property, *v);
                Some(BuilderOp::LessFloat)
            }
            Operand::String(_) => None,
        },
        (Operator::Between, Payload::Many(operands)) => match operands.as_slice() {
            [Operand::Long(low), Operand::Long(high)] => {
                builder.between_long(property, *low, *high);
                Some(BuilderOp::BetweenLong)
            }
            [Operand::Int(low), Operand::Int(high)] => {
                builder.between_int(property, *low, *high);
                Some(BuilderOp::BetweenInt)
            }
            _ => None,
        },
        (Operator::In, Payload::Many(operands)) => match condition.operand_kind() {
            Some(OperandKind::Long) => operands
                .iter()
                .map(Operand::as_long)
                .collect::<Option<Vec<i64>>>()
                .map(|values| {
                    builder.in_long(property, &values);
                    BuilderOp::InLong
                }),
            Some(OperandKind::Int) => operands
                .iter()
                .map(Operand::as_int)
                .collect::<Option<Vec<i32>>>()
                .map(|values| {
                    builder.in_int(property, &values);
                    BuilderOp::InInt
                }),
            _ => None,
        },
        (Operator::IsNull, _) => {
            builder.is_null(property);
            Some(BuilderOp::IsNull)
        }
        (Operator::IsNotNull, _) => {
            builder.not_null(property);
            Some(BuilderOp::NotNull)
        }
        // payload shapes are fixed at construction
        (
            Operator::Equals
            | Operator::NotEquals
            | Operator::GreaterThan
            | Operator::LessThan
            | Operator::Between
            | Operator::In,
            _,
        ) => None,
    };

    match op {
        Some(op) => trace!("{condition} -> {op}"),
        None => debug!("No builder operation for {condition}, skipping"),
    }
    op
}
