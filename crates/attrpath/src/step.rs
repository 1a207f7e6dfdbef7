//! Path and expression steps
//!
//! A [PathStep] is one hop into a concrete value. An [ExpressionStep] is the pattern
//! counterpart: it either names one exact hop, accepts any hop of a kind, or is a
//! [ExpressionStep::Parent] directive that is removed during resolution.
use crate::util::{Quoted, WriteStep};
use crate::value::Value;
use std::fmt::{self, Display, Formatter};

/// One hop into a concrete value
#[derive(Debug, Clone, PartialEq)]
pub enum PathStep {
    /// Named attribute of an object, block or schema
    AttributeName(String),
    /// Position in a list or tuple
    ElementKeyInt(i64),
    /// Key of a map
    ElementKeyString(String),
    /// Element of a set, identified by its value
    ElementKeyValue(Value),
}

impl PathStep {
    /// Expression step matching exactly this step
    pub fn to_expression_step(&self) -> ExpressionStep {
        self.clone().into()
    }
}

impl Display for PathStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::AttributeName(name) => f.write_str(name),
            PathStep::ElementKeyInt(index) => write!(f, "[{index}]"),
            PathStep::ElementKeyString(key) => write!(f, "[{}]", Quoted(key)),
            PathStep::ElementKeyValue(value) => write!(f, "[Value({value})]"),
        }
    }
}

impl WriteStep for PathStep {
    fn is_attribute_name(&self) -> bool {
        matches!(self, PathStep::AttributeName(_))
    }
}

/// One pattern hop of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionStep {
    AttributeNameExact(String),
    ElementKeyIntExact(i64),
    /// Any position of a list or tuple
    ElementKeyIntAny,
    ElementKeyStringExact(String),
    /// Any key of a map
    ElementKeyStringAny,
    ElementKeyValueExact(Value),
    /// Any element of a set
    ElementKeyValueAny,
    /// Removes the preceding step when the expression is resolved
    Parent,
}

impl ExpressionStep {
    /// Returns true if the concrete step is accepted by this step
    ///
    /// [ExpressionStep::Parent] never accepts anything, expressions have to be
    /// resolved before their steps are compared with a path.
    pub fn matches(&self, step: &PathStep) -> bool {
        use ExpressionStep::*;

        match (self, step) {
            (AttributeNameExact(expected), PathStep::AttributeName(name)) => expected == name,
            (ElementKeyIntExact(expected), PathStep::ElementKeyInt(index)) => expected == index,
            (ElementKeyIntAny, PathStep::ElementKeyInt(_)) => true,
            (ElementKeyStringExact(expected), PathStep::ElementKeyString(key)) => expected == key,
            (ElementKeyStringAny, PathStep::ElementKeyString(_)) => true,
            (ElementKeyValueExact(expected), PathStep::ElementKeyValue(value)) => expected == value,
            (ElementKeyValueAny, PathStep::ElementKeyValue(_)) => true,
            (Parent, _) => false,
            (
                AttributeNameExact(_)
                | ElementKeyIntExact(_)
                | ElementKeyIntAny
                | ElementKeyStringExact(_)
                | ElementKeyStringAny
                | ElementKeyValueExact(_)
                | ElementKeyValueAny,
                _,
            ) => false,
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, ExpressionStep::Parent)
    }

    /// Returns true for steps that accept more than one concrete step
    pub fn is_wildcard(&self) -> bool {
        matches!(
            self,
            ExpressionStep::ElementKeyIntAny
                | ExpressionStep::ElementKeyStringAny
                | ExpressionStep::ElementKeyValueAny
        )
    }
}

impl From<PathStep> for ExpressionStep {
    fn from(value: PathStep) -> Self {
        match value {
            PathStep::AttributeName(name) => ExpressionStep::AttributeNameExact(name),
            PathStep::ElementKeyInt(index) => ExpressionStep::ElementKeyIntExact(index),
            PathStep::ElementKeyString(key) => ExpressionStep::ElementKeyStringExact(key),
            PathStep::ElementKeyValue(value) => ExpressionStep::ElementKeyValueExact(value),
        }
    }
}

impl Display for ExpressionStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionStep::AttributeNameExact(name) => f.write_str(name),
            ExpressionStep::ElementKeyIntExact(index) => write!(f, "[{index}]"),
            ExpressionStep::ElementKeyIntAny => f.write_str("[*]"),
            ExpressionStep::ElementKeyStringExact(key) => write!(f, "[{}]", Quoted(key)),
            ExpressionStep::ElementKeyStringAny => f.write_str(r#"["*"]"#),
            ExpressionStep::ElementKeyValueExact(value) => write!(f, "[Value({value})]"),
            ExpressionStep::ElementKeyValueAny => f.write_str("[Value(*)]"),
            ExpressionStep::Parent => f.write_str("<"),
        }
    }
}

impl WriteStep for ExpressionStep {
    fn is_attribute_name(&self) -> bool {
        matches!(self, ExpressionStep::AttributeNameExact(_))
    }
}
