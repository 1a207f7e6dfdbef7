//! patterns over value locations
//!
//! An [Expression] describes a set of [Path]s. Exact steps match one specific hop,
//! wildcard steps match every hop of their kind and [ExpressionStep::Parent] steps
//! step back up one level.
//!
//! ### Rooted and relative expressions
//!
//! Expressions built with [Expression::match_root] start at the root of the value.
//! Expressions built with [Expression::match_relative] are declared relative to some
//! location that is only known later (e.g. the attribute a validator is attached to)
//! and are anchored with [Expression::merge].
//!
//! ### Resolution
//!
//! Parent steps are kept as written until an expression is resolved. Resolution walks
//! the steps left to right and lets every parent step remove the step before it:
//!
//! | **expression**       | **resolved**   |
//! |----------------------|----------------|
//! | `a.b<.c`             | `a.c`          |
//! | `a[1].child<.other`  | `a[1].other`   |
//! | `a<`                 | (root)         |
//! | `<.a`                | (impossible)   |
//!
//! An expression that steps above the root is impossible and matches nothing. It is
//! distinct from an expression that resolves to the root, which matches the empty path.
use crate::expressions::Expressions;
use crate::path::Path;
use crate::step::{ExpressionStep, PathStep};
use crate::value::Value;
use std::fmt::{self, Display, Formatter};

/// Pattern over [Path]s
///
/// Equality compares steps as written, parent steps included. Compare
/// [Expression::resolve] results to check if two expressions denote the same locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    /// Expression starts at the root and can not be anchored elsewhere
    root: bool,
    steps: Vec<ExpressionStep>,
}

impl Expression {
    /// Expression starting at a root level attribute
    pub fn match_root(name: impl Into<String>) -> Self {
        Self {
            root: true,
            steps: vec![ExpressionStep::AttributeNameExact(name.into())],
        }
    }

    /// Empty expression that is anchored later via [Expression::merge]
    pub fn match_relative() -> Self {
        Self::default()
    }

    pub fn from_steps(root: bool, steps: impl IntoIterator<Item = ExpressionStep>) -> Self {
        Self {
            root,
            steps: steps.into_iter().collect(),
        }
    }

    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.at_step(ExpressionStep::AttributeNameExact(name.into()))
    }

    pub fn at_list_index(&self, index: i64) -> Self {
        self.at_step(ExpressionStep::ElementKeyIntExact(index))
    }

    pub fn at_any_list_index(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyIntAny)
    }

    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.at_step(ExpressionStep::ElementKeyStringExact(key.into()))
    }

    pub fn at_any_map_key(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyStringAny)
    }

    pub fn at_set_value(&self, value: Value) -> Self {
        self.at_step(ExpressionStep::ElementKeyValueExact(value))
    }

    pub fn at_any_set_value(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyValueAny)
    }

    pub fn at_parent(&self) -> Self {
        self.at_step(ExpressionStep::Parent)
    }

    /// New expression with `step` appended
    pub fn at_step(&self, step: ExpressionStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);

        Self {
            root: self.root,
            steps,
        }
    }

    pub fn steps(&self) -> &[ExpressionStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First step and the expression below it
    pub fn next_step(&self) -> Option<(&ExpressionStep, Expression)> {
        self.steps
            .split_first()
            .map(|(first, rest)| (first, Self::from_steps(self.root, rest.iter().cloned())))
    }

    /// Last step and the expression leading to it
    pub fn last_step(&self) -> Option<(&ExpressionStep, Expression)> {
        self.steps
            .split_last()
            .map(|(last, rest)| (last, Self::from_steps(self.root, rest.iter().cloned())))
    }

    /// Expression without parent steps
    ///
    /// Returns [None] when a parent step has nothing left to remove. Resolving an
    /// expression without parent steps returns an equal expression.
    pub fn resolve(&self) -> Option<Expression> {
        let steps = resolve_steps(&self.steps);
        if steps.is_none() {
            tracing::trace!(expression = %self, "expression resolves above the root");
        }

        steps.map(|steps| Self {
            root: self.root,
            steps,
        })
    }

    /// Returns true if `path` is one of the locations described by this expression
    pub fn matches(&self, path: &Path) -> bool {
        let Some(resolved) = resolve_steps(&self.steps) else {
            tracing::trace!(%path, expression = %self, "path not considered a match, expression is impossible");
            return false;
        };

        if resolved.len() != path.len() {
            tracing::trace!(%path, expression = %self, "path not considered a match, different number of steps");
            return false;
        }

        steps_match(&resolved, path.steps())
    }

    /// Returns true if `path` is the direct parent of a location described by this
    /// expression
    ///
    /// Only one level is considered, grandparents do not match. Use this during a top
    /// down walk to decide whether to descend into the children of `path`.
    pub fn matches_parent(&self, path: &Path) -> bool {
        let Some(resolved) = resolve_steps(&self.steps) else {
            tracing::trace!(%path, expression = %self, "path not considered a parent, expression is impossible");
            return false;
        };

        let Some((_, parent)) = resolved.split_last() else {
            return false;
        };

        if parent.len() != path.len() {
            tracing::trace!(%path, expression = %self, "path not considered a parent, different number of steps");
            return false;
        }

        steps_match(parent, path.steps())
    }

    /// Anchor `other` at this expression
    ///
    /// A rooted `other` is returned unchanged. Otherwise the result contains the steps
    /// of this expression followed by the steps of `other`. Parent steps are not
    /// resolved, so `other` can be anchored at any number of expressions.
    #[tracing::instrument(level = "trace", skip_all, fields(base = %self, other = %other))]
    pub fn merge(&self, other: &Expression) -> Expression {
        if other.root {
            return other.clone();
        }

        let mut steps = Vec::with_capacity(self.steps.len() + other.steps.len());
        steps.extend_from_slice(&self.steps);
        steps.extend_from_slice(&other.steps);

        Self {
            root: self.root,
            steps,
        }
    }

    /// [Expression::merge] every expression of `others`, keeping their order
    ///
    /// Without any `others` the result holds this expression alone, so the anchor
    /// itself is still checked.
    pub fn merge_expressions(&self, others: &Expressions) -> Expressions {
        if others.is_empty() {
            return [self.clone()].into_iter().collect();
        }

        others.iter().map(|other| self.merge(other)).collect()
    }
}

/// Cancel every parent step against the step before it
fn resolve_steps(steps: &[ExpressionStep]) -> Option<Vec<ExpressionStep>> {
    let mut resolved = Vec::with_capacity(steps.len());

    for step in steps {
        if step.is_parent() {
            resolved.pop()?;
        } else {
            resolved.push(step.clone());
        }
    }

    Some(resolved)
}

/// Compare resolved steps with path steps of the same length
fn steps_match(expression: &[ExpressionStep], path: &[PathStep]) -> bool {
    expression
        .iter()
        .zip(path)
        .enumerate()
        .all(|(position, (expression_step, path_step))| {
            let matches = expression_step.matches(path_step);
            if !matches {
                tracing::trace!(position, %expression_step, %path_step, "step does not match");
            }
            matches
        })
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::util::write_steps(f, &self.steps)
    }
}

impl serde::ser::Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
