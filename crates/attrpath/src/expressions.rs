//! insertion ordered collection of [Expression]s
use crate::expression::Expression;
use crate::path::Path;
use std::fmt::{self, Display, Formatter};

/// Ordered set of [Expression]s, e.g. a group of attributes that conflict with each other
///
/// Appending an expression that is already present is a no-op. Expressions are compared
/// as written, so `a.b<` and `a` are different members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expressions(Vec<Expression>);

impl Expressions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every expression that is not yet part of the collection
    pub fn append(&mut self, expressions: impl IntoIterator<Item = Expression>) -> &mut Self {
        for expression in expressions {
            if !self.contains(&expression) {
                self.0.push(expression);
            }
        }

        self
    }

    pub fn contains(&self, expression: &Expression) -> bool {
        self.0.iter().any(|existing| existing == expression)
    }

    /// Returns true if any expression matches `path`
    pub fn matches(&self, path: &Path) -> bool {
        self.0.iter().any(|expression| expression.matches(path))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Expression] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Expression> for Expressions {
    fn from_iter<T: IntoIterator<Item = Expression>>(iter: T) -> Self {
        let mut expressions = Expressions::new();
        expressions.append(iter);
        expressions
    }
}

impl IntoIterator for Expressions {
    type Item = Expression;
    type IntoIter = std::vec::IntoIter<Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Expressions {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `[a,b]`, expressions that render as an empty string are skipped
impl Display for Expressions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for rendered in self.0.iter().map(|expression| expression.to_string()) {
            if rendered.is_empty() {
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            f.write_str(&rendered)?;
        }
        f.write_str("]")
    }
}

impl serde::ser::Serialize for Expressions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}
