//! concrete location of a value
use crate::expression::Expression;
use crate::step::PathStep;
use crate::value::Value;
use std::fmt::{self, Display, Formatter};

/// Location of one specific value, as an ordered list of [PathStep]s
///
/// The empty path refers to the root of the value tree.
///
/// Every `at_*` method returns a new [Path] with its own step storage. A path that
/// is shared between callers is never changed by extending it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Path pointing at the root
    pub fn empty() -> Self {
        Self::default()
    }

    /// Path to a root level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self::empty().at_name(name)
    }

    pub fn from_steps(steps: impl IntoIterator<Item = PathStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.at_step(PathStep::AttributeName(name.into()))
    }

    pub fn at_list_index(&self, index: i64) -> Self {
        self.at_step(PathStep::ElementKeyInt(index))
    }

    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.at_step(PathStep::ElementKeyString(key.into()))
    }

    pub fn at_set_value(&self, value: Value) -> Self {
        self.at_step(PathStep::ElementKeyValue(value))
    }

    /// New path with `step` appended
    pub fn at_step(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);

        Self { steps }
    }

    /// Path one level up, the empty path stays empty
    pub fn parent_path(&self) -> Self {
        match self.steps.split_last() {
            Some((_, rest)) => Self::from_steps(rest.iter().cloned()),
            None => Self::empty(),
        }
    }

    /// Expression that matches this path and no other
    pub fn to_expression(&self) -> Expression {
        Expression::from_steps(true, self.steps.iter().map(PathStep::to_expression_step))
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// First step and the path below it
    pub fn next_step(&self) -> Option<(&PathStep, Path)> {
        self.steps
            .split_first()
            .map(|(first, rest)| (first, Self::from_steps(rest.iter().cloned())))
    }

    /// Last step and the path leading to it
    pub fn last_step(&self) -> Option<(&PathStep, Path)> {
        self.steps
            .split_last()
            .map(|(last, rest)| (last, Self::from_steps(rest.iter().cloned())))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::util::write_steps(f, &self.steps)
    }
}

impl serde::ser::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::Type;
    use pretty_assertions::assert_eq;

    #[test]
    fn builders_append_steps() {
        let path = Path::root("test1")
            .at_list_index(0)
            .at_map_key("key")
            .at_set_value(Value::from("value"))
            .at_name("test2");

        assert_eq!(
            path.steps(),
            &[
                PathStep::AttributeName("test1".into()),
                PathStep::ElementKeyInt(0),
                PathStep::ElementKeyString("key".into()),
                PathStep::ElementKeyValue(Value::from("value")),
                PathStep::AttributeName("test2".into()),
            ]
        );
    }

    #[test]
    fn extending_does_not_alias() {
        let mut steps = Vec::with_capacity(16);
        steps.push(PathStep::AttributeName("shared".into()));
        let shared = Path { steps };

        let one = shared.at_name("one");
        let two = shared.at_name("two");

        assert_eq!(shared, Path::root("shared"));
        assert_eq!(one, Path::root("shared").at_name("one"));
        assert_eq!(two, Path::root("shared").at_name("two"));
    }

    #[test]
    fn clone_is_independent() {
        let original = Path::root("test").at_list_index(1);
        let mut copy = original.clone();
        copy.steps.push(PathStep::ElementKeyInt(2));

        assert_eq!(original, Path::root("test").at_list_index(1));
        assert_ne!(original, copy);
    }

    #[test]
    fn equality() {
        assert_eq!(Path::empty(), Path::empty());
        assert_eq!(
            Path::root("test1").at_list_index(0).at_name("test2"),
            Path::root("test1").at_list_index(0).at_name("test2")
        );
        assert_ne!(Path::root("test1").at_name("test2"), Path::root("test1"));
        assert_ne!(Path::root("test").at_list_index(0), Path::root("test").at_map_key("0"));
        assert_ne!(
            Path::root("test").at_set_value(Value::null(Type::String)),
            Path::root("test").at_set_value(Value::null(Type::Boolean))
        );
    }

    #[test]
    fn parent_path() {
        assert_eq!(Path::empty().parent_path(), Path::empty());
        assert_eq!(Path::root("test").parent_path(), Path::empty());
        assert_eq!(
            Path::root("test").at_list_index(1).parent_path(),
            Path::root("test")
        );
    }

    #[test]
    fn next_and_last_step() {
        let path = Path::root("test1").at_list_index(0).at_name("test2");

        let (first, rest) = path.next_step().unwrap();
        assert_eq!(first, &PathStep::AttributeName("test1".into()));
        assert_eq!(rest, Path::from_steps([
            PathStep::ElementKeyInt(0),
            PathStep::AttributeName("test2".into()),
        ]));

        let (last, rest) = path.last_step().unwrap();
        assert_eq!(last, &PathStep::AttributeName("test2".into()));
        assert_eq!(rest, Path::root("test1").at_list_index(0));

        assert!(Path::empty().next_step().is_none());
        assert!(Path::empty().last_step().is_none());
    }

    #[test]
    fn to_expression() {
        let path = Path::root("test").at_list_index(1).at_map_key("key");
        let expression = path.to_expression();

        assert_eq!(
            expression,
            Expression::match_root("test").at_list_index(1).at_map_key("key")
        );
        assert!(expression.matches(&path));
        assert!(!expression.matches(&path.parent_path()));
        assert!(!expression.matches(&Path::root("test").at_list_index(2).at_map_key("key")));
    }

    #[test]
    fn display() {
        let cases = [
            (Path::empty(), ""),
            (Path::root("test"), "test"),
            (Path::root("test1").at_name("test2").at_name("test3"), "test1.test2.test3"),
            (Path::root("test1").at_list_index(0).at_name("test2"), "test1[0].test2"),
            (Path::root("test").at_list_index(0).at_list_index(1), "test[0][1]"),
            (
                Path::root("test").at_map_key("test-key1").at_map_key("test-key2"),
                r#"test["test-key1"]["test-key2"]"#,
            ),
            (
                Path::root("test").at_set_value(Value::from("test-value")),
                r#"test[Value("test-value")]"#,
            ),
            (Path::empty().at_list_index(0), "[0]"),
            (Path::empty().at_map_key("test"), r#"["test"]"#),
        ];

        for (path, expected) in cases {
            assert_eq!(path.to_string(), expected);
        }
    }
}
