//! read paths and expressions back from their string form
//!
//! Accepts the same format that [Path] and [Expression] are displayed with:
//!
//! | **step**                  | **example**             |
//! |---------------------------|-------------------------|
//! | attribute name            | `block.attribute`       |
//! | list index                | `list[0]`, `list[*]`    |
//! | map key                   | `map["key"]`, `map["*"]`|
//! | set value (json)          | `set[Value({"a":1})]`, `set[Value(*)]` |
//! | parent                    | `a.b<.c`, `<.sibling`   |
//!
//! Wildcards and parent steps are only valid in expressions. Inside a path `["*"]` is
//! the literal key `*`. An expression that starts with `<` is relative, every other
//! non-empty expression is rooted.
//!
//! Set values are parsed as json and their types are inferred, so a set or map value
//! is read back as a list or object. `<null>` and `<unknown>` carry no type and are
//! rejected.
use crate::error::ParseError;
use crate::expression::Expression;
use crate::path::Path;
use crate::step::{ExpressionStep, PathStep};
use crate::value::{Type, Value};
use std::str::FromStr;

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps = Parser::new(s)
            .steps()?
            .into_iter()
            .map(|(position, step)| match step {
                RawStep::Name(name) => Ok(PathStep::AttributeName(name)),
                RawStep::Index(index) => Ok(PathStep::ElementKeyInt(index)),
                RawStep::Key(key) => Ok(PathStep::ElementKeyString(key)),
                RawStep::Value(value) => Ok(PathStep::ElementKeyValue(value)),
                RawStep::AnyIndex => Err(ParseError::ExpressionOnlyStep {
                    position,
                    step: "[*]",
                }),
                RawStep::AnyValue => Err(ParseError::ExpressionOnlyStep {
                    position,
                    step: "[Value(*)]",
                }),
                RawStep::Parent => Err(ParseError::ExpressionOnlyStep {
                    position,
                    step: "<",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Path::from_steps(steps))
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps: Vec<ExpressionStep> = Parser::new(s)
            .steps()?
            .into_iter()
            .map(|(_, step)| match step {
                RawStep::Name(name) => ExpressionStep::AttributeNameExact(name),
                RawStep::Index(index) => ExpressionStep::ElementKeyIntExact(index),
                RawStep::AnyIndex => ExpressionStep::ElementKeyIntAny,
                RawStep::Key(key) if key == "*" => ExpressionStep::ElementKeyStringAny,
                RawStep::Key(key) => ExpressionStep::ElementKeyStringExact(key),
                RawStep::Value(value) => ExpressionStep::ElementKeyValueExact(value),
                RawStep::AnyValue => ExpressionStep::ElementKeyValueAny,
                RawStep::Parent => ExpressionStep::Parent,
            })
            .collect();

        let root = steps.first().is_some_and(|step| !step.is_parent());
        Ok(Expression::from_steps(root, steps))
    }
}

/// Step as written, before deciding between path and expression
#[derive(Debug, PartialEq)]
enum RawStep {
    Name(String),
    Index(i64),
    AnyIndex,
    Key(String),
    Value(Value),
    AnyValue,
    Parent,
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn steps(mut self) -> Result<Vec<(usize, RawStep)>, ParseError> {
        let mut steps = Vec::new();

        while let Some(c) = self.peek() {
            let position = self.position;
            let step = match c {
                '[' => self.bracket()?,
                '<' => {
                    self.bump();
                    RawStep::Parent
                }
                '.' if !steps.is_empty() => {
                    self.bump();
                    RawStep::Name(self.name()?)
                }
                _ if steps.is_empty() => RawStep::Name(self.name()?),
                found => {
                    return Err(ParseError::UnexpectedChar {
                        position,
                        found,
                        expected: "'.', '[' or '<'",
                    })
                }
            };

            steps.push((position, step));
        }

        Ok(steps)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.position += prefix.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, description: &'static str) -> Result<(), ParseError> {
        let position = self.position;
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(ParseError::UnexpectedChar {
                position,
                found,
                expected: description,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: description,
            }),
        }
    }

    fn name(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        while let Some(c) = self.peek() {
            if matches!(c, '.' | '[' | '<') {
                break;
            }
            self.bump();
        }

        if start == self.position {
            return Err(ParseError::EmptyAttributeName { position: start });
        }

        Ok(self.input[start..self.position].to_string())
    }

    /// `[...]` step
    fn bracket(&mut self) -> Result<RawStep, ParseError> {
        self.expect('[', "'['")?;

        let position = self.position;
        let step = match self.peek() {
            Some('*') => {
                self.bump();
                RawStep::AnyIndex
            }
            Some('"') => RawStep::Key(self.string()?),
            Some('V') => self.value()?,
            Some(c) if c == '-' || c.is_ascii_digit() => RawStep::Index(self.index()?),
            Some(found) => {
                return Err(ParseError::UnexpectedChar {
                    position,
                    found,
                    expected: "list index, map key or set value",
                })
            }
            None => {
                return Err(ParseError::UnexpectedEnd {
                    expected: "list index, map key or set value",
                })
            }
        };

        self.expect(']', "']'")?;
        Ok(step)
    }

    fn index(&mut self) -> Result<i64, ParseError> {
        let start = self.position;
        self.eat("-");
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }

        self.input[start..self.position]
            .parse()
            .map_err(|source| ParseError::InvalidIndex {
                position: start,
                source,
            })
    }

    /// Json string literal
    fn string(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        self.expect('"', "'\"'")?;

        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => break,
                Some(_) => {}
                None => {
                    return Err(ParseError::UnexpectedEnd {
                        expected: "closing '\"'",
                    })
                }
            }
        }

        serde_json::from_str(&self.input[start..self.position]).map_err(|source| {
            ParseError::InvalidString {
                position: start,
                source,
            }
        })
    }

    /// `Value(...)` step
    fn value(&mut self) -> Result<RawStep, ParseError> {
        let position = self.position;
        if !self.eat("Value(") {
            return Err(ParseError::UnexpectedChar {
                position,
                found: 'V',
                expected: "'Value('",
            });
        }

        let start = self.position;
        let step = if self.eat("*") {
            RawStep::AnyValue
        } else if self.eat("<null>") {
            return Err(ParseError::UntypedValue("null", start));
        } else if self.eat("<unknown>") {
            return Err(ParseError::UntypedValue("unknown", start));
        } else {
            let end = self.json_end().ok_or(ParseError::UnexpectedEnd {
                expected: "closing ')'",
            })?;
            let json: serde_json::Value = serde_json::from_str(&self.input[start..end])
                .map_err(|source| ParseError::InvalidValue {
                    position: start,
                    source,
                })?;
            self.position = end;

            RawStep::Value(value_from_json(json, start)?)
        };

        self.expect(')', "')'")?;
        Ok(step)
    }

    /// Offset of the `)` closing a json value that starts at the current position
    fn json_end(&self) -> Option<usize> {
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, c) in self.rest().char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match c {
                '"' => in_string = true,
                '[' | '{' => depth += 1,
                ']' | '}' => depth = depth.saturating_sub(1),
                ')' if depth == 0 => return Some(self.position + offset),
                _ => {}
            }
        }

        None
    }
}

/// Value with types inferred from json
fn value_from_json(json: serde_json::Value, position: usize) -> Result<Value, ParseError> {
    Ok(match json {
        serde_json::Value::Null => return Err(ParseError::UntypedValue("null", position)),
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(int) => Value::Integer(int),
            None => Value::Decimal(n.as_f64().unwrap_or_default()),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(array) => {
            let elements = array
                .into_iter()
                .map(|element| value_from_json(element, position))
                .collect::<Result<Vec<_>, _>>()?;

            let mut types = elements.iter().map(Value::ty);
            match types.next() {
                None => Value::list(Type::Dynamic, elements),
                Some(first) if types.all(|ty| ty == first) => Value::list(first, elements),
                Some(_) => Value::tuple(elements),
            }
        }
        serde_json::Value::Object(object) => Value::object(
            object
                .into_iter()
                .map(|(key, value)| value_from_json(value, position).map(|value| (key, value)))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path() {
        let cases = [
            ("", Path::empty()),
            ("test", Path::root("test")),
            ("test1.test2.test3", Path::root("test1").at_name("test2").at_name("test3")),
            ("test1[0].test2", Path::root("test1").at_list_index(0).at_name("test2")),
            ("test[-1]", Path::root("test").at_list_index(-1)),
            (
                r#"tags["env"]["a\"b"]"#,
                Path::root("tags").at_map_key("env").at_map_key(r#"a"b"#),
            ),
            (r#"test["*"]"#, Path::root("test").at_map_key("*")),
            (
                r#"test[Value("test-value")]"#,
                Path::root("test").at_set_value(Value::from("test-value")),
            ),
            ("[0]", Path::empty().at_list_index(0)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Path>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn path_rejects_expression_steps() {
        for input in ["test[*]", "test[Value(*)]", "test<", "<.test"] {
            let err = input.parse::<Path>().unwrap_err();
            assert!(
                matches!(err, ParseError::ExpressionOnlyStep { .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn expression() {
        let cases = [
            ("", Expression::match_relative()),
            ("test[*]", Expression::match_root("test").at_any_list_index()),
            (r#"test["*"]"#, Expression::match_root("test").at_any_map_key()),
            ("test[Value(*)]", Expression::match_root("test").at_any_set_value()),
            (
                "a.b<.c",
                Expression::match_root("a").at_name("b").at_parent().at_name("c"),
            ),
            (
                "<.sibling",
                Expression::match_relative().at_parent().at_name("sibling"),
            ),
            ("<<", Expression::match_relative().at_parent().at_parent()),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Expression>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn values() {
        let cases = [
            ("s[Value(true)]", Value::from(true)),
            ("s[Value(123)]", Value::from(123_i64)),
            ("s[Value(1.200000)]", Value::from(1.2)),
            (
                r#"s[Value(["a","b"])]"#,
                Value::list(Type::String, [Value::from("a"), Value::from("b")]),
            ),
            (
                r#"s[Value(["a",1])]"#,
                Value::tuple([Value::from("a"), Value::from(1_i64)]),
            ),
            (r#"s[Value([])]"#, Value::list(Type::Dynamic, [])),
            (
                r#"s[Value({"name":"x)]","nested":{"n":1}})]"#,
                Value::object([
                    ("name", Value::from("x)]")),
                    ("nested", Value::object([("n", Value::from(1_i64))])),
                ]),
            ),
        ];

        for (input, expected) in cases {
            let path: Path = input.parse().unwrap();
            assert_eq!(path, Path::root("s").at_set_value(expected), "{input}");
        }
    }

    #[test]
    fn untyped_values() {
        for input in ["s[Value(<null>)]", "s[Value(<unknown>)]", "s[Value(null)]", "s[Value([null])]"] {
            let err = input.parse::<Path>().unwrap_err();
            assert!(matches!(err, ParseError::UntypedValue(..)), "{input}: {err:?}");
        }
    }

    #[test]
    fn errors() {
        assert!(matches!(
            "test.".parse::<Path>(),
            Err(ParseError::EmptyAttributeName { position: 5 })
        ));
        assert!(matches!(
            ".test".parse::<Path>(),
            Err(ParseError::EmptyAttributeName { position: 0 })
        ));
        assert!(matches!(
            "test[0".parse::<Path>(),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            "test[0]x".parse::<Path>(),
            Err(ParseError::UnexpectedChar {
                position: 7,
                found: 'x',
                ..
            })
        ));
        assert!(matches!(
            "test[-]".parse::<Path>(),
            Err(ParseError::InvalidIndex { position: 5, .. })
        ));
        assert!(matches!(
            r#"test["open"#.parse::<Path>(),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            "test[Value(1]".parse::<Path>(),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            "test[x]".parse::<Path>(),
            Err(ParseError::UnexpectedChar { found: 'x', .. })
        ));
    }
}
