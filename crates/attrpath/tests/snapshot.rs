//! Snapshot tests
//!
//! Renders paths and expressions in their canonical string form and checks that the
//! output does not change. Diagnostics show these strings to users.
use attrpath::expression::Expression;
use attrpath::expressions::Expressions;
use attrpath::path::Path;
use attrpath::paths::Paths;
use attrpath::value::{Type, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("ATTRPATH_LOG"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn render<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn paths() {
    init_tracing();

    let rendered = render(&[
        Path::empty(),
        Path::root("tags").at_map_key("env"),
        Path::root("block").at_list_index(0).at_name("attribute"),
        Path::root("map").at_map_key(r#"quote " and \ backslash"#),
        Path::root("set").at_set_value(Value::from(1.2)),
        Path::root("set").at_set_value(Value::unknown(Type::String)),
        Path::root("set")
            .at_set_value(Value::object([
                ("b", Value::list(Type::Integer, [Value::from(1_i64), Value::from(2_i64)])),
                ("a", Value::null(Type::Boolean)),
            ]))
            .at_name("a"),
    ]);

    insta::assert_snapshot!(rendered, @r#"
    ``
    `tags["env"]`
    `block[0].attribute`
    `map["quote \" and \\ backslash"]`
    `set[Value(1.200000)]`
    `set[Value(<unknown>)]`
    `set[Value({"a":<null>,"b":[1,2]})].a`
    "#);
}

#[test]
fn expressions() {
    init_tracing();

    let rendered = render(&[
        Expression::match_relative(),
        Expression::match_root("list").at_any_list_index().at_name("name"),
        Expression::match_root("map").at_any_map_key(),
        Expression::match_root("set").at_any_set_value().at_name("id"),
        Expression::match_root("a").at_name("b").at_parent().at_name("c"),
        Expression::match_relative().at_parent().at_parent().at_name("other"),
    ]);

    insta::assert_snapshot!(rendered, @r#"
    ``
    `list[*].name`
    `map["*"]`
    `set[Value(*)].id`
    `a.b<.c`
    `<<.other`
    "#);
}

#[test]
fn collections() {
    init_tracing();

    let mut paths = Paths::new();
    paths.append([Path::empty(), Path::root("one"), Path::root("two").at_list_index(2)]);
    insta::assert_snapshot!(paths.to_string(), @"[one,two[2]]");

    let mut expressions = Expressions::new();
    expressions.append([
        Expression::match_root("one"),
        Expression::match_relative(),
        Expression::match_relative().at_parent().at_name("two"),
        Expression::match_root("one"),
    ]);
    insta::assert_snapshot!(expressions.to_string(), @"[one,<.two]");
}

#[test]
fn string_form_parses_back() {
    init_tracing();

    let paths = [
        Path::root("tags").at_map_key("env"),
        Path::root("block").at_list_index(3).at_name("attribute"),
        Path::root("map").at_map_key(r#"quote " and \ backslash"#),
        Path::root("set").at_set_value(Value::from("x")).at_name("nested"),
    ];
    for path in paths {
        assert_eq!(path.to_string().parse::<Path>().unwrap(), path);
    }

    let expressions = [
        Expression::match_root("list").at_any_list_index().at_name("name"),
        Expression::match_root("set").at_any_set_value(),
        Expression::match_root("a").at_name("b").at_parent().at_name("c"),
        Expression::match_relative().at_parent().at_name("sibling"),
    ];
    for expression in expressions {
        assert_eq!(expression.to_string().parse::<Expression>().unwrap(), expression);
    }
}
