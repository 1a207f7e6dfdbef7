//! # attrpath - addressing values inside nested configuration
//!
//! ## Introduction for developers
//!
//! Read this to understand how `attrpath` works internally.
//!
//! ### Terms
//!
//! A configuration value is a tree:
//! - objects (and blocks) have named `attributes`
//! - lists and tuples have `elements` at an integer position
//! - maps have `elements` under a string key
//! - sets have `elements` that can only be told apart by their value
//!
//! Each hop into the tree is a `step`.
//!
//! ### Paths
//!
//! A [path::Path] is a list of [step::PathStep]s and names exactly one location.
//! The empty path is the root. Paths are built step by step while walking a value:
//!
//! ```
//! use attrpath::path::Path;
//!
//! let path = Path::root("tags").at_map_key("env");
//! assert_eq!(path.to_string(), r#"tags["env"]"#);
//! ```
//!
//! ### Expressions
//!
//! An [expression::Expression] is a list of [step::ExpressionStep]s and names a set of
//! locations. Besides exact steps it knows wildcards (any list index, any map key, any
//! set value) and a parent step that moves one level up.
//!
//! Validators usually declare their expressions relative to the attribute they are
//! attached to. Such an expression is anchored with [expression::Expression::merge]
//! once the attribute's own location is known:
//!
//! ```
//! use attrpath::expression::Expression;
//! use attrpath::path::Path;
//!
//! let sibling = Expression::match_relative().at_parent().at_name("sibling");
//! let attribute = Path::root("parent").at_list_index(1).at_name("child");
//!
//! let anchored = attribute.to_expression().merge(&sibling);
//! assert_eq!(anchored.to_string(), "parent[1].child<.sibling");
//! assert!(anchored.matches(&Path::root("parent").at_list_index(1).at_name("sibling")));
//! ```
//!
//! ### Resolution
//!
//! Parent steps are kept until the expression is used for matching. See
//! [expression] for the resolution rules. An expression that would step above the
//! root is impossible and matches nothing. None of the operations fail, callers that
//! consider "matches nothing" an error have to report it themselves.
//!
//! ### Collections
//!
//! [paths::Paths] and [expressions::Expressions] keep insertion order and ignore
//! duplicates on append.
//!
//! ### String form
//!
//! Paths and expressions display as `block[0].attribute["key"][Value("x")]`. The
//! [parse] module reads that format back.
pub mod error;
pub mod expression;
pub mod expressions;
pub mod parse;
pub mod path;
pub mod paths;
pub mod step;
mod util;
pub mod value;
