use thiserror::Error;

/// Failure to read a path or expression from its string form
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected {found:?} at position {position}, expected {expected}")]
    UnexpectedChar {
        position: usize,
        found: char,
        expected: &'static str,
    },

    #[error("empty attribute name at position {position}")]
    EmptyAttributeName { position: usize },

    #[error("invalid list index at position {position}")]
    InvalidIndex {
        position: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid string literal at position {position}")]
    InvalidString {
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value at position {position}")]
    InvalidValue {
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} value at position {1} has no type and can not be parsed")]
    UntypedValue(&'static str, usize),

    #[error("{step} at position {position} is only allowed in expressions")]
    ExpressionOnlyStep { position: usize, step: &'static str },
}
