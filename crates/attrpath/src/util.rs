use std::fmt::{self, Display, Formatter};

/// Step that can be written as part of a path or expression string
pub(crate) trait WriteStep: Display {
    /// Attribute names after the first step are separated with a `.`
    fn is_attribute_name(&self) -> bool;
}

pub(crate) fn write_steps<'s, S: WriteStep + 's>(
    f: &mut Formatter<'_>,
    steps: impl IntoIterator<Item = &'s S>,
) -> fmt::Result {
    for (index, step) in steps.into_iter().enumerate() {
        if index > 0 && step.is_attribute_name() {
            f.write_str(".")?;
        }
        write!(f, "{step}")?;
    }

    Ok(())
}

/// Write a double quoted string, escaping `"`, `\` and control characters
pub(crate) fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Display adapter for [write_quoted]
pub(crate) struct Quoted<'a>(pub &'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.0)
    }
}
