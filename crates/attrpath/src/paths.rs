//! insertion ordered collection of [Path]s
use crate::path::Path;
use std::fmt::{self, Display, Formatter};

/// Ordered set of [Path]s
///
/// Appending a path that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths(Vec<Path>);

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every path that is not yet part of the collection
    pub fn append(&mut self, paths: impl IntoIterator<Item = Path>) -> &mut Self {
        for path in paths {
            if !self.contains(&path) {
                self.0.push(path);
            }
        }

        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|existing| existing == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Path> for Paths {
    fn from_iter<T: IntoIterator<Item = Path>>(iter: T) -> Self {
        let mut paths = Paths::new();
        paths.append(iter);
        paths
    }
}

impl IntoIterator for Paths {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `[a,b]`, paths that render as an empty string are skipped
impl Display for Paths {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for rendered in self.0.iter().map(|path| path.to_string()) {
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
