//! Key paths into a nested [`Map`](crate::Map).

use std::fmt;
use std::str::FromStr;

/// Separator between keys in the string form of a path.
pub const DELIMITER: char = '.';

/// Errors related to path construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path has no keys after normalization.
    #[error("path must contain at least one key")]
    Empty,
}

/// A non-empty, ordered sequence of map keys.
///
/// Paths come in two external forms that normalize to the same thing:
///
/// ```rust
/// use drey::Path;
///
/// let dotted = Path::parse("foo.bar.baz").unwrap();
/// let keys = Path::from_keys(["foo", "bar", "baz"]).unwrap();
/// assert_eq!(dotted, keys);
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    /// Parse a dot-delimited string.
    ///
    /// Empty segments are dropped, so `"foo..bar."` is the same path as
    /// `"foo.bar"`.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        Self::from_keys(s.split(DELIMITER).filter(|segment| !segment.is_empty()))
    }

    /// Build a path from keys, kept exactly as given.
    pub fn from_keys<I, K>(keys: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Path { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    /// Split into the final key and the keys leading to its parent map.
    pub fn split_last(&self) -> (&str, &[String]) {
        let (parents, last) = self.keys.split_at(self.keys.len() - 1);
        (&last[0], parents)
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join(DELIMITER.to_string().as_str()))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.keys[i]
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = PathError;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        Path::from_keys(keys)
    }
}

impl TryFrom<&[&str]> for Path {
    type Error = PathError;

    fn try_from(keys: &[&str]) -> Result<Self, Self::Error> {
        Path::from_keys(keys.iter().copied())
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Path {
    type Error = PathError;

    fn try_from(keys: [&str; N]) -> Result<Self, Self::Error> {
        Path::from_keys(keys)
    }
}

/// Anything the engine accepts as a path.
///
/// Strings are split on [`DELIMITER`]; key sequences are used unchanged.
pub trait IntoPath {
    fn into_path(self) -> Result<Path, PathError>;
}

impl IntoPath for Path {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(self)
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(self.clone())
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(self)
    }
}

impl IntoPath for String {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(&self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(self)
    }
}

impl IntoPath for Vec<String> {
    fn into_path(self) -> Result<Path, PathError> {
        Path::from_keys(self)
    }
}

impl IntoPath for Vec<&str> {
    fn into_path(self) -> Result<Path, PathError> {
        Path::from_keys(self)
    }
}

impl IntoPath for &[&str] {
    fn into_path(self) -> Result<Path, PathError> {
        Path::from_keys(self.iter().copied())
    }
}

impl IntoPath for &[String] {
    fn into_path(self) -> Result<Path, PathError> {
        Path::from_keys(self.iter().cloned())
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn into_path(self) -> Result<Path, PathError> {
        Path::from_keys(self)
    }
}

/// Normalize either path form into a [`Path`].
pub fn normalize_path(path: impl IntoPath) -> Result<Path, PathError> {
    path.into_path()
}

/// Build a [`Path`] from a dotted string or a bracketed list of keys.
///
/// Keys in the list form are never split, whatever their count.
///
/// # Example
///
/// ```rust
/// use drey::path;
///
/// assert_eq!(path!("foo.bar"), path!(["foo", "bar"]));
/// assert_eq!(path!(["foo.bar"]).len(), 1);
/// ```
#[macro_export]
macro_rules! path {
    ([$($key:expr),+ $(,)?]) => {
        $crate::Path::from_keys([$($key),+]).expect("invalid path literal")
    };
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}
