//! Path addressing — unique string identifiers for JSON locations.
//!
//! Every location in a document gets a stable address: the root is `$`,
//! object members extend with `.key`, array elements with `[index]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The root sentinel.
pub const ROOT: &str = "$";

/// Unique string address of a location within a JSON value tree.
///
/// Addresses are injective over a document as long as object keys do not
/// themselves contain `.`, `[` or `]`. Keys are NOT escaped: a key literally
/// named `"a.b"` produces the same address as key `b` nested under key `a`.
/// Known limitation; the builder de-duplicates defensively when it bites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(String);

impl PathId {
    /// The address of the document root.
    pub fn root() -> Self {
        PathId(ROOT.to_string())
    }

    /// Address of the object member `key` under this path.
    ///
    /// The root sentinel never gets a duplicated separator: `$` + `a` is
    /// `$.a`, while `$.a` + `b` is `$.a.b`.
    pub fn child_key(&self, key: &str) -> Self {
        PathId(format!("{}.{}", self.0, key))
    }

    /// Address of the array element at `index` under this path.
    pub fn child_index(&self, index: usize) -> Self {
        PathId(format!("{}[{}]", self.0, index))
    }

    /// Whether this is the root address.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PathId {
    fn from(s: String) -> Self {
        PathId(s)
    }
}

impl From<&str> for PathId {
    fn from(s: &str) -> Self {
        PathId(s.to_string())
    }
}
