//! Focus handles owned by the filter UI.

use std::fmt;

/// Opaque handle identifying a focusable element (e.g. a column's filter input).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    /// Create a new focus ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FocusId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FocusId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
