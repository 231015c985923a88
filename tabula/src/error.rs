//! Column error types.

use thiserror::Error;

use crate::group::GroupId;

/// Error returned by a fallible caller-supplied callback (formatter, renderer).
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by column operations.
///
/// Callback faults keep the callback's own error as the `source`. Group
/// variants come from building a [`GroupRegistry`](crate::group::GroupRegistry).
#[derive(Debug, Error)]
pub enum ColumnError {
    /// The column's formatter returned an error.
    #[error("Formatter for column '{field}' failed: {source}")]
    Formatter {
        /// Field of the column whose formatter failed.
        field: String,
        #[source]
        source: CallbackError,
    },

    /// The column's cell or footer renderer returned an error.
    #[error("Renderer for column '{field}' failed: {source}")]
    Renderer {
        /// Field of the column whose renderer failed.
        field: String,
        #[source]
        source: CallbackError,
    },

    /// A group id that the registry never handed out.
    #[error("Column group {0} is not registered")]
    UnknownGroup(GroupId),

    /// An expanded group must wrap exactly one column.
    #[error("Expanded group '{title}' must contain exactly one field, found {count}")]
    ExpandedGroupFields {
        /// Title of the rejected group.
        title: String,
        /// Number of fields it listed.
        count: usize,
    },
}

impl ColumnError {
    pub(crate) fn formatter(field: &str, source: CallbackError) -> Self {
        Self::Formatter {
            field: field.to_string(),
            source,
        }
    }

    pub(crate) fn renderer(field: &str, source: CallbackError) -> Self {
        Self::Renderer {
            field: field.to_string(),
            source,
        }
    }
}
