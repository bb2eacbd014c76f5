use thiserror::Error;

use crate::element::ElementKind;

/// Errors raised while building or installing a [`ColumnRegistry`](crate::ColumnRegistry).
///
/// Misplaced `#[column]` attributes never reach this type: the macros reject them
/// at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Metadata was attached to an element that is not a field, method or parameter.
    #[error("column metadata cannot be attached to {kind} `{element}`; allowed targets are fields, methods and parameters")]
    InvalidAttachmentTarget { kind: ElementKind, element: String },

    /// The element already carries column metadata.
    #[error("`{element}` already carries column metadata")]
    DuplicateAttachment { element: String },

    #[error("a column registry has already been installed")]
    AlreadyInstalled,
}
