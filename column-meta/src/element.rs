//! # Program Elements
//!
//! Stable identifiers for the program elements a [`ColumnRegistry`](crate::ColumnRegistry)
//! is keyed by. Owners are identified by [`std::any::type_name`], which is stable
//! for the lifetime of the process.

use std::any::type_name;
use std::fmt;

use serde::Serialize;

/// The kind of program element an [`ElementId`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Type,
    Field,
    Method,
    Parameter,
    Variant,
    Constant,
}

impl ElementKind {
    /// Whether column metadata may be attached to elements of this kind.
    pub const fn is_attachable(self) -> bool {
        matches!(self, ElementKind::Field | ElementKind::Method | ElementKind::Parameter)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ElementKind::Type => "type",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
            ElementKind::Parameter => "parameter",
            ElementKind::Variant => "variant",
            ElementKind::Constant => "constant",
        };
        f.write_str(kind)
    }
}

/// Identifies a single program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementId {
    Type { owner: &'static str },
    Field { owner: &'static str, field: &'static str },
    Method { owner: &'static str, method: &'static str },
    /// `index` counts typed parameters only, as in [`ParameterColumn`](crate::ParameterColumn).
    Parameter { owner: &'static str, method: &'static str, index: usize },
    Variant { owner: &'static str, variant: &'static str },
    Constant { owner: &'static str, constant: &'static str },
}

impl ElementId {
    pub fn of_type<T: ?Sized>() -> Self {
        ElementId::Type { owner: type_name::<T>() }
    }

    pub fn field<T: ?Sized>(field: &'static str) -> Self {
        ElementId::Field { owner: type_name::<T>(), field }
    }

    pub fn method<T: ?Sized>(method: &'static str) -> Self {
        ElementId::Method { owner: type_name::<T>(), method }
    }

    pub fn parameter<T: ?Sized>(method: &'static str, index: usize) -> Self {
        ElementId::Parameter { owner: type_name::<T>(), method, index }
    }

    pub fn variant<T: ?Sized>(variant: &'static str) -> Self {
        ElementId::Variant { owner: type_name::<T>(), variant }
    }

    pub fn constant<T: ?Sized>(constant: &'static str) -> Self {
        ElementId::Constant { owner: type_name::<T>(), constant }
    }

    pub const fn kind(&self) -> ElementKind {
        match self {
            ElementId::Type { .. } => ElementKind::Type,
            ElementId::Field { .. } => ElementKind::Field,
            ElementId::Method { .. } => ElementKind::Method,
            ElementId::Parameter { .. } => ElementKind::Parameter,
            ElementId::Variant { .. } => ElementKind::Variant,
            ElementId::Constant { .. } => ElementKind::Constant,
        }
    }

    pub const fn owner(&self) -> &'static str {
        match self {
            ElementId::Type { owner }
            | ElementId::Field { owner, .. }
            | ElementId::Method { owner, .. }
            | ElementId::Parameter { owner, .. }
            | ElementId::Variant { owner, .. }
            | ElementId::Constant { owner, .. } => *owner,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Type { owner } => write!(f, "{}", owner),
            ElementId::Field { owner, field } => write!(f, "{}.{}", owner, field),
            ElementId::Method { owner, method } => write!(f, "{}::{}()", owner, method),
            ElementId::Parameter { owner, method, index } => {
                write!(f, "{}::{}(#{})", owner, method, index)
            }
            ElementId::Variant { owner, variant } => write!(f, "{}::{}", owner, variant),
            ElementId::Constant { owner, constant } => write!(f, "{}::{}", owner, constant),
        }
    }
}
