//! # Registry Module
//!
//! An explicit side table from [`ElementId`] to [`ColumnMetadata`]. It is filled once
//! at program initialization, either from the tables generated by the macros or by
//! attaching metadata to elements of types the caller does not own. It is read-only
//! after [`RegistryBuilder::build`].

// ============================================================================
// Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{ColumnFields, ColumnMethods, ColumnMetadata, ElementId, Error};

// ============================================================================
// Registry Builder
// ============================================================================

/// Collects column declarations before freezing them into a [`ColumnRegistry`].
///
/// Every method consumes and returns the builder, so declarations chain with `?`.
///
/// # Example
///
/// ```rust,ignore
/// let registry = ColumnRegistry::builder()
///     .register_fields::<Employee>()?
///     .register_methods::<Employee>()?
///     .attach(ElementId::field::<Legacy>("code"), "LEGACY_CODE")?
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<ElementId, ColumnMetadata>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a column name to `element`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAttachmentTarget`] if `element` is not a field, method or parameter.
    /// * [`Error::DuplicateAttachment`] if `element` already carries metadata.
    pub fn attach(mut self, element: ElementId, name: &'static str) -> Result<Self, Error> {
        let kind = element.kind();
        if !kind.is_attachable() {
            log::warn!("Rejected column metadata on {} `{}`", kind, element);
            return Err(Error::InvalidAttachmentTarget { kind, element: element.to_string() });
        }

        if self.entries.contains_key(&element) {
            return Err(Error::DuplicateAttachment { element: element.to_string() });
        }

        log::debug!("Attached column {:?} to {}", name, element);
        self.entries.insert(element, ColumnMetadata::new(name));
        Ok(self)
    }

    /// Imports the field declarations generated by `#[derive(ColumnFields)]`.
    pub fn register_fields<T: ColumnFields + ?Sized>(self) -> Result<Self, Error> {
        T::FIELDS.iter().try_fold(self, |builder, column| {
            builder.attach(ElementId::field::<T>(column.field), column.metadata.name())
        })
    }

    /// Imports the method and parameter declarations generated by `#[column_methods]`.
    pub fn register_methods<T: ColumnMethods + ?Sized>(self) -> Result<Self, Error> {
        let builder = T::METHODS.iter().try_fold(self, |builder, column| {
            builder.attach(ElementId::method::<T>(column.method), column.metadata.name())
        })?;

        T::PARAMETERS.iter().try_fold(builder, |builder, column| {
            builder.attach(
                ElementId::parameter::<T>(column.method, column.index),
                column.metadata.name(),
            )
        })
    }

    /// Freezes the declarations.
    pub fn build(self) -> ColumnRegistry {
        log::info!("Built column registry with {} declarations", self.entries.len());
        ColumnRegistry { entries: self.entries }
    }
}

// ============================================================================
// Column Registry
// ============================================================================

/// A frozen, read-only table of column declarations.
///
/// Lookups never mutate the table, so a registry can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    entries: HashMap<ElementId, ColumnMetadata>,
}

impl ColumnRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the metadata attached to `element`, or `None` if it carries none.
    pub fn get(&self, element: &ElementId) -> Option<&ColumnMetadata> {
        self.entries.get(element)
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.entries.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every declaration, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ColumnMetadata)> {
        self.entries.iter()
    }
}

// ============================================================================
// Process-wide Registry
// ============================================================================

static GLOBAL: OnceLock<ColumnRegistry> = OnceLock::new();

/// Installs `registry` as the process-wide registry.
///
/// Only the first call succeeds; later calls return [`Error::AlreadyInstalled`]
/// and leave the installed registry untouched.
pub fn install(registry: ColumnRegistry) -> Result<&'static ColumnRegistry, Error> {
    let len = registry.len();
    GLOBAL.set(registry).map_err(|_| Error::AlreadyInstalled)?;
    log::info!("Installed process-wide column registry ({} declarations)", len);
    global().ok_or(Error::AlreadyInstalled)
}

/// Returns the process-wide registry, if one has been installed.
pub fn global() -> Option<&'static ColumnRegistry> {
    GLOBAL.get()
}

/// Looks `element` up in the process-wide registry.
///
/// Returns `None` when no registry is installed or the element carries no metadata.
pub fn lookup(element: &ElementId) -> Option<&'static ColumnMetadata> {
    global().and_then(|registry| registry.get(element))
}
