use serde::Serialize;

/// The column name declared for a field, method or parameter.
///
/// An empty name means the element is mapped, but the mapper should derive the
/// column name from its own naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ColumnMetadata {
    name: &'static str,
}

impl ColumnMetadata {
    /// Creates metadata declaring `name`. The value is kept verbatim.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The declared column name, `""` when none was given.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the declaration left the name to the mapper's convention.
    pub const fn is_conventional(&self) -> bool {
        self.name.is_empty()
    }
}

/// A `#[column]` declaration on a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldColumn {
    /// The field identifier, or its position for tuple structs.
    pub field: &'static str,
    pub metadata: ColumnMetadata,
}

impl FieldColumn {
    pub const fn new(field: &'static str, metadata: ColumnMetadata) -> Self {
        Self { field, metadata }
    }
}

/// A `#[column]` declaration on an associated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodColumn {
    pub method: &'static str,
    pub metadata: ColumnMetadata,
}

impl MethodColumn {
    pub const fn new(method: &'static str, metadata: ColumnMetadata) -> Self {
        Self { method, metadata }
    }
}

/// A `#[column]` declaration on a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterColumn {
    /// The function declaring the parameter.
    pub method: &'static str,
    /// Zero-based position among the typed parameters. A `self` receiver is not counted.
    pub index: usize,
    /// The bound identifier, or the pattern text for destructuring parameters.
    pub binding: &'static str,
    pub metadata: ColumnMetadata,
}

impl ParameterColumn {
    pub const fn new(
        method: &'static str,
        index: usize,
        binding: &'static str,
        metadata: ColumnMetadata,
    ) -> Self {
        Self { method, index, binding, metadata }
    }
}
