use crate::metadata::{ColumnMetadata, FieldColumn, MethodColumn, ParameterColumn};

/// Column declarations on the fields of a struct.
///
/// This trait is typically implemented automatically via the `#[derive(ColumnFields)]` macro.
/// Only fields annotated with `#[column]` are listed in [`ColumnFields::FIELDS`].
///
/// # Example
///
/// ```rust
/// use column_meta::ColumnFields;
///
/// #[derive(ColumnFields)]
/// struct Employee {
///     #[column("emp_id")]
///     id: i64,
///     #[column]
///     full_name: String,
///     salary: f64,
/// }
///
/// assert_eq!(Employee::field_column("id").map(|c| c.name()), Some("emp_id"));
/// assert_eq!(Employee::field_column("full_name").map(|c| c.name()), Some(""));
/// assert_eq!(Employee::field_column("salary"), None);
/// ```
pub trait ColumnFields {
    /// Every annotated field, in declaration order.
    const FIELDS: &'static [FieldColumn];

    /// Returns the metadata declared on `field`, or `None` if it carries none.
    fn field_column(field: &str) -> Option<&'static ColumnMetadata> {
        Self::FIELDS
            .iter()
            .find(|column| column.field == field)
            .map(|column| &column.metadata)
    }
}

/// Column declarations on the associated functions of a type and on their parameters.
///
/// This trait is typically implemented automatically via the `#[column_methods]` attribute.
pub trait ColumnMethods {
    /// Every annotated method, in declaration order.
    const METHODS: &'static [MethodColumn];

    /// Every annotated parameter, in declaration order.
    const PARAMETERS: &'static [ParameterColumn];

    /// Returns the metadata declared on `method`, or `None` if it carries none.
    fn method_column(method: &str) -> Option<&'static ColumnMetadata> {
        Self::METHODS
            .iter()
            .find(|column| column.method == method)
            .map(|column| &column.metadata)
    }

    /// Returns the metadata declared on the `index`-th typed parameter of `method`.
    fn parameter_column(method: &str, index: usize) -> Option<&'static ColumnMetadata> {
        Self::PARAMETERS
            .iter()
            .find(|column| column.method == method && column.index == index)
            .map(|column| &column.metadata)
    }

    /// Returns the metadata declared on the parameter of `method` bound to `binding`.
    fn parameter_column_by_binding(method: &str, binding: &str) -> Option<&'static ColumnMetadata> {
        Self::PARAMETERS
            .iter()
            .find(|column| column.method == method && column.binding == binding)
            .map(|column| &column.metadata)
    }

    /// Iterates over the annotated parameters of `method`.
    fn parameter_columns(method: &str) -> impl Iterator<Item = &'static ParameterColumn> {
        Self::PARAMETERS
            .iter()
            .filter(move |column| column.method == method)
    }
}
