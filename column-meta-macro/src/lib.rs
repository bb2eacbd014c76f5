//! Procedural macros for `column-meta`.
//!
//! These macros are re-exported by the `column-meta` crate and should be used
//! through it, since the generated code refers to `::column_meta`.

use proc_macro::TokenStream;
use syn::{DeriveInput, Item, parse_macro_input};

mod attr;
mod column_methods;
mod derive_fields;

/// Derives `column_meta::ColumnFields` for a struct.
///
/// Fields opt in with the `#[column]` helper attribute:
///
/// | Form | Declared name |
/// |------|---------------|
/// | `#[column]` | `""` (the mapper picks a conventional name) |
/// | `#[column("emp_id")]` | `"emp_id"` |
/// | `#[column(name = "emp_id")]` | `"emp_id"` |
///
/// Placing `#[column]` on the struct itself, on enum variants or on generic
/// parameters is a compile error.
///
/// # Example
///
/// ```rust,ignore
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
/// assert_eq!(Employee::field_column("salary"), None);
/// ```
#[proc_macro_derive(ColumnFields, attributes(column))]
pub fn column_fields_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    derive_fields::expand(ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `column_meta::ColumnMethods` for the type of an inherent impl block.
///
/// `#[column]` may be placed on associated functions (accessors, constructors,
/// any method) and on their typed parameters. The attributes are removed from
/// the emitted impl block. Placing `#[column]` on a `self` receiver, an
/// associated constant or an associated type is a compile error, and so is
/// applying `#[column_methods]` to a trait impl.
///
/// # Example
///
/// ```rust,ignore
/// use column_meta::{ColumnMethods, column_methods};
///
/// #[column_methods]
/// impl Employee {
///     pub fn new(#[column("emp_id")] id: i64, #[column] full_name: String) -> Self {
///         Self { id, full_name }
///     }
///
///     #[column("emp_id")]
///     pub fn id(&self) -> i64 {
///         self.id
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn column_methods(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "#[column_methods] takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(input as Item);
    column_methods::expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
