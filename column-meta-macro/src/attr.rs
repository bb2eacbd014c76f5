//! # Column Attribute Parsing
//!
//! Shared parsing and placement checks for the `#[column(...)]` attribute,
//! used by both the `ColumnFields` derive and the `#[column_methods]` attribute.

use syn::{Attribute, LitStr, Meta};

/// Name of the helper attribute recognised by both macros.
pub const COLUMN: &str = "column";

const USAGE: &str = "expected #[column], #[column(\"name\")] or #[column(name = \"name\")]";

/// Returns `true` if the attribute is a `#[column]` attribute.
pub fn is_column(attr: &Attribute) -> bool {
    attr.path().is_ident(COLUMN)
}

/// Finds the `#[column]` attribute among `attrs` and returns its declared name.
///
/// Returns:
/// * `Ok(None)` when the element carries no `#[column]` attribute.
/// * `Ok(Some(""))` for a bare `#[column]`, which defers to the naming convention.
/// * `Err` when the attribute is malformed or appears more than once.
pub fn find_column(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| is_column(attr)) {
        let name = parse_column(attr)?;
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[column] attribute; an element carries at most one column name",
            ));
        }
        found = Some(name);
    }

    Ok(found)
}

/// Removes every `#[column]` attribute from `attrs`.
pub fn strip_column(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !is_column(attr));
}

/// Fails if any `#[column]` attribute is present on an element that cannot carry one.
///
/// `target` describes the element in the error message, e.g. `"an enum variant"`.
pub fn reject_column(attrs: &[Attribute], target: &str) -> syn::Result<()> {
    match attrs.iter().find(|attr| is_column(attr)) {
        Some(attr) => Err(invalid_target(attr, target)),
        None => Ok(()),
    }
}

fn invalid_target(attr: &Attribute, target: &str) -> syn::Error {
    syn::Error::new_spanned(
        attr,
        format!(
            "#[column] cannot be attached to {}; allowed targets are fields, methods and parameters",
            target
        ),
    )
}

fn parse_column(attr: &Attribute) -> syn::Result<String> {
    let list = match &attr.meta {
        Meta::Path(_) => return Ok(String::new()),
        Meta::List(list) => list,
        Meta::NameValue(name_value) => return Err(syn::Error::new_spanned(name_value, USAGE)),
    };

    if list.tokens.is_empty() {
        return Ok(String::new());
    }

    // #[column("emp_id")]
    if let Ok(lit) = syn::parse2::<LitStr>(list.tokens.clone()) {
        return Ok(lit.value());
    }

    // #[column(name = "emp_id")]
    let mut name: Option<String> = None;
    list.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            if name.is_some() {
                return Err(meta.error("duplicate `name` in #[column]"));
            }
            let value: LitStr = meta.value()?.parse()?;
            name = Some(value.value());
            Ok(())
        } else {
            Err(meta.error(USAGE))
        }
    })?;

    Ok(name.unwrap_or_default())
}
