use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, ext::IdentExt};

use crate::attr::{find_column, reject_column};

/// Expands the `#[derive(ColumnFields)]` macro.
///
/// Every field carrying `#[column(...)]` becomes a `FieldColumn` entry of the
/// generated `impl column_meta::ColumnFields`. Unannotated fields are left out so
/// the runtime lookup can report them as absent.
pub fn expand(ast: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &ast.ident;

    reject_column(&ast.attrs, "a type")?;
    for param in &ast.generics.params {
        reject_column(param_attrs(param), "a generic parameter")?;
    }

    let fields = match &ast.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            for variant in &data.variants {
                reject_column(&variant.attrs, "an enum variant")?;
            }
            return Err(syn::Error::new_spanned(
                struct_name,
                "ColumnFields can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "ColumnFields can only be derived for structs",
            ));
        }
    };

    let mut column_defs = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(name) = find_column(&field.attrs)? else {
            continue;
        };

        // Tuple fields are identified by position
        let field_name = match &field.ident {
            Some(ident) => ident.unraw().to_string(),
            None => index.to_string(),
        };

        column_defs.push(quote! {
            ::column_meta::FieldColumn::new(
                #field_name,
                ::column_meta::ColumnMetadata::new(#name),
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::column_meta::ColumnFields for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::column_meta::FieldColumn] = &[#(#column_defs),*];
        }
    })
}

pub(crate) fn param_attrs(param: &syn::GenericParam) -> &[syn::Attribute] {
    match param {
        syn::GenericParam::Type(ty) => &ty.attrs,
        syn::GenericParam::Lifetime(lifetime) => &lifetime.attrs,
        syn::GenericParam::Const(constant) => &constant.attrs,
    }
}
