//! # Column Methods Attribute
//!
//! This module implements the `#[column_methods]` attribute for inherent `impl` blocks.
//! It collects `#[column(...)]` declarations placed on associated functions and on
//! their parameters, strips them from the emitted code, and generates an
//! `impl column_meta::ColumnMethods` holding the resulting tables.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{FnArg, ImplItem, Item, Pat, ext::IdentExt};

use crate::attr::{find_column, reject_column, strip_column};
use crate::derive_fields::param_attrs;

/// Expands the `#[column_methods]` attribute.
///
/// The impl block is re-emitted unchanged apart from the removed `#[column]`
/// attributes, followed by the generated `ColumnMethods` implementation.
pub fn expand(item: Item) -> syn::Result<TokenStream> {
    let mut item_impl = match item {
        Item::Impl(item_impl) => item_impl,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[column_methods] can only be applied to an inherent impl block",
            ));
        }
    };

    // Metadata is not inherited through trait implementations
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[column_methods] cannot be applied to a trait impl; annotate the inherent impl block instead",
        ));
    }

    reject_column(&item_impl.attrs, "an impl block")?;
    for param in &item_impl.generics.params {
        reject_column(param_attrs(param), "a generic parameter")?;
    }

    let mut method_defs = Vec::new();
    let mut parameter_defs = Vec::new();

    for impl_item in &mut item_impl.items {
        match impl_item {
            ImplItem::Fn(method) => {
                let method_name = method.sig.ident.unraw().to_string();

                if let Some(name) = find_column(&method.attrs)? {
                    method_defs.push(quote! {
                        ::column_meta::MethodColumn::new(
                            #method_name,
                            ::column_meta::ColumnMetadata::new(#name),
                        )
                    });
                }
                strip_column(&mut method.attrs);

                for param in &method.sig.generics.params {
                    reject_column(param_attrs(param), "a generic parameter")?;
                }

                let mut index = 0usize;
                for input in &mut method.sig.inputs {
                    match input {
                        FnArg::Receiver(receiver) => {
                            reject_column(&receiver.attrs, "a `self` receiver")?;
                        }
                        FnArg::Typed(pat_type) => {
                            if let Some(name) = find_column(&pat_type.attrs)? {
                                let binding = binding_name(&pat_type.pat);
                                parameter_defs.push(quote! {
                                    ::column_meta::ParameterColumn::new(
                                        #method_name,
                                        #index,
                                        #binding,
                                        ::column_meta::ColumnMetadata::new(#name),
                                    )
                                });
                            }
                            strip_column(&mut pat_type.attrs);
                            index += 1;
                        }
                    }
                }
            }
            ImplItem::Const(constant) => reject_column(&constant.attrs, "an associated constant")?,
            ImplItem::Type(ty) => reject_column(&ty.attrs, "an associated type")?,
            ImplItem::Macro(mac) => reject_column(&mac.attrs, "a macro invocation")?,
            _ => {}
        }
    }

    let self_ty = &item_impl.self_ty;
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();

    Ok(quote! {
        #item_impl

        impl #impl_generics ::column_meta::ColumnMethods for #self_ty #where_clause {
            const METHODS: &'static [::column_meta::MethodColumn] = &[#(#method_defs),*];
            const PARAMETERS: &'static [::column_meta::ParameterColumn] = &[#(#parameter_defs),*];
        }
    })
}

/// Returns the identifier bound by a parameter pattern, or its source text for
/// destructuring patterns.
fn binding_name(pat: &Pat) -> String {
    match pat {
        Pat::Ident(pat_ident) => pat_ident.ident.unraw().to_string(),
        other => other.to_token_stream().to_string(),
    }
}
