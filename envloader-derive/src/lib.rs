//! Derive macro implementation for envloader

use proc_macro::TokenStream;
use proc_macro2::TokenTree;
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Ident, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `EnvLoad` derive macro
///
/// Implements `envloader::EnvLoad`, binding every named field in declaration
/// order. Each field type must implement `envloader::FieldValue`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to every lookup key
///
/// **Field-level**:
/// - `#[env = "<key>[,optional][,default=<literal>]"]`: Lookup key and directives.
///   Without it the key is the field name.
///
/// # Example
///
/// See the `envloader` crate documentation for usage examples.
#[proc_macro_derive(EnvLoad, attributes(env))]
pub fn derive_env_load(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Whether `ty` mentions any of the struct's type parameters
fn mentions_type_param(ty: &Type, params: &HashSet<Ident>) -> bool {
    fn walk(tokens: proc_macro2::TokenStream, params: &HashSet<Ident>) -> bool {
        tokens.into_iter().any(|tt| match tt {
            TokenTree::Ident(ident) => params.contains(&ident),
            TokenTree::Group(group) => walk(group.stream(), params),
            _ => false,
        })
    }
    walk(ty.to_token_stream(), params)
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let type_params: HashSet<Ident> = input
        .generics
        .type_params()
        .map(|p| p.ident.clone())
        .collect();
    let mut generics = input.generics.clone();

    let prefix = StructAttrs::from_input(input)?.prefix;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvLoad only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvLoad only supports structs",
            ));
        }
    };

    let mut binds = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::from_field(field)?;

        // Generic field types need an explicit bound on the impl
        let field_type = &field.ty;
        if mentions_type_param(field_type, &type_params) {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#field_type: ::envloader::FieldValue));
        }

        let field_name = ident.unraw().to_string();
        let mut decl = quote! { ::envloader::FieldDecl::new(#field_name) };
        if let Some(tag) = attrs.tag {
            decl = quote! { #decl.tag(#tag) };
        }
        if !prefix.is_empty() {
            decl = quote! { #decl.prefix(#prefix) };
        }

        binds.push(quote! {
            __binder.bind(#decl, &mut self.#ident)?;
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::envloader::EnvLoad for #struct_name #ty_generics #where_clause {
            fn bind_fields(
                &mut self,
                __binder: &mut ::envloader::Binder<'_>,
            ) -> ::core::result::Result<(), ::envloader::EnvError> {
                #(#binds)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
