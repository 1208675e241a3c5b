//! Attribute parsing for `#[env ...]` annotations.
//!
//! Field directives are kept as raw strings here; `envloader` parses them at
//! load time so the directive grammar lives in one place.

use syn::{DeriveInput, Expr, ExprLit, Field, Lit, Meta};

const FIELD_USAGE: &str = "expected #[env = \"<key>[,optional][,default=<literal>]\"]";

/// Parsed `#[env = "..."]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw directive string, if the field is annotated.
    pub tag: Option<String>,
}

impl FieldAttrs {
    /// Extract the `#[env = "..."]` directive from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            let Meta::NameValue(meta) = &attr.meta else {
                return Err(syn::Error::new_spanned(attr, FIELD_USAGE));
            };
            let Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) = &meta.value
            else {
                return Err(syn::Error::new_spanned(&meta.value, FIELD_USAGE));
            };
            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[env] attribute"));
            }
            attrs.tag = Some(s.value());
        }

        Ok(attrs)
    }
}

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every lookup key.
    pub prefix: String,
}

impl StructAttrs {
    /// Extract `#[env(prefix = "...")]` from the derive input.
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        attrs.prefix = s.value();
                        return Ok(());
                    }
                    return Err(meta.error("prefix must be a string literal"));
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(attrs)
    }
}
