//! Macros for lazyeq structural equality.

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Attribute, DeriveInput, Error, Expr, Lit, Meta, Token};

mod structural_equatable;

/// Derives `StructuralEquatable` from the type's declaration.
///
/// Member rules, all through `#[equality(...)]`:
/// - `pub` fields are properties and take part unless marked `exclude`;
/// - other fields take part only when marked `include`;
/// - `skip` leaves a field out of the description entirely.
///
/// Type options: `equatable`, `depends_on_engine`, `not_sequence`,
/// `sequence = "E"`, `debug`, `opaque = "reason"`.
#[proc_macro_derive(StructuralEquatable, attributes(equality))]
pub fn derive_structural_equatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    structural_equatable::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Collects the options of every `#[equality(...)]` attribute in order.
fn equality_options(attrs: &[Attribute]) -> Result<Vec<Meta>, Error> {
    let mut options = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("equality")) {
        let nested =
            attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        options.extend(nested);
    }
    Ok(options)
}

/// Reads `key` or `key = true|false`.
fn parse_option_bool(meta: &Meta, key: &str) -> Result<Option<bool>, Error> {
    match meta {
        Meta::Path(path) if path.is_ident(key) => Ok(Some(true)),
        Meta::NameValue(nv) if nv.path.is_ident(key) => {
            if let Expr::Lit(expr_lit) = &nv.value {
                if let Lit::Bool(lit_bool) = &expr_lit.lit {
                    return Ok(Some(lit_bool.value()));
                }
            }
            Err(Error::new_spanned(&nv.value, format!("`{key}` expects a bool")))
        }
        _ => Ok(None),
    }
}

/// Reads `key = "value"`.
fn parse_option_string(meta: &Meta, key: &str) -> Result<Option<String>, Error> {
    match meta {
        Meta::NameValue(nv) if nv.path.is_ident(key) => {
            if let Expr::Lit(expr_lit) = &nv.value {
                if let Lit::Str(lit_str) = &expr_lit.lit {
                    return Ok(Some(lit_str.value()));
                }
            }
            Err(Error::new_spanned(
                &nv.value,
                format!("`{key}` expects a string literal"),
            ))
        }
        Meta::Path(path) if path.is_ident(key) => Err(Error::new_spanned(
            path,
            format!("`{key}` expects a value: {key} = \"...\""),
        )),
        _ => Ok(None),
    }
}
