//! #[derive(StructuralEquatable)] implementation

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse_quote, Data, DataEnum, DeriveInput, Error, Field, Fields, Generics, Index, Meta, Type,
    Visibility,
};

use crate::{equality_options, has_attribute, parse_option_bool, parse_option_string};

#[derive(Default)]
struct TypeOptions {
    equatable: bool,
    depends_on_engine: bool,
    not_sequence: bool,
    sequence: Option<Type>,
    debug: bool,
    opaque: Option<String>,
}

impl TypeOptions {
    fn parse(input: &DeriveInput) -> Result<Self, Error> {
        let mut options = TypeOptions::default();
        for meta in equality_options(&input.attrs)? {
            if let Some(value) = parse_option_bool(&meta, "equatable")? {
                options.equatable = value;
            } else if let Some(value) = parse_option_bool(&meta, "depends_on_engine")? {
                options.depends_on_engine = value;
            } else if let Some(value) = parse_option_bool(&meta, "not_sequence")? {
                options.not_sequence = value;
            } else if let Some(value) = parse_option_bool(&meta, "debug")? {
                options.debug = value;
            } else if let Some(item) = parse_option_string(&meta, "sequence")? {
                options.sequence = Some(syn::parse_str(&item).map_err(|e| {
                    Error::new_spanned(&meta, format!("invalid element type: {e}"))
                })?);
            } else if let Some(reason) = parse_option_string(&meta, "opaque")? {
                options.opaque = Some(reason);
            } else {
                return Err(unknown_option(&meta, TYPE_OPTIONS));
            }
        }

        if options.depends_on_engine && !options.equatable {
            return Err(Error::new_spanned(
                &input.ident,
                "`depends_on_engine` requires `equatable`: \
                 a type can only depend on the engine for its own equality",
            ));
        }
        Ok(options)
    }

    fn declarations(&self) -> Vec<TokenStream> {
        let mut declarations = Vec::new();
        if self.equatable {
            declarations.push(quote! { .with_equatable() });
        }
        if self.depends_on_engine {
            declarations.push(quote! { .with_engine_dependency() });
        }
        if let Some(item) = &self.sequence {
            declarations.push(quote! { .with_sequence::<#item>() });
        }
        if self.not_sequence {
            declarations.push(quote! { .without_sequence() });
        }
        if self.debug {
            declarations.push(quote! { .with_operand_debug() });
        }
        if let Some(reason) = &self.opaque {
            declarations.push(quote! { .opaque(#reason) });
        }
        declarations
    }
}

#[derive(Default)]
struct MemberOptions {
    include: bool,
    exclude: bool,
    skip: bool,
}

impl MemberOptions {
    fn parse(field: &Field) -> Result<Self, Error> {
        let mut options = MemberOptions::default();
        for meta in equality_options(&field.attrs)? {
            if let Some(value) = parse_option_bool(&meta, "include")? {
                options.include = value;
            } else if let Some(value) = parse_option_bool(&meta, "exclude")? {
                options.exclude = value;
            } else if let Some(value) = parse_option_bool(&meta, "skip")? {
                options.skip = value;
            } else {
                return Err(unknown_option(&meta, MEMBER_OPTIONS));
            }
        }
        if options.include && options.exclude {
            return Err(Error::new_spanned(
                field,
                "a member cannot be both `include` and `exclude`",
            ));
        }
        Ok(options)
    }

    fn inclusion(&self) -> TokenStream {
        if self.include {
            quote! { ::lazyeq::__internal::Inclusion::Include }
        } else if self.exclude {
            quote! { ::lazyeq::__internal::Inclusion::Exclude }
        } else {
            quote! { ::lazyeq::__internal::Inclusion::Default }
        }
    }
}

const TYPE_OPTIONS: &str =
    "equatable, depends_on_engine, not_sequence, sequence = \"..\", debug, opaque = \"..\"";
const MEMBER_OPTIONS: &str = "include, exclude, skip";

fn unknown_option(meta: &Meta, expected: &str) -> Error {
    Error::new_spanned(
        meta,
        format!("unknown equality option, expected one of: {expected}"),
    )
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;
    let options = TypeOptions::parse(&input)?;
    let generics = with_equatable_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_name = if input.generics.params.is_empty() {
        let name_str = name.to_string();
        quote! { #name_str }
    } else {
        quote! { ::std::any::type_name::<Self>() }
    };

    let shape = match &input.data {
        Data::Struct(data) => struct_members(&data.fields)?,
        Data::Enum(data) => enum_shape(&input, data, &options)?,
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input,
                "#[derive(StructuralEquatable)] does not support unions",
            ))
        }
    };
    let declarations = options.declarations();

    let expanded = quote! {
        impl #impl_generics ::lazyeq::__internal::StructuralEquatable for #name #ty_generics #where_clause {
            fn describe() -> ::lazyeq::__internal::TypeDescriptor<Self> {
                ::lazyeq::__internal::TypeDescriptor::<Self>::new(#type_name)
                    #( #shape )*
                    #( #declarations )*
            }
        }
    };

    Ok(expanded)
}

/// Adds `StructuralEquatable` to every type parameter.
fn with_equatable_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote! { #ident: ::lazyeq::__internal::StructuralEquatable });
    }
    generics
}

fn struct_members(fields: &Fields) -> Result<Vec<TokenStream>, Error> {
    let mut members = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let options = MemberOptions::parse(field)?;
        if options.skip {
            continue;
        }

        let (name, access) = match &field.ident {
            Some(ident) => (ident.to_string(), ident.to_token_stream()),
            None => (index.to_string(), Index::from(index).to_token_stream()),
        };
        let ty = &field.ty;
        let inclusion = options.inclusion();

        let declaration = if matches!(field.vis, Visibility::Public(_)) {
            quote! { .with_property::<#ty>(#name, |v| &v.#access, #inclusion) }
        } else {
            quote! { .with_field::<#ty>(#name, |v| &v.#access, #inclusion) }
        };
        members.push(declaration);
    }
    Ok(members)
}

/// Fieldless enums are primitive; enums carrying data must bring their own
/// equality.
fn enum_shape(
    input: &DeriveInput,
    data: &DataEnum,
    options: &TypeOptions,
) -> Result<Vec<TokenStream>, Error> {
    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| has_attribute(&variant.attrs, "equality"))
    {
        return Err(Error::new_spanned(
            variant,
            "#[equality] is not supported on enum variants",
        ));
    }
    if options.depends_on_engine {
        return Err(Error::new_spanned(
            &input.ident,
            "`depends_on_engine` is not supported on enums",
        ));
    }

    let fieldless = data
        .variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit));
    if fieldless {
        return Ok(vec![quote! { .primitive() }]);
    }
    if options.equatable {
        return Ok(Vec::new());
    }
    Err(Error::new_spanned(
        &input.ident,
        "enums with data need `#[equality(equatable)]` and a `PartialEq` implementation",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> String {
        expand_derive(input).unwrap().to_string()
    }

    #[test]
    fn test_descriptor_is_typed_before_member_accessors() {
        let expanded = expand(parse_quote! {
            struct Reading {
                pub sensor: u32,
                raw: u64,
            }
        });
        let constructor = expanded
            .find("TypeDescriptor :: < Self > :: new")
            .expect("constructor names Self");
        let first_member = expanded.find("with_property").unwrap();
        assert!(constructor < first_member);
        assert!(expanded.contains("with_field :: < u64 >"));
    }

    #[test]
    fn test_tuple_fields_use_positions() {
        let expanded = expand(parse_quote! {
            struct Pair(pub i32, u8);
        });
        assert!(expanded.contains("& v . 0"));
        assert!(expanded.contains("& v . 1"));
    }

    #[test]
    fn test_data_enum_without_equatable_is_rejected() {
        let err = expand_derive(parse_quote! {
            enum Shape {
                Circle(f64),
            }
        })
        .err()
        .unwrap();
        assert!(err.to_string().contains("equatable"));
    }
}
