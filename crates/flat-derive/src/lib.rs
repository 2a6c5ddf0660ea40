//! Derive macros for flatcsv.
//!
//! - `#[derive(Record)]` generates the member table of a struct with named fields.
//! - `#[derive(FlatEnum)]` makes a fieldless enum usable as a record member.
//!
//! Generated code refers to `::flat_core` unless re-rooted with
//! `#[record(crate = "path::to::core")]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, LitStr, Path, Type};

/// A getter/setter pair declared with `#[record(property(...))]`.
struct Property {
    name: LitStr,
    ty: Type,
    get: Ident,
    set: Ident,
}

/// Container-level `#[record(...)]` options.
struct ContainerAttrs {
    krate: Path,
    properties: Vec<Property>,
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut krate: Path = syn::parse_quote!(::flat_core);
    let mut properties = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = lit.parse()?;
                Ok(())
            } else if meta.path.is_ident("property") {
                let mut name = None;
                let mut ty = None;
                let mut get = None;
                let mut set = None;
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("name") {
                        name = Some(inner.value()?.parse::<LitStr>()?);
                    } else if inner.path.is_ident("ty") {
                        ty = Some(inner.value()?.parse::<Type>()?);
                    } else if inner.path.is_ident("get") {
                        get = Some(inner.value()?.parse::<Ident>()?);
                    } else if inner.path.is_ident("set") {
                        set = Some(inner.value()?.parse::<Ident>()?);
                    } else {
                        return Err(inner.error("expected `name`, `ty`, `get` or `set`"));
                    }
                    Ok(())
                })?;
                properties.push(Property {
                    name: name.ok_or_else(|| meta.error("property requires `name`"))?,
                    ty: ty.ok_or_else(|| meta.error("property requires `ty`"))?,
                    get: get.ok_or_else(|| meta.error("property requires `get`"))?,
                    set: set.ok_or_else(|| meta.error("property requires `set`"))?,
                });
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute"))
            }
        })?;
    }

    Ok(ContainerAttrs { krate, properties })
}

/// Member name: `#[record(rename = "...")]` or the unraw identifier.
fn member_name(ident: &Ident, attrs: &[Attribute]) -> syn::Result<String> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                rename = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("expected `rename`"))
            }
        })?;
    }
    Ok(rename.unwrap_or_else(|| ident.unraw().to_string()))
}

#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let ContainerAttrs { krate, properties } = parse_container_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_members = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let member = member_name(ident, &field.attrs)?;
        field_members.push(quote! {
            #krate::MemberDescriptor::field(
                #member,
                <#ty as #krate::FlatField>::value_kind(),
                |record: &Self| #krate::FlatField::to_field_value(&record.#ident),
                |record: &mut Self, value: #krate::FieldValue| {
                    record.#ident = <#ty as #krate::FlatField>::from_field_value(value)?;
                    ::std::result::Result::Ok(())
                },
            )
        });
    }

    let property_members = properties.iter().map(|property| {
        let Property { name, ty, get, set } = property;
        quote! {
            #krate::MemberDescriptor::property(
                #name,
                <#ty as #krate::FlatField>::value_kind(),
                |record: &Self| {
                    let value: #ty = Self::#get(record);
                    #krate::FlatField::to_field_value(&value)
                },
                |record: &mut Self, value: #krate::FieldValue| {
                    let value = <#ty as #krate::FlatField>::from_field_value(value)?;
                    Self::#set(record, value);
                    ::std::result::Result::Ok(())
                },
            )
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Record for #name #ty_generics #where_clause {
            fn describe_members() -> ::std::vec::Vec<#krate::MemberDescriptor<Self>> {
                ::std::vec![
                    #(#field_members,)*
                    #(#property_members,)*
                ]
            }
        }
    })
}

#[proc_macro_derive(FlatEnum, attributes(record))]
pub fn derive_flat_enum(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand_flat_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_flat_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();
    let ContainerAttrs { krate, properties } = parse_container_attrs(&input.attrs)?;
    if !properties.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "properties are not supported on FlatEnum",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "FlatEnum can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "FlatEnum requires at least one variant",
        ));
    }

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "FlatEnum variants cannot carry data",
            ));
        }
        names.push(member_name(&variant.ident, &variant.attrs)?);
        idents.push(&variant.ident);
    }
    let indices = 0..idents.len();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::FlatField for #name #ty_generics #where_clause {
            fn value_kind() -> #krate::ValueKind {
                #krate::ValueKind::Enum {
                    name: #name_str,
                    variants: &[#(#names),*],
                }
            }

            fn to_field_value(&self) -> #krate::FieldValue {
                match self {
                    #(Self::#idents => #krate::FieldValue::Enum(#names),)*
                }
            }

            fn from_field_value(
                value: #krate::FieldValue,
            ) -> ::std::result::Result<Self, #krate::ValueError> {
                const VARIANTS: &[&str] = &[#(#names),*];
                match #krate::values::enum_variant_index(value, #name_str, VARIANTS)? {
                    #(#indices => ::std::result::Result::Ok(Self::#idents),)*
                    index => ::std::result::Result::Err(#krate::ValueError::conversion(
                        index.to_string(),
                        #name_str,
                        "variant index out of range",
                    )),
                }
            }
        }
    })
}
