use fxhash::FxHashSet;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::{Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, LitStr, Meta, UnOp};

/// Name of the sentinel entry appended by `Enumeration::constants(true)`.
const DEFAULT_KEY: &str = "__default";

/// Traits whose semantics come from the constant value, so users may not derive them.
const GENERATED_TRAITS: [&str; 4] = ["PartialEq", "Eq", "Hash", "Default"];

const UNSUPPORTED_VALUE: &str =
    "enumeration values must be string, integer or boolean literals";

enum ConstantValue {
    Str(LitStr),
    Int(i64),
    Bool(bool),
}

struct ConstantMeta {
    ident: Ident,
    name: LitStr,
    value: ConstantValue,
    is_default: bool,
}

pub fn expand(args: TokenStream, input: DeriveInput) -> TokenStream {
    try_expand(args, input).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(args: TokenStream, mut input: DeriveInput) -> syn::Result<TokenStream> {
    let type_name = parse_name_argument(args, &input.ident)?;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "enumeration does not support generic parameters",
        ));
    }

    let derived_traits = derived_trait_names(&input);
    if let Some(name) = GENERATED_TRAITS.iter().find(|name| derived_traits.contains(**name)) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!("`{name}` is generated by enumeration from the constant value; remove it from derive"),
        ));
    }

    let ident = input.ident.clone();
    let Data::Enum(data) = &mut input.data else {
        return Err(syn::Error::new_spanned(&ident, "enumeration can only be applied to enums"));
    };

    let constants = collect_constants(&ident, data)?;
    let default_index = validate_constants(&ident, &constants)?;

    let mut derive_tokens = Vec::new();
    if !derived_traits.contains("Debug") {
        derive_tokens.push(quote! { ::core::fmt::Debug });
    }
    if !derived_traits.contains("Clone") {
        derive_tokens.push(quote! { ::core::clone::Clone });
    }
    if !derived_traits.contains("Copy") {
        derive_tokens.push(quote! { ::core::marker::Copy });
    }
    let extra_derives = if derive_tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derive_tokens),*)] }
    };

    let idents: Vec<&Ident> = constants.iter().map(|c| &c.ident).collect();
    let ordinals: Vec<Literal> = (0..constants.len()).map(Literal::usize_unsuffixed).collect();
    let entries = constants.iter().map(|c| {
        let name = &c.name;
        let value = value_tokens(&c.value);
        quote! { ::enumbase::Constant::new(#name, #value) }
    });
    let default_ident = &constants[default_index].ident;
    let default_ordinal = Literal::usize_unsuffixed(default_index);
    let len = Literal::usize_unsuffixed(constants.len());

    Ok(quote! {
        #extra_derives
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #input

        #[automatically_derived]
        impl ::enumbase::Enumeration for #ident {
            fn definition() -> &'static ::enumbase::EnumDefinition {
                static CONSTANTS: [::enumbase::Constant; #len] = [#(#entries),*];
                static DEFINITION: ::enumbase::EnumDefinition =
                    ::enumbase::EnumDefinition::from_static(#type_name, &CONSTANTS, #default_ordinal);
                &DEFINITION
            }

            #[inline]
            fn ordinal(&self) -> usize {
                match self {
                    #(Self::#idents => #ordinals,)*
                }
            }

            #[inline]
            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq for #ident {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::enumbase::Enumeration::value(self) == ::enumbase::Enumeration::value(other)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Eq for #ident {}

        #[automatically_derived]
        impl ::core::hash::Hash for #ident {
            #[inline]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&::enumbase::Enumeration::value(self), state);
            }
        }

        #[automatically_derived]
        impl ::core::default::Default for #ident {
            #[inline]
            fn default() -> Self {
                Self::#default_ident
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&::enumbase::Enumeration::value(self), f)
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #ident {
            type Err = ::enumbase::EnumError;

            #[inline]
            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::enumbase::Enumeration>::from_name(s)
            }
        }

        ::enumbase::__impl_serde!(#ident);
    })
}

fn parse_name_argument(args: TokenStream, ident: &Ident) -> syn::Result<LitStr> {
    let mut name: Option<LitStr> = None;

    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    for meta in parser.parse2(args)? {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `name = \"...\"`"));
        };

        if !name_value.path.is_ident("name") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Only `name = \"...\"` is supported",
            ));
        }

        if name.is_some() {
            return Err(syn::Error::new_spanned(name_value, "Duplicate `name = \"...\"` argument"));
        }

        let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = &name_value.value else {
            return Err(syn::Error::new_spanned(
                &name_value.value,
                "Expected string literal for `name = \"...\"`",
            ));
        };
        if lit.value().trim().is_empty() {
            return Err(syn::Error::new_spanned(lit, "enumeration name cannot be empty"));
        }

        name = Some(lit.clone());
    }

    Ok(name.unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span())))
}

/// Strips values and `#[default]` markers from the variants and records them.
fn collect_constants(ident: &Ident, data: &mut DataEnum) -> syn::Result<Vec<ConstantMeta>> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "enumeration requires at least one constant",
        ));
    }

    let mut constants = Vec::with_capacity(data.variants.len());
    for variant in &mut data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "enumeration constants cannot carry fields",
            ));
        }
        if let Some(attr) = variant.attrs.iter().find(|attr| attr.path().is_ident("cfg")) {
            return Err(syn::Error::new_spanned(
                attr,
                "enumeration constants cannot be conditionally compiled",
            ));
        }

        let Some((_, expr)) = variant.discriminant.take() else {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("constant `{}` needs a value, e.g. `{} = \"...\"`", variant.ident, variant.ident),
            ));
        };
        let value = parse_value(&expr)?;

        let before = variant.attrs.len();
        variant.attrs.retain(|attr| !attr.path().is_ident("default"));
        let is_default = variant.attrs.len() != before;

        constants.push(ConstantMeta {
            name: LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span()),
            ident: variant.ident.clone(),
            value,
            is_default,
        });
    }

    Ok(constants)
}

fn parse_value(expr: &Expr) -> syn::Result<ConstantValue> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(lit) => Ok(ConstantValue::Str(lit.clone())),
            Lit::Int(lit) => Ok(ConstantValue::Int(lit.base10_parse()?)),
            Lit::Bool(lit) => Ok(ConstantValue::Bool(lit.value)),
            other => Err(syn::Error::new_spanned(other, UNSUPPORTED_VALUE)),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            let Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) = &*unary.expr else {
                return Err(syn::Error::new_spanned(expr, UNSUPPORTED_VALUE));
            };
            format!("-{}", lit.base10_digits())
                .parse::<i64>()
                .map(ConstantValue::Int)
                .map_err(|e| syn::Error::new_spanned(expr, e))
        },
        other => Err(syn::Error::new_spanned(other, UNSUPPORTED_VALUE)),
    }
}

/// Returns the index of the default constant.
fn validate_constants(ident: &Ident, constants: &[ConstantMeta]) -> syn::Result<usize> {
    let mut seen = FxHashSet::default();
    for constant in constants {
        let name = constant.name.value();
        if name.eq_ignore_ascii_case(DEFAULT_KEY) {
            return Err(syn::Error::new_spanned(
                &constant.ident,
                format!("`{DEFAULT_KEY}` is reserved for the default entry"),
            ));
        }
        if !seen.insert(name.to_ascii_uppercase()) {
            return Err(syn::Error::new_spanned(
                &constant.ident,
                format!("duplicate constant `{name}` (names are case-insensitive)"),
            ));
        }
    }

    let mut defaults = constants.iter().enumerate().filter(|(_, c)| c.is_default);
    let Some((index, _)) = defaults.next() else {
        return Err(syn::Error::new_spanned(
            ident,
            "enumeration requires one constant marked `#[default]`",
        ));
    };
    if let Some((_, extra)) = defaults.next() {
        return Err(syn::Error::new_spanned(
            &extra.ident,
            "only one constant can be marked `#[default]`",
        ));
    }

    Ok(index)
}

fn value_tokens(value: &ConstantValue) -> TokenStream {
    match value {
        ConstantValue::Str(lit) => quote! { ::enumbase::Value::Str(#lit) },
        ConstantValue::Int(int) => quote! { ::enumbase::Value::Int(#int) },
        ConstantValue::Bool(flag) => quote! { ::enumbase::Value::Bool(#flag) },
    }
}

fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}
