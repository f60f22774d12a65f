//! Attribute handling shared by the serialize and deserialize generators.

use heck::ToLowerCamelCase;
use syn::punctuated::Punctuated;
use syn::{Lit, Meta, token};

/// Returns the JSON key for a field: the `#[fhir_serde(rename = "...")]`
/// value when present, otherwise the lowerCamelCase form of the Rust name.
/// The rename escape hatch covers keyword collisions (`use_` -> `"use"`,
/// `type_` -> `"type"`, `for_` -> `"for"`).
pub(crate) fn get_effective_field_name(field: &syn::Field) -> String {
    if let Some(rename) = get_rename(&field.attrs) {
        return rename;
    }
    field
        .ident
        .as_ref()
        .expect("FhirSerde fields must be named")
        .to_string()
        .to_lower_camel_case()
}

/// Returns the JSON key for a choice enum variant: the rename attribute
/// when present, otherwise the variant name verbatim.
pub(crate) fn get_effective_variant_name(variant: &syn::Variant) -> String {
    get_rename(&variant.attrs).unwrap_or_else(|| variant.ident.to_string())
}

/// True for fields carrying `#[fhir_serde(flatten)]`, i.e. choice (`[x]`)
/// fields whose enum serializes inline into the parent object.
pub(crate) fn is_flattened(field: &syn::Field) -> bool {
    for attr in &field.attrs {
        if !attr.path().is_ident("fhir_serde") {
            continue;
        }
        let Ok(list) = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        else {
            continue;
        };
        for meta in list {
            if let Meta::Path(path) = meta {
                if path.is_ident("flatten") {
                    return true;
                }
            }
        }
    }
    false
}

fn get_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("fhir_serde") {
            continue;
        }
        let Ok(list) = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        else {
            continue;
        };
        for meta in list {
            if let Meta::NameValue(nv) = meta {
                if nv.path.is_ident("rename") {
                    if let syn::Expr::Lit(expr_lit) = nv.value {
                        if let Lit::Str(lit_str) = expr_lit.lit {
                            return Some(lit_str.value());
                        }
                    }
                }
            }
        }
    }
    None
}
