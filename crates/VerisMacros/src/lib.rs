//! Derive macro implementing the FHIR JSON representation for model types.
//!
//! FHIR primitives are not plain JSON scalars: every primitive may carry an
//! `id` and a list of extensions, serialized as a sibling key prefixed with
//! an underscore (`"status": "final", "_status": {...}`). Arrays of
//! primitives split into two parallel, null-padded arrays. Choice (`[x]`)
//! fields serialize their variant inline into the parent object under a
//! type-suffixed key (`valueQuantity`, `valueString`, ...). None of this
//! maps onto what `#[derive(Serialize, Deserialize)]` produces, so model
//! structs and choice enums derive [`FhirSerde`] instead.
//!
//! The generated `Deserialize` goes through a hidden temporary struct whose
//! element-typed fields deserialize via the element wrapper's own
//! `Deserialize` impl, with `_field` companions merged in afterwards.
//! Choice keys are collected through a single flattened catch-all map and
//! routed to each choice field by key prefix, which also gives
//! ignore-unknown-keys behavior.

mod deserialize_impl;
mod field_helpers;
mod serialize_impl;
mod type_helpers;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use deserialize_impl::{generate_choice_keys_impl, generate_deserialize_impl};
use serialize_impl::{generate_is_empty_impl, generate_serialize_impl};

/// Derives `serde::Serialize` and `serde::Deserialize` following the FHIR
/// JSON representation rules, plus a hidden `is_empty` helper used by the
/// generated serializers to suppress empty complex values.
///
/// Recognized attributes:
///
/// - `#[fhir_serde(rename = "...")]` on a field or enum variant overrides
///   the JSON key (fields default to the lowerCamelCase of the Rust name).
/// - `#[fhir_serde(flatten)]` marks a choice (`[x]`) field whose enum
///   variants serialize inline into the parent object.
/// - `#[fhir_choice_element(base_name = "...")]` documents the `[x]` stem a
///   choice enum belongs to.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde, fhir_choice_element))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let serialize_body = generate_serialize_impl(&input.data, name);
    let deserialize_body = generate_deserialize_impl(&input.data, name);
    let is_empty_impl =
        generate_is_empty_impl(&input.data, name, &impl_generics, &ty_generics, where_clause);
    let choice_keys_impl = generate_choice_keys_impl(&input.data, name);

    let expanded = quote! {
        impl #impl_generics serde::Serialize for #name #ty_generics #where_clause {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                #serialize_body
            }
        }

        impl<'de> serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #deserialize_body
            }
        }

        #is_empty_impl

        #choice_keys_impl
    };

    expanded.into()
}
