//! `Serialize` generation.
//!
//! Structs serialize through `serialize_struct` (or `serialize_map` when a
//! choice field must flatten into the parent object). Element-typed fields
//! split into the bare value under `name` and an `{id, extension}` object
//! under `_name`; vectors of elements split into two parallel null-padded
//! arrays. Absent values are omitted outright, never written as `null`.
//!
//! Choice enums serialize as a single key/value pair whose key is the
//! variant's renamed form (`valueQuantity`, not `{"value": {"Quantity":..}}`).

use quote::quote;
use syn::{Data, Fields, Ident};

use crate::field_helpers::{get_effective_field_name, get_effective_variant_name, is_flattened};
use crate::type_helpers::get_element_info;

/// Borrowing serializer helper for the `_field` companion object. Defined
/// once inside each generated `serialize` fn that handles element fields.
fn id_and_extension_helper() -> proc_macro2::TokenStream {
    quote! {
        #[derive(serde::Serialize)]
        struct IdAndExtensionHelper<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            id: &'a Option<std::string::String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            extension: &'a Option<Vec<Extension>>,
        }
    }
}

pub(crate) fn generate_serialize_impl(data: &Data, name: &Ident) -> proc_macro2::TokenStream {
    match data {
        Data::Enum(data) => generate_enum_serialize(data, name),
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_struct_serialize(fields, name),
            _ => panic!("FhirSerde only supports structs with named fields"),
        },
        Data::Union(_) => panic!("FhirSerde does not support unions"),
    }
}

fn generate_enum_serialize(data: &syn::DataEnum, name: &Ident) -> proc_macro2::TokenStream {
    let mut match_arms = Vec::new();
    let mut any_element_variant = false;

    for variant in &data.variants {
        let variant_name = &variant.ident;
        let variant_key = get_effective_variant_name(variant);

        let Fields::Unnamed(fields) = &variant.fields else {
            panic!(
                "FhirSerde choice enums must use newtype variants: {}::{}",
                name, variant_name
            );
        };
        let field = fields
            .unnamed
            .first()
            .expect("FhirSerde choice variants carry exactly one field");
        let info = get_element_info(&field.ty);

        if info.is_element {
            any_element_variant = true;
            let underscore_key = format!("_{}", variant_key);
            match_arms.push(quote! {
                Self::#variant_name(element) => {
                    if element.value.is_some() {
                        state.serialize_entry(#variant_key, &element.value)?;
                    }
                    if element.id.is_some() || element.extension.is_some() {
                        let companion = IdAndExtensionHelper {
                            id: &element.id,
                            extension: &element.extension,
                        };
                        state.serialize_entry(#underscore_key, &companion)?;
                    }
                }
            });
        } else {
            match_arms.push(quote! {
                Self::#variant_name(value) => {
                    state.serialize_entry(#variant_key, value)?;
                }
            });
        }
    }

    let helper_def = if any_element_variant {
        id_and_extension_helper()
    } else {
        quote! {}
    };

    quote! {
        use serde::ser::SerializeMap;
        #helper_def

        let mut state = serializer.serialize_map(Some(1))?;
        match self {
            #(#match_arms)*
        }
        state.end()
    }
}

fn generate_struct_serialize(fields: &syn::FieldsNamed, name: &Ident) -> proc_macro2::TokenStream {
    let has_flattened_fields = fields.named.iter().any(is_flattened);
    let mut field_counts = Vec::new();
    let mut field_serializers = Vec::new();
    let mut any_element_field = false;

    // serialize_struct wants an upfront length; serialize_map takes None,
    // so the counting pass is only generated for the struct path.
    let serialize_call = if has_flattened_fields {
        quote! { state.serialize_entry }
    } else {
        quote! { state.serialize_field }
    };

    for field in &fields.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_access = quote! { self.#field_ident };
        let effective_name = get_effective_field_name(field);
        let underscore_name = format!("_{}", effective_name);
        let info = get_element_info(&field.ty);
        let field_is_flattened = is_flattened(field);

        if info.is_element && !field_is_flattened {
            any_element_field = true;
        }

        if !has_flattened_fields {
            field_counts.push(count_code(&field_access, &info, field_is_flattened));
        }

        let serializing_code = if field_is_flattened {
            // Choice enums write their own key/value pair(s) directly into
            // the parent map.
            quote! {
                serde::Serialize::serialize(
                    &#field_access,
                    serde::__private::ser::FlatMapSerializer(&mut state),
                )?;
            }
        } else if info.is_element && info.is_vec {
            let vec_access = if info.is_option {
                quote! { #field_access.as_ref() }
            } else {
                quote! { Some(&#field_access) }
            };
            quote! {
                if let Some(elements) = #vec_access {
                    if !elements.is_empty() {
                        let mut primitive_array = Vec::with_capacity(elements.len());
                        let mut companion_array = Vec::with_capacity(elements.len());
                        let mut has_companions = false;
                        for element in elements.iter() {
                            match &element.value {
                                Some(value) => match serde_json::to_value(value) {
                                    Ok(json_value) => primitive_array.push(json_value),
                                    Err(e) => {
                                        return Err(serde::ser::Error::custom(format!(
                                            "failed to serialize {}: {}",
                                            #effective_name, e
                                        )));
                                    }
                                },
                                None => primitive_array.push(serde_json::Value::Null),
                            }
                            if element.id.is_some() || element.extension.is_some() {
                                has_companions = true;
                                let companion = IdAndExtensionHelper {
                                    id: &element.id,
                                    extension: &element.extension,
                                };
                                match serde_json::to_value(&companion) {
                                    Ok(json_value) => companion_array.push(json_value),
                                    Err(e) => {
                                        return Err(serde::ser::Error::custom(format!(
                                            "failed to serialize {}: {}",
                                            #underscore_name, e
                                        )));
                                    }
                                }
                            } else {
                                companion_array.push(serde_json::Value::Null);
                            }
                        }
                        if primitive_array.iter().any(|v| !v.is_null()) {
                            #serialize_call(#effective_name, &primitive_array)?;
                        }
                        if has_companions {
                            #serialize_call(#underscore_name, &companion_array)?;
                        }
                    }
                }
            }
        } else if info.is_element {
            let element_access = if info.is_option {
                quote! { #field_access.as_ref() }
            } else {
                quote! { Some(&#field_access) }
            };
            quote! {
                if let Some(element) = #element_access {
                    if let Some(value) = element.value.as_ref() {
                        #serialize_call(#effective_name, value)?;
                    }
                    if element.id.is_some() || element.extension.is_some() {
                        let companion = IdAndExtensionHelper {
                            id: &element.id,
                            extension: &element.extension,
                        };
                        #serialize_call(#underscore_name, &companion)?;
                    }
                }
            }
        } else if info.is_option {
            quote! {
                if let Some(value) = &#field_access {
                    #serialize_call(#effective_name, value)?;
                }
            }
        } else if info.is_vec {
            quote! {
                if !#field_access.is_empty() {
                    #serialize_call(#effective_name, &#field_access)?;
                }
            }
        } else {
            // Required complex values still get suppressed when every part
            // of them is absent, matching what re-encoding an absent field
            // must produce.
            quote! {
                if !#field_access.is_empty() {
                    #serialize_call(#effective_name, &#field_access)?;
                }
            }
        };

        field_serializers.push(serializing_code);
    }

    let helper_def = if any_element_field {
        id_and_extension_helper()
    } else {
        quote! {}
    };

    if has_flattened_fields {
        quote! {
            use serde::ser::SerializeMap;
            #helper_def

            let mut state = serializer.serialize_map(None)?;
            #(#field_serializers)*
            state.end()
        }
    } else {
        quote! {
            use serde::ser::SerializeStruct;
            #helper_def

            let mut count = 0;
            #(#field_counts)*
            let mut state = serializer.serialize_struct(stringify!(#name), count)?;
            #(#field_serializers)*
            state.end()
        }
    }
}

/// Entry-count expression for the `serialize_struct` path. Mirrors exactly
/// the conditions under which the serializing code writes entries.
fn count_code(
    field_access: &proc_macro2::TokenStream,
    info: &crate::type_helpers::ElementInfo,
    field_is_flattened: bool,
) -> proc_macro2::TokenStream {
    if field_is_flattened {
        quote! {}
    } else if info.is_element && info.is_vec {
        let vec_access = if info.is_option {
            quote! { #field_access.as_ref() }
        } else {
            quote! { Some(&#field_access) }
        };
        quote! {
            if let Some(elements) = #vec_access {
                if !elements.is_empty() {
                    if elements.iter().any(|e| e.value.is_some()) {
                        count += 1;
                    }
                    if elements.iter().any(|e| e.id.is_some() || e.extension.is_some()) {
                        count += 1;
                    }
                }
            }
        }
    } else if info.is_element {
        let element_access = if info.is_option {
            quote! { #field_access.as_ref() }
        } else {
            quote! { Some(&#field_access) }
        };
        quote! {
            if let Some(element) = #element_access {
                if element.value.is_some() {
                    count += 1;
                }
                if element.id.is_some() || element.extension.is_some() {
                    count += 1;
                }
            }
        }
    } else if info.is_option {
        quote! {
            if #field_access.is_some() {
                count += 1;
            }
        }
    } else if info.is_vec {
        quote! {
            if !#field_access.is_empty() {
                count += 1;
            }
        }
    } else {
        quote! {
            if !#field_access.is_empty() {
                count += 1;
            }
        }
    }
}

/// Generates the hidden `is_empty` helper the serializers use to suppress
/// complex values whose every part is absent. Choice enums always hold a
/// value, so theirs is constant `false`.
pub(crate) fn generate_is_empty_impl(
    data: &Data,
    name: &Ident,
    impl_generics: &syn::ImplGenerics,
    ty_generics: &syn::TypeGenerics,
    where_clause: Option<&syn::WhereClause>,
) -> Option<proc_macro2::TokenStream> {
    match data {
        Data::Struct(data_struct) => {
            let fields = match &data_struct.fields {
                Fields::Named(named) => &named.named,
                _ => return None,
            };

            let mut field_checks = Vec::new();
            for field in fields {
                let field_ident = field.ident.as_ref().expect("named field");
                let info = get_element_info(&field.ty);

                let check = if is_flattened(field) {
                    if info.is_option {
                        quote! { self.#field_ident.is_none() }
                    } else {
                        quote! { false }
                    }
                } else if info.is_element && info.is_vec {
                    let vec_access = if info.is_option {
                        quote! { self.#field_ident.as_ref() }
                    } else {
                        quote! { Some(&self.#field_ident) }
                    };
                    quote! {
                        #vec_access.map_or(true, |elements| {
                            elements.iter().all(|e| {
                                e.value.is_none() && e.id.is_none() && e.extension.is_none()
                            })
                        })
                    }
                } else if info.is_element {
                    let element_access = if info.is_option {
                        quote! { self.#field_ident.as_ref() }
                    } else {
                        quote! { Some(&self.#field_ident) }
                    };
                    quote! {
                        #element_access.map_or(true, |e| {
                            e.value.is_none() && e.id.is_none() && e.extension.is_none()
                        })
                    }
                } else if info.is_option {
                    quote! { self.#field_ident.is_none() }
                } else if info.is_vec {
                    quote! { self.#field_ident.is_empty() }
                } else {
                    quote! { self.#field_ident.is_empty() }
                };

                field_checks.push(check);
            }

            let body = if field_checks.is_empty() {
                quote! { true }
            } else {
                quote! { true #(&& #field_checks)* }
            };

            Some(quote! {
                impl #impl_generics #name #ty_generics #where_clause {
                    #[doc(hidden)]
                    pub fn is_empty(&self) -> bool {
                        #body
                    }
                }
            })
        }
        Data::Enum(_) => Some(quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #[doc(hidden)]
                pub fn is_empty(&self) -> bool {
                    false
                }
            }
        }),
        Data::Union(_) => None,
    }
}
