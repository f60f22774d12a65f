//! `Deserialize` generation.
//!
//! Structs deserialize through a hidden `RawFields` struct that receives
//! every JSON key under its wire name: element fields land in the element
//! wrapper's own `Deserialize` (which accepts both the bare primitive and
//! the object form), their `_name` companions land in a small id/extension
//! helper, and the two are merged afterwards. Vectors of elements arrive as
//! two null-padded arrays and are zipped back together in order.
//!
//! Choice (`[x]`) fields never use `#[serde(flatten)]` on an `Option`:
//! serde treats a flattened `Option` as present whenever *any* unconsumed
//! key remains in the object, so a resource carrying one choice but not
//! another would fail to parse. Instead all leftover keys are collected
//! into a single flattened catch-all map and routed to each choice field by
//! key prefix; whatever the catch-all retains beyond that is an unknown key
//! and is ignored.

use quote::{format_ident, quote};
use syn::{Data, Fields, Ident, Type};

use crate::field_helpers::{get_effective_field_name, get_effective_variant_name, is_flattened};
use crate::type_helpers::{get_element_info, get_option_inner_type, get_vec_item_type};

/// Owning deserializer helper for the `_field` companion object. Defined
/// once inside each generated `deserialize` fn that handles element fields.
fn id_and_extension_helper() -> proc_macro2::TokenStream {
    quote! {
        #[derive(serde::Deserialize, Clone, Default)]
        struct IdAndExtensionHelper {
            #[serde(default)]
            id: Option<std::string::String>,
            #[serde(default)]
            extension: Option<Vec<Extension>>,
        }
    }
}

pub(crate) fn generate_deserialize_impl(data: &Data, name: &Ident) -> proc_macro2::TokenStream {
    match data {
        Data::Enum(data) => generate_enum_deserialize(data, name),
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_struct_deserialize(fields, name),
            _ => panic!("FhirSerde only supports structs with named fields"),
        },
        Data::Union(_) => panic!("FhirSerde does not support unions"),
    }
}

/// For choice enums, an inherent predicate over the exact key set the enum
/// answers to (variant keys plus underscore companions). The struct-side
/// catch-all routing consults it so that an unrecognized key sharing a
/// choice stem (say `valueAttachment` from a later release on a type whose
/// value choice lacks it) is ignored instead of being fed to the enum.
pub(crate) fn generate_choice_keys_impl(data: &Data, name: &Ident) -> proc_macro2::TokenStream {
    let Data::Enum(data) = data else {
        return quote! {};
    };

    let mut keys = Vec::new();
    for variant in &data.variants {
        let variant_key = get_effective_variant_name(variant);
        let Fields::Unnamed(fields) = &variant.fields else {
            continue;
        };
        let Some(field) = fields.unnamed.first() else {
            continue;
        };
        if get_element_info(&field.ty).is_element {
            keys.push(format!("_{}", variant_key));
        }
        keys.push(variant_key);
    }

    quote! {
        impl #name {
            #[doc(hidden)]
            pub fn choice_key_applies(key: &str) -> bool {
                matches!(key, #(#keys)|*)
            }
        }
    }
}

fn generate_enum_deserialize(data: &syn::DataEnum, name: &Ident) -> proc_macro2::TokenStream {
    let enum_name = name.to_string();

    // Key-recognition arms for the scan loop and construction arms for the
    // final dispatch. Element variants additionally answer to their
    // underscore-prefixed companion key.
    let mut key_arms = Vec::new();
    let mut construct_arms = Vec::new();
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
        let field_ty = &field.ty;
        let info = get_element_info(field_ty);

        if info.is_element {
            any_element_variant = true;
            let underscore_key = format!("_{}", variant_key);
            key_arms.push(quote! {
                #variant_key => (#variant_key, false),
                #underscore_key => (#variant_key, true),
            });
            construct_arms.push(quote! {
                #variant_key => {
                    let mut element: #field_ty = match value_part {
                        Some(value) => serde::Deserialize::deserialize(value)
                            .map_err(serde::de::Error::custom)?,
                        None => <#field_ty>::default(),
                    };
                    if let Some(companion_value) = companion_part {
                        let companion: IdAndExtensionHelper =
                            serde::Deserialize::deserialize(companion_value)
                                .map_err(serde::de::Error::custom)?;
                        if companion.id.is_some() {
                            element.id = companion.id;
                        }
                        if companion.extension.is_some() {
                            element.extension = companion.extension;
                        }
                    }
                    Ok(#name::#variant_name(element))
                }
            });
        } else {
            key_arms.push(quote! {
                #variant_key => (#variant_key, false),
            });
            construct_arms.push(quote! {
                #variant_key => {
                    let value = value_part
                        .ok_or_else(|| serde::de::Error::missing_field(#variant_key))?;
                    let inner = serde::Deserialize::deserialize(value)
                        .map_err(serde::de::Error::custom)?;
                    Ok(#name::#variant_name(inner))
                }
            });
        }
    }

    let helper_def = if any_element_variant {
        id_and_extension_helper()
    } else {
        quote! {}
    };
    let expecting_msg = format!("an object with a {} choice key", enum_name);
    let missing_msg = format!("none of the {} choice keys is present", enum_name);

    quote! {
        #helper_def

        struct ChoiceVisitor;

        impl<'de> serde::de::Visitor<'de> for ChoiceVisitor {
            type Value = #name;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(#expecting_msg)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut found: Option<&'static str> = None;
                let mut value_part: Option<serde_json::Value> = None;
                let mut companion_part: Option<serde_json::Value> = None;

                while let Some(key) = map.next_key::<std::string::String>()? {
                    let (base, is_companion) = match key.as_str() {
                        #(#key_arms)*
                        _ => {
                            let _ = map.next_value::<serde::de::IgnoredAny>()?;
                            continue;
                        }
                    };
                    if let Some(existing) = found {
                        if existing != base {
                            return Err(serde::de::Error::custom(format!(
                                "conflicting choice keys: {} and {}",
                                existing, key
                            )));
                        }
                    }
                    found = Some(base);
                    let slot = if is_companion {
                        &mut companion_part
                    } else {
                        &mut value_part
                    };
                    if slot.is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate field {}",
                            key
                        )));
                    }
                    *slot = Some(map.next_value()?);
                }

                let base = match found {
                    Some(base) => base,
                    None => return Err(serde::de::Error::custom(#missing_msg)),
                };

                match base {
                    #(#construct_arms)*
                    _ => Err(serde::de::Error::custom(#missing_msg)),
                }
            }
        }

        deserializer.deserialize_map(ChoiceVisitor)
    }
}

fn generate_struct_deserialize(fields: &syn::FieldsNamed, name: &Ident) -> proc_macro2::TokenStream {
    let has_flattened_fields = fields.named.iter().any(is_flattened);
    let mut raw_fields = Vec::new();
    let mut constructors = Vec::new();
    let mut any_element_field = false;

    for field in &fields.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_ty = &field.ty;
        let effective_name = get_effective_field_name(field);
        let underscore_name = format!("_{}", effective_name);
        // Trim the keyword-escape underscore (`type_`, `for_`) so the
        // hidden companion field stays snake_case.
        let companion_ident = format_ident!(
            "{}_companion",
            field_ident.to_string().trim_end_matches('_')
        );
        let info = get_element_info(field_ty);

        if is_flattened(field) {
            // Routed through the shared catch-all map below.
            let enum_ty: &Type = if info.is_option {
                get_option_inner_type(field_ty)
                    .unwrap_or_else(|| panic!("Option inner type not found for {}", field_ident))
            } else {
                field_ty
            };
            constructors.push(choice_constructor(
                field_ident,
                enum_ty,
                &effective_name,
                info.is_option,
            ));
            continue;
        }

        if info.is_element {
            any_element_field = true;
        }

        if info.is_element && info.is_vec {
            let item_ty = get_vec_item_type(field_ty)
                .unwrap_or_else(|| panic!("vector element type not found for {}", field_ident));
            raw_fields.push(quote! {
                #[serde(default, rename = #effective_name)]
                #field_ident: Option<Vec<Option<#item_ty>>>,
                #[serde(default, rename = #underscore_name)]
                #companion_ident: Option<Vec<Option<IdAndExtensionHelper>>>,
            });
            let merge_block = quote! {
                {
                    let values = raw.#field_ident.unwrap_or_default();
                    let companions = raw.#companion_ident.unwrap_or_default();
                    let len = values.len().max(companions.len());
                    let mut merged = Vec::with_capacity(len);
                    for index in 0..len {
                        let mut element = values
                            .get(index)
                            .cloned()
                            .flatten()
                            .unwrap_or_else(<#item_ty>::default);
                        if let Some(companion) = companions.get(index).cloned().flatten() {
                            if companion.id.is_some() {
                                element.id = companion.id;
                            }
                            if companion.extension.is_some() {
                                element.extension = companion.extension;
                            }
                        }
                        if element.value.is_some()
                            || element.id.is_some()
                            || element.extension.is_some()
                        {
                            merged.push(element);
                        }
                    }
                    merged
                }
            };
            if info.is_option {
                constructors.push(quote! {
                    #field_ident: if raw.#field_ident.is_some() || raw.#companion_ident.is_some() {
                        Some(#merge_block)
                    } else {
                        None
                    },
                });
            } else {
                constructors.push(quote! {
                    #field_ident: #merge_block,
                });
            }
        } else if info.is_element {
            let element_ty: &Type = if info.is_option {
                get_option_inner_type(field_ty)
                    .unwrap_or_else(|| panic!("Option inner type not found for {}", field_ident))
            } else {
                field_ty
            };
            raw_fields.push(quote! {
                #[serde(default, rename = #effective_name)]
                #field_ident: Option<#element_ty>,
                #[serde(default, rename = #underscore_name)]
                #companion_ident: Option<IdAndExtensionHelper>,
            });
            let merge_block = quote! {
                {
                    let mut element = raw.#field_ident.unwrap_or_else(<#element_ty>::default);
                    if let Some(companion) = raw.#companion_ident {
                        if companion.id.is_some() {
                            element.id = companion.id;
                        }
                        if companion.extension.is_some() {
                            element.extension = companion.extension;
                        }
                    }
                    element
                }
            };
            if info.is_option {
                constructors.push(quote! {
                    #field_ident: if raw.#field_ident.is_some() || raw.#companion_ident.is_some() {
                        Some(#merge_block)
                    } else {
                        None
                    },
                });
            } else {
                constructors.push(quote! {
                    #field_ident: {
                        if raw.#field_ident.is_none() && raw.#companion_ident.is_none() {
                            return Err(serde::de::Error::missing_field(#effective_name));
                        }
                        #merge_block
                    },
                });
            }
        } else {
            // Plain field. Required (non-Option) fields get no default, so
            // their absence surfaces as a missing-field error.
            let default_attr = if info.is_option {
                quote! { #[serde(default, rename = #effective_name)] }
            } else {
                quote! { #[serde(rename = #effective_name)] }
            };
            raw_fields.push(quote! {
                #default_attr
                #field_ident: #field_ty,
            });
            constructors.push(quote! {
                #field_ident: raw.#field_ident,
            });
        }
    }

    if has_flattened_fields {
        raw_fields.push(quote! {
            #[serde(flatten)]
            rest: serde_json::Map<std::string::String, serde_json::Value>,
        });
    }

    let helper_def = if any_element_field {
        id_and_extension_helper()
    } else {
        quote! {}
    };

    quote! {
        #helper_def

        #[derive(serde::Deserialize)]
        struct RawFields {
            #(#raw_fields)*
        }

        let raw = RawFields::deserialize(deserializer)?;

        Ok(#name {
            #(#constructors)*
        })
    }
}

/// Constructor expression for one choice field: pick its keys out of the
/// catch-all by stem prefix (`value` matches `valueQuantity` and
/// `_valueString`, not `valueset`), keep only the keys the enum actually
/// declares, and hand them to the enum's own deserializer as a small
/// object. Stem-prefixed keys the enum does not declare are unknown keys
/// and stay ignored.
fn choice_constructor(
    field_ident: &Ident,
    enum_ty: &Type,
    effective_name: &str,
    is_option: bool,
) -> proc_macro2::TokenStream {
    let pick = quote! {
        let mut picked = serde_json::Map::new();
        for (key, value) in raw.rest.iter() {
            if crate::parse::choice_key_matches(#effective_name, key)
                && <#enum_ty>::choice_key_applies(key)
            {
                picked.insert(key.clone(), value.clone());
            }
        }
    };
    if is_option {
        quote! {
            #field_ident: {
                #pick
                if picked.is_empty() {
                    None
                } else {
                    Some(
                        serde::Deserialize::deserialize(serde_json::Value::Object(picked))
                            .map_err(serde::de::Error::custom)?,
                    )
                }
            },
        }
    } else {
        quote! {
            #field_ident: {
                #pick
                if picked.is_empty() {
                    return Err(serde::de::Error::missing_field(#effective_name));
                }
                serde::Deserialize::deserialize(serde_json::Value::Object(picked))
                    .map_err(serde::de::Error::custom)?
            },
        }
    }
}
