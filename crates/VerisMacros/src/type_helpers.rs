//! Type analysis for field classification.
//!
//! The generators need to know, for every field, whether the innermost type
//! is a primitive element wrapper and which containers (`Option`, `Vec`,
//! `Box`) wrap it. Detection is purely syntactic: either the path ends in
//! `Element`/`DecimalElement` directly, or it is one of the primitive alias
//! names the model layer defines.

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// How a field participates in the primitive element pattern.
#[derive(Clone, Copy)]
pub(crate) struct ElementInfo {
    /// Innermost type is an element wrapper (primitive alias, `Element<..>`
    /// or `DecimalElement<..>`).
    pub is_element: bool,
    /// Field type was wrapped in `Option<..>` at the outermost level.
    pub is_option: bool,
    /// Element sits inside a `Vec<..>` (parallel-array representation).
    pub is_vec: bool,
}

/// Primitive alias names that expand to `Element<V, Extension>` or
/// `DecimalElement<Extension>`. Plain Rust types never appear here; model
/// code spells `std::string::String` in full when it means a bare string.
const KNOWN_ELEMENT_ALIASES: &[&str] = &[
    "Base64Binary",
    "Boolean",
    "Canonical",
    "Code",
    "Date",
    "DateTime",
    "Decimal",
    "Id",
    "Instant",
    "Integer",
    "Markdown",
    "Oid",
    "PositiveInt",
    "String",
    "Time",
    "UnsignedInt",
    "Uri",
    "Url",
    "Uuid",
    "Xhtml",
];

pub(crate) fn get_element_info(field_ty: &Type) -> ElementInfo {
    let mut info = ElementInfo {
        is_element: false,
        is_option: false,
        is_vec: false,
    };
    let mut current_ty = field_ty;

    if let Some(inner) = generic_inner(current_ty, "Option") {
        info.is_option = true;
        current_ty = inner;
    }
    if let Some(inner) = generic_inner(current_ty, "Vec") {
        info.is_vec = true;
        current_ty = inner;
    }
    if let Some(inner) = generic_inner(current_ty, "Box") {
        current_ty = inner;
    }

    if let Type::Path(TypePath { path, .. }) = current_ty {
        if let Some(segment) = path.segments.last() {
            let ident = segment.ident.to_string();
            // Alias names only count when the path is a single segment:
            // `std::string::String` is a plain string, not the `String`
            // element alias.
            info.is_element = ident == "Element"
                || ident == "DecimalElement"
                || (path.segments.len() == 1 && KNOWN_ELEMENT_ALIASES.contains(&ident.as_str()));
        }
    }
    info
}

/// Inner type of `Option<T>`.
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    generic_inner(ty, "Option")
}

/// Inner type of `Vec<T>`, looking through a leading `Option`.
pub(crate) fn get_vec_item_type(ty: &Type) -> Option<&Type> {
    let unwrapped = generic_inner(ty, "Option").unwrap_or(ty);
    generic_inner(unwrapped, "Vec")
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(TypePath { path, .. }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
