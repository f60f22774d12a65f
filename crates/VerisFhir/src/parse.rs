//! JSON codec entry points.
//!
//! Decoding and encoding are pure functions over strings: no validation
//! registry, no terminology lookups, no state. A document accepted by
//! [`decode_resource`] re-encodes through [`encode`] to a JSON-equal
//! document (key order aside).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ParseError;
use crate::r4::Resource;

/// Decodes any model type from a JSON string.
///
/// Use [`decode_resource`] for documents whose concrete type is only known
/// from the `resourceType` property.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, ParseError> {
    serde_json::from_str(json).map_err(|e| classify(e, short_type_name::<T>()))
}

/// Decodes a resource of any supported type, dispatching on `resourceType`.
pub fn decode_resource(json: &str) -> Result<Resource, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ParseError::Syntax)?;

    let serde_json::Value::Object(ref map) = value else {
        return Err(ParseError::structure(
            "Resource",
            "a resource must be a JSON object",
        ));
    };
    let resource_type = match map.get("resourceType") {
        Some(serde_json::Value::String(name)) => name.as_str(),
        Some(_) => {
            return Err(ParseError::structure(
                "Resource",
                "'resourceType' must be a string",
            ));
        }
        None => {
            return Err(ParseError::structure(
                "Resource",
                "missing 'resourceType' property",
            ));
        }
    };
    if !Resource::TYPE_NAMES.contains(&resource_type) {
        return Err(ParseError::UnknownType(resource_type.to_string()));
    }

    let target = resource_type.to_string();
    serde_json::from_value(value).map_err(|e| ParseError::structure(target, e.to_string()))
}

/// Encodes any model value to a compact JSON string.
pub fn encode<T: Serialize>(value: &T) -> Result<String, ParseError> {
    serde_json::to_string(value).map_err(|e| classify(e, short_type_name::<T>()))
}

/// Encodes any model value to an indented JSON string.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, ParseError> {
    serde_json::to_string_pretty(value).map_err(|e| classify(e, short_type_name::<T>()))
}

fn classify(e: serde_json::Error, target: &str) -> ParseError {
    if e.is_syntax() || e.is_eof() {
        ParseError::Syntax(e)
    } else {
        ParseError::structure(target, e.to_string())
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Returns `true` if `key` is one of the JSON spellings of the choice
/// field `base`: the base followed by a type name in upper camel case,
/// optionally underscore-prefixed for the extension companion.
///
/// `choice_key_matches("value", "valueQuantity")` holds, as does
/// `("value", "_valueString")`; `("value", "valueset")` does not.
pub fn choice_key_matches(base: &str, key: &str) -> bool {
    let key = key.strip_prefix('_').unwrap_or(key);
    let Some(suffix) = key.strip_prefix(base) else {
        return false;
    };
    suffix.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_key_matching() {
        assert!(choice_key_matches("value", "valueQuantity"));
        assert!(choice_key_matches("value", "_valueDateTime"));
        assert!(choice_key_matches("effective", "effectivePeriod"));
        assert!(!choice_key_matches("value", "value"));
        assert!(!choice_key_matches("value", "valueset"));
        assert!(!choice_key_matches("value", "status"));
        assert!(!choice_key_matches("effective", "value"));
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let result = decode_resource("{\"resourceType\": \"Patient\"");
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn non_object_is_a_structure_error() {
        let result = decode_resource("[1, 2, 3]");
        assert!(matches!(result, Err(ParseError::Structure { .. })));
    }

    #[test]
    fn missing_resource_type_is_a_structure_error() {
        let result = decode_resource("{\"status\": \"final\"}");
        assert!(matches!(result, Err(ParseError::Structure { .. })));
    }

    #[test]
    fn unknown_resource_type_is_reported_by_name() {
        let result = decode_resource("{\"resourceType\": \"Starship\"}");
        match result {
            Err(ParseError::UnknownType(name)) => assert_eq!(name, "Starship"),
            other => panic!("expected UnknownType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn decodes_and_dispatches_on_resource_type() {
        let resource =
            decode_resource("{\"resourceType\": \"Organization\", \"name\": \"HL7\"}").unwrap();
        assert_eq!(resource.resource_type(), "Organization");
    }
}
