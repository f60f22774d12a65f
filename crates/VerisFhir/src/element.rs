//! Generic container for FHIR primitive elements.
//!
//! In the FHIR JSON representation a primitive is not just a scalar: it may
//! carry an element `id` and a list of extensions, in which case the scalar
//! appears under its own key and the metadata under an underscore-prefixed
//! sibling key. [`Element`] models the merged form; the derive macro in the
//! model layer handles the key splitting.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A FHIR primitive together with its optional element metadata.
///
/// `V` is the value type (`String`, `bool`, `i32`, one of the precision
/// date/time types, or a code-system enum); `E` is the extension type of
/// the model layer.
///
/// An element can hold a value, metadata, or both. `{"status": "final"}`
/// decodes to a value-only element; a document carrying only `_status`
/// decodes to a metadata-only element with `value: None`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Element id, referenced by `fhir_comments` style tooling and narrative links.
    pub id: Option<String>,
    /// Extensions attached to the primitive.
    pub extension: Option<Vec<E>>,
    /// The primitive value itself.
    pub value: Option<V>,
}

// Derived Default would demand V: Default, which code-system enums do not
// have. All fields default to None regardless of V and E.
impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Wraps a bare value with no id or extensions.
    pub fn new(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::new(value)
    }
}

/// Deserializes `V` from a string, coercing numeric text to the numeric
/// value types first. Some real-world producers emit `"42"` where the
/// schema says integer; the coercion keeps those documents readable while
/// genuinely non-numeric text still reaches `V`'s own deserializer.
fn primitive_from_str<'de, V, Er>(text: &str) -> Result<V, Er>
where
    V: Deserialize<'de> + 'static,
    Er: de::Error,
{
    use std::any::TypeId;

    use serde::de::value::{
        I32Deserializer, I64Deserializer, StrDeserializer, U32Deserializer, U64Deserializer,
    };

    if TypeId::of::<V>() == TypeId::of::<i64>() {
        if let Ok(parsed) = text.parse::<i64>() {
            return V::deserialize(I64Deserializer::new(parsed));
        }
    } else if TypeId::of::<V>() == TypeId::of::<i32>() {
        if let Ok(parsed) = text.parse::<i32>() {
            return V::deserialize(I32Deserializer::new(parsed));
        }
    } else if TypeId::of::<V>() == TypeId::of::<u64>() {
        if let Ok(parsed) = text.parse::<u64>() {
            return V::deserialize(U64Deserializer::new(parsed));
        }
    } else if TypeId::of::<V>() == TypeId::of::<u32>() {
        if let Ok(parsed) = text.parse::<u32>() {
            return V::deserialize(U32Deserializer::new(parsed));
        }
    }

    V::deserialize(StrDeserializer::new(text))
}

/// Deserializes `V` from a buffered JSON value, applying the
/// numeric-string coercion for string input.
fn value_from_json<'de, V, Er>(value: serde_json::Value) -> Result<V, Er>
where
    V: Deserialize<'de> + 'static,
    Er: de::Error,
{
    match value {
        serde_json::Value::String(s) => primitive_from_str(&s),
        other => V::deserialize(other).map_err(de::Error::custom),
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de> + 'static,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Buffering through Value keeps this independent of how the outer
        // deserializer presents numbers (arbitrary-precision numbers arrive
        // as an opaque token map in the streaming API).
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Null => Ok(Element::default()),
            serde_json::Value::Object(map) => {
                let mut id: Option<String> = None;
                let mut extension: Option<Vec<E>> = None;
                let mut value: Option<V> = None;

                for (key, entry) in map {
                    match key.as_str() {
                        "id" => {
                            id = Deserialize::deserialize(entry).map_err(de::Error::custom)?;
                        }
                        "extension" => {
                            extension =
                                Deserialize::deserialize(entry).map_err(de::Error::custom)?;
                        }
                        "value" => {
                            if !entry.is_null() {
                                value = Some(value_from_json(entry)?);
                            }
                        }
                        other => {
                            return Err(de::Error::unknown_field(
                                other,
                                &["id", "extension", "value"],
                            ));
                        }
                    }
                }

                Ok(Element {
                    id,
                    extension,
                    value,
                })
            }
            serde_json::Value::Array(_) => Err(de::Error::invalid_type(
                de::Unexpected::Seq,
                &"a primitive value, an element object, or null",
            )),
            other => value_from_json(other).map(Element::new),
        }
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Standalone serialization emits the bare value when there is no
        // metadata; the derive macro never reaches this path for fields it
        // splits into name/_name pairs.
        if self.id.is_none() && self.extension.is_none() {
            return match &self.value {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            };
        }

        let mut len = 0;
        if self.id.is_some() {
            len += 1;
        }
        if self.extension.is_some() {
            len += 1;
        }
        if self.value.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Element", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(extension) = &self.extension {
            state.serialize_field("extension", extension)?;
        }
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Extension;

    type StringElement = Element<String, Extension>;
    type IntegerElement = Element<i32, Extension>;

    #[test]
    fn deserializes_bare_primitive() {
        let element: StringElement = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(element.value.as_deref(), Some("active"));
        assert!(element.id.is_none());
        assert!(element.extension.is_none());
    }

    #[test]
    fn deserializes_object_form() {
        let element: StringElement =
            serde_json::from_str(r#"{"id": "el-1", "value": "active"}"#).unwrap();
        assert_eq!(element.id.as_deref(), Some("el-1"));
        assert_eq!(element.value.as_deref(), Some("active"));
    }

    #[test]
    fn deserializes_null_as_empty() {
        let element: StringElement = serde_json::from_str("null").unwrap();
        assert!(element.is_empty());
    }

    #[test]
    fn coerces_numeric_string_to_integer() {
        let element: IntegerElement = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(element.value, Some(42));
    }

    #[test]
    fn rejects_non_numeric_string_for_integer() {
        let result: Result<IntegerElement, _> = serde_json::from_str("\"forty-two\"");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_bare_value_without_metadata() {
        let element = StringElement::new("active".to_string());
        assert_eq!(serde_json::to_string(&element).unwrap(), "\"active\"");
    }

    #[test]
    fn serializes_object_when_id_present() {
        let element = StringElement {
            id: Some("el-1".to_string()),
            extension: None,
            value: Some("active".to_string()),
        };
        let json: serde_json::Value = serde_json::to_value(&element).unwrap();
        assert_eq!(json["id"], "el-1");
        assert_eq!(json["value"], "active");
    }
}
