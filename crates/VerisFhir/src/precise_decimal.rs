//! Decimal primitives with textual fidelity.
//!
//! FHIR treats the written form of a decimal as significant: `2.00` and
//! `2.0` carry different precision even though they compare equal. A parsed
//! `rust_decimal::Decimal` alone cannot reproduce the source text, so
//! [`PreciseDecimal`] keeps both and re-emits the original text through
//! `serde_json::value::RawValue`.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A decimal value paired with the exact JSON text it was read from.
///
/// Equality and ordering compare the parsed value, so `10.0 == 10.00`;
/// serialization writes `original_string` back verbatim. When the text is
/// outside `Decimal`'s range the parsed value is `None` but the text still
/// round-trips.
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Option<Decimal>,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    /// Builds a `PreciseDecimal` from an already-parsed value and the text
    /// to preserve. `value` is `None` when the text does not parse.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string.as_str()),
        }
    }

    /// Parses decimal text, accepting scientific notation with either
    /// exponent case (`1.2e3`, `1.2E3`).
    fn parse_decimal_text(text: &str) -> Option<Decimal> {
        let normalized = text.replace('E', "e");
        if normalized.contains('e') {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        }
    }

    /// The parsed value, if the original text was in `Decimal` range.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// The exact text this decimal was read from (or rendered to).
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        let original_string = Arc::from(value.to_string());
        Self {
            value: Some(value),
            original_string,
        }
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // RawValue injects the stored text into the output unchanged, so
        // trailing zeros and exponent form survive the round trip.
        match serde_json::value::RawValue::from_string(self.original_string.to_string()) {
            Ok(raw_value) => raw_value.serialize(serializer),
            Err(e) => Err(serde::ser::Error::custom(format!(
                "invalid decimal text '{}': {}",
                self.original_string, e
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Buffer through Value to get at the number's textual form.
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Number(n) => {
                let original_string = n.to_string();
                let parsed = Self::parse_decimal_text(&original_string);
                Ok(PreciseDecimal::from_parts(parsed, original_string))
            }
            serde_json::Value::String(s) => {
                let parsed = Self::parse_decimal_text(&s);
                Ok(PreciseDecimal::from_parts(parsed, s))
            }
            other => Err(de::Error::invalid_type(
                match other {
                    serde_json::Value::Null => de::Unexpected::Unit,
                    serde_json::Value::Bool(b) => de::Unexpected::Bool(b),
                    serde_json::Value::Array(_) => de::Unexpected::Seq,
                    _ => de::Unexpected::Other("JSON object"),
                },
                &"a decimal number or numeric string",
            )),
        }
    }
}

/// The decimal flavor of [`crate::Element`]: id, extensions, and a
/// [`PreciseDecimal`] value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DecimalElement<E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<PreciseDecimal>,
}

impl<E> Default for DecimalElement<E> {
    fn default() -> Self {
        DecimalElement {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<E> DecimalElement<E> {
    /// Wraps a bare decimal with no id or extensions; the preserved text is
    /// the `Display` form of `value`.
    pub fn new(value: Decimal) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(PreciseDecimal::from(value)),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

impl<'de, E> Deserialize<'de> for DecimalElement<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Number(n) => {
                let original_string = n.to_string();
                let parsed = PreciseDecimal::parse_decimal_text(&original_string);
                Ok(DecimalElement {
                    id: None,
                    extension: None,
                    value: Some(PreciseDecimal::from_parts(parsed, original_string)),
                })
            }
            serde_json::Value::String(s) => {
                let parsed = PreciseDecimal::parse_decimal_text(&s);
                Ok(DecimalElement {
                    id: None,
                    extension: None,
                    value: Some(PreciseDecimal::from_parts(parsed, s)),
                })
            }
            serde_json::Value::Object(map) => {
                let mut id: Option<String> = None;
                let mut extension: Option<Vec<E>> = None;
                let mut value: Option<PreciseDecimal> = None;

                for (key, entry) in map {
                    match key.as_str() {
                        "id" => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Deserialize::deserialize(entry).map_err(de::Error::custom)?;
                        }
                        "extension" => {
                            if extension.is_some() {
                                return Err(de::Error::duplicate_field("extension"));
                            }
                            extension =
                                Deserialize::deserialize(entry).map_err(de::Error::custom)?;
                        }
                        "value" => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            if !entry.is_null() {
                                value = Some(
                                    PreciseDecimal::deserialize(entry)
                                        .map_err(de::Error::custom)?,
                                );
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

                Ok(DecimalElement {
                    id,
                    extension,
                    value,
                })
            }
            serde_json::Value::Null => Ok(DecimalElement::default()),
            other => Err(de::Error::invalid_type(
                match other {
                    serde_json::Value::Bool(b) => de::Unexpected::Bool(b),
                    serde_json::Value::Array(_) => de::Unexpected::Seq,
                    _ => de::Unexpected::Other("unexpected JSON type"),
                },
                &"a decimal number, string, object, or null",
            )),
        }
    }
}

impl<E> Serialize for DecimalElement<E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
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

        let mut state = serializer.serialize_struct("DecimalElement", len)?;
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
    use rust_decimal_macros::dec;

    #[test]
    fn preserves_trailing_zeros() {
        let decimal: PreciseDecimal = serde_json::from_str("2.00").unwrap();
        assert_eq!(decimal.original_string(), "2.00");
        assert_eq!(decimal.value(), Some(dec!(2.00)));
        assert_eq!(serde_json::to_string(&decimal).unwrap(), "2.00");
    }

    #[test]
    fn equality_ignores_textual_form() {
        let a = PreciseDecimal::from_parts(Some(dec!(10.0)), "10.0".to_string());
        let b = PreciseDecimal::from_parts(Some(dec!(10.00)), "10.00".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn parses_scientific_notation() {
        let decimal: PreciseDecimal = serde_json::from_str("\"1.23E2\"").unwrap();
        assert_eq!(decimal.value(), Some(dec!(123)));
        assert_eq!(decimal.original_string(), "1.23E2");
    }

    #[test]
    fn element_round_trips_bone_density_value() {
        let element: DecimalElement<Extension> = serde_json::from_str("0.887").unwrap();
        assert_eq!(
            element.value.as_ref().map(|v| v.original_string().to_string()),
            Some("0.887".to_string())
        );
        assert_eq!(serde_json::to_string(&element).unwrap(), "0.887");
    }

    #[test]
    fn element_object_form_keeps_extension() {
        let json = r#"{"id": "d1", "value": 3.5}"#;
        let element: DecimalElement<Extension> = serde_json::from_str(json).unwrap();
        assert_eq!(element.id.as_deref(), Some("d1"));
        assert_eq!(element.value.as_ref().and_then(|v| v.value()), Some(dec!(3.5)));
    }

    #[test]
    fn out_of_range_text_still_round_trips() {
        let text = "1e100";
        let decimal: PreciseDecimal = serde_json::from_str(text).unwrap();
        assert_eq!(decimal.value(), None);
        assert_eq!(serde_json::to_string(&decimal).unwrap(), text);
    }
}
