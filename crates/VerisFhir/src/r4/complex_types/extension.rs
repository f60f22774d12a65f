use veris_macros::FhirSerde;

use crate::r4::complex_types::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, HumanName, Identifier,
    Meta, Period, Quantity, Range, Ratio, Reference, SampledData, Signature, Timing,
};
use crate::r4::primitives::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer,
    Markdown, Oid, PositiveInt, String, Time, UnsignedInt, Uri, Url, Uuid,
};

/// The value carried by an extension, one `value[x]` key per instance.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ExtensionValue {
    #[fhir_serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueCanonical")]
    Canonical(Canonical),
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "valueId")]
    Id(Id),
    #[fhir_serde(rename = "valueInstant")]
    Instant(Instant),
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueMarkdown")]
    Markdown(Markdown),
    #[fhir_serde(rename = "valueOid")]
    Oid(Oid),
    #[fhir_serde(rename = "valuePositiveInt")]
    PositiveInt(PositiveInt),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    #[fhir_serde(rename = "valueUrl")]
    Url(Url),
    #[fhir_serde(rename = "valueUuid")]
    Uuid(Uuid),
    #[fhir_serde(rename = "valueAddress")]
    Address(Address),
    #[fhir_serde(rename = "valueAnnotation")]
    Annotation(Annotation),
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    #[fhir_serde(rename = "valueContactPoint")]
    ContactPoint(ContactPoint),
    #[fhir_serde(rename = "valueHumanName")]
    HumanName(HumanName),
    #[fhir_serde(rename = "valueIdentifier")]
    Identifier(Identifier),
    #[fhir_serde(rename = "valueMeta")]
    Meta(Meta),
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
    #[fhir_serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir_serde(rename = "valueSignature")]
    Signature(Signature),
    #[fhir_serde(rename = "valueTiming")]
    Timing(Timing),
}

/// Additional content defined by an implementation guide. Extensions nest:
/// an extension with no value carries sub-extensions instead.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Extension {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Source of the definition for the extension. Always present, and
    /// always a bare JSON string with no `_url` companion.
    pub url: std::string::String,
    #[fhir_serde(flatten)]
    pub value: Option<ExtensionValue>,
}
