use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::ObservationStatus;
use crate::r4::complex_types::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity, Range,
    Ratio, Reference, SampledData, Timing,
};
use crate::r4::primitives::{Boolean, Code, DateTime, Id, Instant, Integer, String, Time, Uri};
use crate::r4::resources::Resource;

/// The clinically relevant time of the observation.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum ObservationEffective {
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
    #[fhir_serde(rename = "effectiveTiming")]
    Timing(Timing),
    #[fhir_serde(rename = "effectiveInstant")]
    Instant(Instant),
}

/// The observation result, in whichever datatype fits the measurement.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ObservationValue {
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir_serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// A measurement or assertion made about a subject.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Observation {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Element<ObservationStatus, Extension>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    #[fhir_serde(flatten)]
    pub effective: Option<ObservationEffective>,
    pub issued: Option<Instant>,
    pub performer: Option<Vec<Reference>>,
    #[fhir_serde(flatten)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub body_site: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    pub has_member: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub component: Option<Vec<ObservationComponent>>,
}

/// The range against which a result is interpreted as normal, high, etc.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationReferenceRange {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
    pub applies_to: Option<Vec<CodeableConcept>>,
    pub age: Option<Range>,
    pub text: Option<String>,
}

/// One result of a multi-part observation, e.g. each blood pressure
/// component.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    #[fhir_serde(flatten)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}
