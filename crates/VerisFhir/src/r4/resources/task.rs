use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{RequestPriority, TaskIntent, TaskStatus};
use crate::r4::complex_types::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Extension, HumanName,
    Identifier, Meta, Narrative, Period, Quantity, Range, Ratio, Reference, SampledData, Signature,
    Timing,
};
use crate::r4::primitives::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer,
    Markdown, Oid, PositiveInt, String, Time, UnsignedInt, Uri, Url, Uuid,
};
use crate::r4::resources::Resource;

/// A task to be performed, tracked from request through completion.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Task {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instantiates_canonical: Option<Canonical>,
    pub instantiates_uri: Option<Uri>,
    pub based_on: Option<Vec<Reference>>,
    pub group_identifier: Option<Identifier>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Element<TaskStatus, Extension>,
    pub status_reason: Option<CodeableConcept>,
    pub business_status: Option<CodeableConcept>,
    pub intent: Element<TaskIntent, Extension>,
    pub priority: Option<Element<RequestPriority, Extension>>,
    pub code: Option<CodeableConcept>,
    pub description: Option<String>,
    pub focus: Option<Reference>,
    #[fhir_serde(rename = "for")]
    pub for_: Option<Reference>,
    pub encounter: Option<Reference>,
    pub execution_period: Option<Period>,
    pub authored_on: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer_type: Option<Vec<CodeableConcept>>,
    pub owner: Option<Reference>,
    pub location: Option<Reference>,
    pub reason_code: Option<CodeableConcept>,
    pub reason_reference: Option<Reference>,
    pub insurance: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub relevant_history: Option<Vec<Reference>>,
    pub restriction: Option<TaskRestriction>,
    pub input: Option<Vec<TaskInput>>,
    pub output: Option<Vec<TaskOutput>>,
}

/// Constraints on how the task should be fulfilled.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct TaskRestriction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub repetitions: Option<PositiveInt>,
    pub period: Option<Period>,
    pub recipient: Option<Vec<Reference>>,
}

/// The value of a task input or output; the R4 definition admits any
/// datatype here, so the variant list is wide.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum TaskValue {
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

/// Information the task needs in order to be performed.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TaskInput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "type")]
    pub type_: CodeableConcept,
    #[fhir_serde(flatten)]
    pub value: TaskValue,
}

/// Information produced by performing the task.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TaskOutput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "type")]
    pub type_: CodeableConcept,
    #[fhir_serde(flatten)]
    pub value: TaskValue,
}
