use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{AdministrativeGender, LinkType};
use crate::r4::complex_types::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::r4::primitives::{Boolean, Code, Date, DateTime, Id, Integer, Uri};
use crate::r4::resources::Resource;

/// Whether the patient has died, as a flag or as the time of death.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "deceased")]
pub enum PatientDeceased {
    #[fhir_serde(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "deceasedDateTime")]
    DateTime(DateTime),
}

/// Whether the patient is part of a multiple birth, as a flag or an order.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "multipleBirth")]
pub enum PatientMultipleBirth {
    #[fhir_serde(rename = "multipleBirthBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "multipleBirthInteger")]
    Integer(Integer),
}

/// Demographics and administrative information about a person receiving
/// care.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Patient {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub active: Option<Boolean>,
    pub name: Option<Vec<HumanName>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub gender: Option<Element<AdministrativeGender, Extension>>,
    pub birth_date: Option<Date>,
    #[fhir_serde(flatten)]
    pub deceased: Option<PatientDeceased>,
    pub address: Option<Vec<Address>>,
    pub marital_status: Option<CodeableConcept>,
    #[fhir_serde(flatten)]
    pub multiple_birth: Option<PatientMultipleBirth>,
    pub photo: Option<Vec<Attachment>>,
    pub contact: Option<Vec<PatientContact>>,
    pub communication: Option<Vec<PatientCommunication>>,
    pub general_practitioner: Option<Vec<Reference>>,
    pub managing_organization: Option<Reference>,
    pub link: Option<Vec<PatientLink>>,
}

/// A person to contact about the patient, such as next of kin.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientContact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relationship: Option<Vec<CodeableConcept>>,
    pub name: Option<HumanName>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Address>,
    pub gender: Option<Element<AdministrativeGender, Extension>>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
}

/// A language the patient can use to communicate about their health.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientCommunication {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub language: CodeableConcept,
    pub preferred: Option<Boolean>,
}

/// A link to another Patient or RelatedPerson record for the same person.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub other: Reference,
    #[fhir_serde(rename = "type")]
    pub type_: Element<LinkType, Extension>,
}
