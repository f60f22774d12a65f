use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::AdministrativeGender;
use crate::r4::complex_types::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::r4::primitives::{Boolean, Code, Date, Id, Uri};
use crate::r4::resources::Resource;

/// A person with a formal responsibility in the provision of healthcare.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Practitioner {
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
    pub address: Option<Vec<Address>>,
    pub gender: Option<Element<AdministrativeGender, Extension>>,
    pub birth_date: Option<Date>,
    pub photo: Option<Vec<Attachment>>,
    pub qualification: Option<Vec<PractitionerQualification>>,
    pub communication: Option<Vec<CodeableConcept>>,
}

/// A certification or training the practitioner holds.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PractitionerQualification {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: CodeableConcept,
    pub period: Option<Period>,
    pub issuer: Option<Reference>,
}
