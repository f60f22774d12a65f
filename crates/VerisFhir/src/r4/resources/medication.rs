use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::MedicationStatus;
use crate::r4::complex_types::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Ratio, Reference,
};
use crate::r4::primitives::{Boolean, Code, DateTime, Id, String, Uri};
use crate::r4::resources::Resource;

/// A medication definition, typically referenced from orders and
/// dispense records. Manufacturers are often carried as contained
/// Organization resources referenced by `#id`.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Medication {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: Option<CodeableConcept>,
    pub status: Option<Element<MedicationStatus, Extension>>,
    pub manufacturer: Option<Reference>,
    pub form: Option<CodeableConcept>,
    pub amount: Option<Ratio>,
    pub ingredient: Option<Vec<MedicationIngredient>>,
    pub batch: Option<MedicationBatch>,
}

/// The substance of an ingredient, coded or as a resource reference.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicationIngredientItem {
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// An active or inactive ingredient of the medication.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationIngredient {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir_serde(flatten)]
    pub item: MedicationIngredientItem,
    pub is_active: Option<Boolean>,
    pub strength: Option<Ratio>,
}

/// Lot number and expiry of a packaged medication.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct MedicationBatch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<DateTime>,
}
