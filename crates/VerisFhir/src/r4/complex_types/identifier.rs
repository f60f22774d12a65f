use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::IdentifierUse;
use crate::r4::complex_types::{CodeableConcept, Extension, Period, Reference};
use crate::r4::primitives::{String, Uri};

/// A business identifier: a value that is unique within a named system.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Identifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Element<IdentifierUse, Extension>>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
    pub system: Option<Uri>,
    pub value: Option<String>,
    pub period: Option<Period>,
    // Boxed to break the Identifier/Reference cycle.
    pub assigner: Option<Box<Reference>>,
}
