use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::NameUse;
use crate::r4::complex_types::{Extension, Period};
use crate::r4::primitives::String;

/// A human name, with the parts kept separate and repeatable.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct HumanName {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Element<NameUse, Extension>>,
    pub text: Option<String>,
    pub family: Option<String>,
    pub given: Option<Vec<String>>,
    pub prefix: Option<Vec<String>>,
    pub suffix: Option<Vec<String>>,
    pub period: Option<Period>,
}
