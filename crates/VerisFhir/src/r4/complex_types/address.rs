use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{AddressType, AddressUse};
use crate::r4::complex_types::{Extension, Period};
use crate::r4::primitives::String;

/// A postal address, in text and/or parts.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Address {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Element<AddressUse, Extension>>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<Element<AddressType, Extension>>,
    pub text: Option<String>,
    pub line: Option<Vec<String>>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub period: Option<Period>,
}
