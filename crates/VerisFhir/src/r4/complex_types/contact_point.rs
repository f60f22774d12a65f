use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{ContactPointSystem, ContactPointUse};
use crate::r4::complex_types::{Extension, Period};
use crate::r4::primitives::{PositiveInt, String};

/// A contact detail such as a phone number or email address.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ContactPoint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Element<ContactPointSystem, Extension>>,
    pub value: Option<String>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Element<ContactPointUse, Extension>>,
    pub rank: Option<PositiveInt>,
    pub period: Option<Period>,
}
