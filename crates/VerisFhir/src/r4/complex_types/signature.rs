use veris_macros::FhirSerde;

use crate::r4::complex_types::{Coding, Extension, Reference};
use crate::r4::primitives::{Base64Binary, Code, Instant};

/// A digital signature over a bundle or document.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Signature {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<Coding>,
    pub when: Instant,
    pub who: Reference,
    pub on_behalf_of: Option<Reference>,
    pub target_format: Option<Code>,
    pub sig_format: Option<Code>,
    pub data: Option<Base64Binary>,
}
