use veris_macros::FhirSerde;

use crate::r4::complex_types::{Coding, Extension};
use crate::r4::primitives::String;

/// A concept, expressed as one or more codings and/or free text.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct CodeableConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub coding: Option<Vec<Coding>>,
    pub text: Option<String>,
}
