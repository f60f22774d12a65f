use veris_macros::FhirSerde;

use crate::r4::complex_types::{Extension, Reference};
use crate::r4::primitives::{DateTime, Markdown, String};

/// Who made the annotation: a resource reference or a plain name.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "author")]
pub enum AnnotationAuthor {
    #[fhir_serde(rename = "authorReference")]
    Reference(Reference),
    #[fhir_serde(rename = "authorString")]
    String(String),
}

/// A text note attached to a resource, with optional author and timestamp.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Annotation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    pub time: Option<DateTime>,
    pub text: Markdown,
}
