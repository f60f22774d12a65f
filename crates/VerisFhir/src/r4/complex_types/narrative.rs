use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::NarrativeStatus;
use crate::r4::complex_types::Extension;
use crate::r4::primitives::Xhtml;

/// Human-readable summary of a resource, as an XHTML fragment.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Narrative {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub status: Element<NarrativeStatus, Extension>,
    pub div: Xhtml,
}
