use veris_macros::FhirSerde;

use crate::r4::complex_types::Extension;
use crate::r4::primitives::DateTime;

/// A time range bounded by inclusive start and end instants.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Period {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}
