use veris_macros::FhirSerde;

use crate::r4::complex_types::{Extension, Quantity};

/// A set of values bounded by low and high quantities.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Range {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
}
