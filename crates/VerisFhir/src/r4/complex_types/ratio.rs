use veris_macros::FhirSerde;

use crate::r4::complex_types::{Extension, Quantity};

/// A relationship between two quantities, e.g. 250mg per tablet.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Ratio {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}
