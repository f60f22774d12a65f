use veris_macros::FhirSerde;

use crate::r4::complex_types::{Extension, Quantity};
use crate::r4::primitives::{Decimal, PositiveInt, String};

/// A series of measurements taken at regular intervals from a device.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct SampledData {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub origin: Quantity,
    pub period: Decimal,
    pub factor: Option<Decimal>,
    pub lower_limit: Option<Decimal>,
    pub upper_limit: Option<Decimal>,
    pub dimensions: PositiveInt,
    /// The decimal values, space separated, with `E`, `U`, and `L` markers.
    pub data: Option<String>,
}
