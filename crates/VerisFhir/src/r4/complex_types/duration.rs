use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::QuantityComparator;
use crate::r4::complex_types::Extension;
use crate::r4::primitives::{Code, Decimal, String, Uri};

/// A length of time; structurally a `Quantity` constrained to time units.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Duration {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub value: Option<Decimal>,
    pub comparator: Option<Element<QuantityComparator, Extension>>,
    pub unit: Option<String>,
    pub system: Option<Uri>,
    pub code: Option<Code>,
}
