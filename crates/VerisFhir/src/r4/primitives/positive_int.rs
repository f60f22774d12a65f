use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `positiveInt` primitive (1 or greater).
pub type PositiveInt = Element<u32, Extension>;
