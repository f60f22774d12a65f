use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `unsignedInt` primitive (0 or greater).
pub type UnsignedInt = Element<u32, Extension>;
