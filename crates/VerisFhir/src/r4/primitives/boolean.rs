use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `boolean` primitive.
pub type Boolean = Element<bool, Extension>;
