use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `string` primitive.
pub type String = Element<std::string::String, Extension>;
