use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `uri` primitive.
pub type Uri = Element<std::string::String, Extension>;
