use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `code` primitive: a token from some code system.
pub type Code = Element<std::string::String, Extension>;
