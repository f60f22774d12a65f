use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `base64Binary` primitive: base64-encoded bytes, kept as text.
pub type Base64Binary = Element<std::string::String, Extension>;
