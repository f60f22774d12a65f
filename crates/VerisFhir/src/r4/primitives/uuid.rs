use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `uuid` primitive: a UUID expressed as a `urn:uuid:` URI.
pub type Uuid = Element<std::string::String, Extension>;
