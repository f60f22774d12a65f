use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `oid` primitive: an OID expressed as a `urn:oid:` URI.
pub type Oid = Element<std::string::String, Extension>;
