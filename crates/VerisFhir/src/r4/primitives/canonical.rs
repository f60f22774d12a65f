use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `canonical` primitive: a URI referencing a canonical resource.
pub type Canonical = Element<std::string::String, Extension>;
