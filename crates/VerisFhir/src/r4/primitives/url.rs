use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `url` primitive: a URI that locates a resource.
pub type Url = Element<std::string::String, Extension>;
