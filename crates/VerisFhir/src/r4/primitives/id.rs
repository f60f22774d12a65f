use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `id` primitive: a logical identifier within a resource.
pub type Id = Element<std::string::String, Extension>;
