use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `markdown` primitive: a string that may contain markdown.
pub type Markdown = Element<std::string::String, Extension>;
