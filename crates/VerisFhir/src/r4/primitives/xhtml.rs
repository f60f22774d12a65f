use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `xhtml` fragment, as used in `Narrative.div`.
pub type Xhtml = Element<std::string::String, Extension>;
