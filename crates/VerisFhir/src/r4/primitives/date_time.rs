use crate::Element;
use crate::PrecisionDateTime;
use crate::r4::complex_types::Extension;

/// FHIR `dateTime` primitive: a possibly partial date and time.
pub type DateTime = Element<PrecisionDateTime, Extension>;
