use crate::Element;
use crate::PrecisionDate;
use crate::r4::complex_types::Extension;

/// FHIR `date` primitive: a possibly partial calendar date.
pub type Date = Element<PrecisionDate, Extension>;
