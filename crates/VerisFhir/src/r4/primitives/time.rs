use crate::Element;
use crate::PrecisionTime;
use crate::r4::complex_types::Extension;

/// FHIR `time` primitive: a time of day without timezone.
pub type Time = Element<PrecisionTime, Extension>;
