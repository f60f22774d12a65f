use crate::Element;
use crate::PrecisionInstant;
use crate::r4::complex_types::Extension;

/// FHIR `instant` primitive: a fully specified timestamp with timezone.
pub type Instant = Element<PrecisionInstant, Extension>;
