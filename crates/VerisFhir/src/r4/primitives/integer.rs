use crate::Element;
use crate::r4::complex_types::Extension;

/// FHIR `integer` primitive (32-bit signed).
pub type Integer = Element<i32, Extension>;
