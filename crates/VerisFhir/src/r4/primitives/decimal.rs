use crate::DecimalElement;
use crate::r4::complex_types::Extension;

/// FHIR `decimal` primitive; the textual form of the number is preserved.
pub type Decimal = DecimalElement<Extension>;
