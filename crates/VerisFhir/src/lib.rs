//! Typed client SDK for HL7 FHIR R4 JSON.
//!
//! The crate maps the R4 resource and datatype definitions onto plain Rust
//! structs and enums ([`r4`]) and implements the FHIR JSON representation
//! rules on top of serde: primitive elements with `_field` extension
//! companions, choice (`[x]`) fields, split primitive arrays, contained
//! resources and the `resourceType`-tagged [`r4::Resource`] union.
//!
//! Decoding and encoding are pure functions over strings, exposed in
//! [`parse`]. The round-trip contract is that any accepted document
//! re-encodes to a JSON-equal document: absent fields stay absent, array
//! order is preserved, and decimals keep their textual form.

pub mod date_time;
pub mod element;
pub mod error;
pub mod parse;
pub mod precise_decimal;
pub mod r4;

pub use date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
pub use element::Element;
pub use error::ParseError;
pub use parse::{decode, decode_resource, encode, encode_pretty};
pub use precise_decimal::{DecimalElement, PreciseDecimal};
