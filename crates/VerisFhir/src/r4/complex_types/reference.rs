use veris_macros::FhirSerde;

use crate::r4::complex_types::{Extension, Identifier};
use crate::r4::primitives::{String, Uri};

/// A reference from one resource to another.
///
/// Local references (`#id`) point into the containing resource's
/// `contained` list; they are carried as-is and never dereferenced here.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Reference {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub reference: Option<String>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<Uri>,
    // Boxed to break the Reference/Identifier cycle.
    pub identifier: Option<Box<Identifier>>,
    pub display: Option<String>,
}
