use veris_macros::FhirSerde;

use crate::r4::complex_types::{Coding, Extension};
use crate::r4::primitives::{Canonical, Id, Instant, Uri};

/// Metadata maintained by the infrastructure: version, profiles, tags.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Meta {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub version_id: Option<Id>,
    pub last_updated: Option<Instant>,
    pub source: Option<Uri>,
    pub profile: Option<Vec<Canonical>>,
    pub security: Option<Vec<Coding>>,
    pub tag: Option<Vec<Coding>>,
}
