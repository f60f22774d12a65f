use veris_macros::FhirSerde;

use crate::r4::complex_types::Extension;
use crate::r4::primitives::{Boolean, Code, String, Uri};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Coding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Uri>,
    pub version: Option<String>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub user_selected: Option<Boolean>,
}
