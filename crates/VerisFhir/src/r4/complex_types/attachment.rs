use veris_macros::FhirSerde;

use crate::r4::complex_types::Extension;
use crate::r4::primitives::{Base64Binary, Code, DateTime, String, UnsignedInt, Url};

/// Content defined elsewhere or carried inline as base64 data.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Attachment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub content_type: Option<Code>,
    pub language: Option<Code>,
    pub data: Option<Base64Binary>,
    pub url: Option<Url>,
    pub size: Option<UnsignedInt>,
    pub hash: Option<Base64Binary>,
    pub title: Option<String>,
    pub creation: Option<DateTime>,
}
