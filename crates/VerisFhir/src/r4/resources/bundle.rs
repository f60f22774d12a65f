use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{BundleType, HTTPVerb, SearchEntryMode};
use crate::r4::complex_types::{Extension, Identifier, Meta, Signature};
use crate::r4::primitives::{Code, Decimal, Id, Instant, String, Uri, UnsignedInt};
use crate::r4::resources::Resource;

/// A container for a collection of resources: a message, a document, a
/// transaction, or a page of search results.
///
/// Bundle is not a DomainResource: it has no narrative, no contained
/// resources, and no extensions of its own.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Bundle {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub identifier: Option<Identifier>,
    #[fhir_serde(rename = "type")]
    pub type_: Element<BundleType, Extension>,
    pub timestamp: Option<Instant>,
    pub total: Option<UnsignedInt>,
    pub link: Option<Vec<BundleLink>>,
    pub entry: Option<Vec<BundleEntry>>,
    pub signature: Option<Signature>,
}

/// A navigation link related to the bundle, e.g. `self` or `next`.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relation: String,
    pub url: Uri,
}

/// One resource in the bundle, with its search, request, or response
/// context. Entry order is significant and preserved exactly.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntry {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link: Option<Vec<BundleLink>>,
    pub full_url: Option<Uri>,
    pub resource: Option<Resource>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
}

/// Why this entry is in a searchset and how well it matched.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntrySearch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Option<Element<SearchEntryMode, Extension>>,
    pub score: Option<Decimal>,
}

/// The HTTP request this entry stands for in a transaction or batch.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntryRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub method: Element<HTTPVerb, Extension>,
    pub url: Uri,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<Instant>,
    pub if_match: Option<String>,
    pub if_none_exist: Option<String>,
}

/// The server's answer for this entry in a transaction-response or
/// batch-response.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntryResponse {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: String,
    pub location: Option<Uri>,
    pub etag: Option<String>,
    pub last_modified: Option<Instant>,
    pub outcome: Option<Resource>,
}
