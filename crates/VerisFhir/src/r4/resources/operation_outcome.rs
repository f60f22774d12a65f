use veris_macros::FhirSerde;

use crate::Element;
use crate::r4::code_systems::{IssueSeverity, IssueType};
use crate::r4::complex_types::{CodeableConcept, Extension, Meta, Narrative};
use crate::r4::primitives::{Code, Id, String, Uri};
use crate::r4::resources::Resource;

/// A collection of error, warning, or information messages resulting from
/// an operation.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct OperationOutcome {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub issue: Vec<OperationOutcomeIssue>,
}

/// A single issue: severity, a coded kind, and where it was found.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct OperationOutcomeIssue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub severity: Element<IssueSeverity, Extension>,
    pub code: Element<IssueType, Extension>,
    pub details: Option<CodeableConcept>,
    pub diagnostics: Option<String>,
    pub location: Option<Vec<String>>,
    pub expression: Option<Vec<String>>,
}
