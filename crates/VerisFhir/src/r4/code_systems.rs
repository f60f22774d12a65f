//! Required-binding code systems, modeled as closed enums.
//!
//! Fields whose R4 binding strength is `required` use these instead of a
//! free-form `code`, so a document carrying a string outside the published
//! value set is rejected at decode time. Each enum serializes to the exact
//! code token.

use serde::{Deserialize, Serialize};

/// <http://hl7.org/fhir/administrative-gender>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdministrativeGender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "unknown")]
    Unknown,
}

/// <http://hl7.org/fhir/address-use>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressUse {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "work")]
    Work,
    #[serde(rename = "temp")]
    Temp,
    #[serde(rename = "old")]
    Old,
    #[serde(rename = "billing")]
    Billing,
}

/// <http://hl7.org/fhir/address-type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    #[serde(rename = "postal")]
    Postal,
    #[serde(rename = "physical")]
    Physical,
    #[serde(rename = "both")]
    Both,
}

/// <http://hl7.org/fhir/bundle-type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleType {
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "transaction")]
    Transaction,
    #[serde(rename = "transaction-response")]
    TransactionResponse,
    #[serde(rename = "batch")]
    Batch,
    #[serde(rename = "batch-response")]
    BatchResponse,
    #[serde(rename = "history")]
    History,
    #[serde(rename = "searchset")]
    Searchset,
    #[serde(rename = "collection")]
    Collection,
}

/// <http://hl7.org/fhir/contact-point-system>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPointSystem {
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "fax")]
    Fax,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "pager")]
    Pager,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "other")]
    Other,
}

/// <http://hl7.org/fhir/contact-point-use>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPointUse {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "work")]
    Work,
    #[serde(rename = "temp")]
    Temp,
    #[serde(rename = "old")]
    Old,
    #[serde(rename = "mobile")]
    Mobile,
}

/// <http://hl7.org/fhir/http-verb>; used in `Bundle.entry.request.method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HTTPVerb {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "PATCH")]
    Patch,
}

/// <http://hl7.org/fhir/identifier-use>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierUse {
    #[serde(rename = "usual")]
    Usual,
    #[serde(rename = "official")]
    Official,
    #[serde(rename = "temp")]
    Temp,
    #[serde(rename = "secondary")]
    Secondary,
    #[serde(rename = "old")]
    Old,
}

/// <http://hl7.org/fhir/issue-severity>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueSeverity {
    #[serde(rename = "fatal")]
    Fatal,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "information")]
    Information,
}

/// <http://hl7.org/fhir/issue-type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    #[serde(rename = "invalid")]
    Invalid,
    #[serde(rename = "structure")]
    Structure,
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "invariant")]
    Invariant,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "forbidden")]
    Forbidden,
    #[serde(rename = "suppressed")]
    Suppressed,
    #[serde(rename = "processing")]
    Processing,
    #[serde(rename = "not-supported")]
    NotSupported,
    #[serde(rename = "duplicate")]
    Duplicate,
    #[serde(rename = "multiple-matches")]
    MultipleMatches,
    #[serde(rename = "not-found")]
    NotFound,
    #[serde(rename = "deleted")]
    Deleted,
    #[serde(rename = "too-long")]
    TooLong,
    #[serde(rename = "code-invalid")]
    CodeInvalid,
    #[serde(rename = "extension")]
    Extension,
    #[serde(rename = "too-costly")]
    TooCostly,
    #[serde(rename = "business-rule")]
    BusinessRule,
    #[serde(rename = "conflict")]
    Conflict,
    #[serde(rename = "transient")]
    Transient,
    #[serde(rename = "lock-error")]
    LockError,
    #[serde(rename = "no-store")]
    NoStore,
    #[serde(rename = "exception")]
    Exception,
    #[serde(rename = "timeout")]
    Timeout,
    #[serde(rename = "incomplete")]
    Incomplete,
    #[serde(rename = "throttled")]
    Throttled,
    #[serde(rename = "informational")]
    Informational,
}

/// <http://hl7.org/fhir/link-type>; used in `Patient.link.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkType {
    #[serde(rename = "replaced-by")]
    ReplacedBy,
    #[serde(rename = "replaces")]
    Replaces,
    #[serde(rename = "refer")]
    Refer,
    #[serde(rename = "seealso")]
    Seealso,
}

/// <http://hl7.org/fhir/CodeSystem/medication-status>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
    #[serde(rename = "entered-in-error")]
    EnteredInError,
}

/// <http://hl7.org/fhir/name-use>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameUse {
    #[serde(rename = "usual")]
    Usual,
    #[serde(rename = "official")]
    Official,
    #[serde(rename = "temp")]
    Temp,
    #[serde(rename = "nickname")]
    Nickname,
    #[serde(rename = "anonymous")]
    Anonymous,
    #[serde(rename = "old")]
    Old,
    #[serde(rename = "maiden")]
    Maiden,
}

/// <http://hl7.org/fhir/narrative-status>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeStatus {
    #[serde(rename = "generated")]
    Generated,
    #[serde(rename = "extensions")]
    Extensions,
    #[serde(rename = "additional")]
    Additional,
    #[serde(rename = "empty")]
    Empty,
}

/// <http://hl7.org/fhir/observation-status>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationStatus {
    #[serde(rename = "registered")]
    Registered,
    #[serde(rename = "preliminary")]
    Preliminary,
    #[serde(rename = "final")]
    Final,
    #[serde(rename = "amended")]
    Amended,
    #[serde(rename = "corrected")]
    Corrected,
    #[serde(rename = "cancelled")]
    Cancelled,
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    #[serde(rename = "unknown")]
    Unknown,
}

/// <http://hl7.org/fhir/quantity-comparator>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityComparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
}

/// <http://hl7.org/fhir/request-priority>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPriority {
    #[serde(rename = "routine")]
    Routine,
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "stat")]
    Stat,
}

/// <http://hl7.org/fhir/search-entry-mode>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEntryMode {
    #[serde(rename = "match")]
    Match,
    #[serde(rename = "include")]
    Include,
    #[serde(rename = "outcome")]
    Outcome,
}

/// <http://hl7.org/fhir/task-intent>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskIntent {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "proposal")]
    Proposal,
    #[serde(rename = "plan")]
    Plan,
    #[serde(rename = "order")]
    Order,
    #[serde(rename = "original-order")]
    OriginalOrder,
    #[serde(rename = "reflex-order")]
    ReflexOrder,
    #[serde(rename = "filler-order")]
    FillerOrder,
    #[serde(rename = "instance-order")]
    InstanceOrder,
    #[serde(rename = "option")]
    Option,
}

/// <http://hl7.org/fhir/task-status>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "requested")]
    Requested,
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "cancelled")]
    Cancelled,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "on-hold")]
    OnHold,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "entered-in-error")]
    EnteredInError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_to_their_token() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&HTTPVerb::Post).unwrap(), "\"POST\"");
        assert_eq!(
            serde_json::to_string(&QuantityComparator::LessOrEqual).unwrap(),
            "\"<=\""
        );
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"in_progress\"").is_err());
        assert!(serde_json::from_str::<ObservationStatus>("\"FINAL\"").is_err());
    }
}
