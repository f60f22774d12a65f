pub mod bundle;
pub use bundle::*;

pub mod medication;
pub use medication::*;

pub mod observation;
pub use observation::*;

pub mod operation_outcome;
pub use operation_outcome::*;

pub mod organization;
pub use organization::*;

pub mod patient;
pub use patient::*;

pub mod practitioner;
pub use practitioner::*;

pub mod task;
pub use task::*;

use serde::{Deserialize, Serialize};

/// Closed union over every resource type this crate models, discriminated
/// by the `resourceType` property.
///
/// Documents naming any other `resourceType` are rejected with an
/// unknown-type error rather than decoded loosely; see
/// [`crate::parse::decode_resource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Bundle(Bundle),
    Medication(Medication),
    Observation(Observation),
    OperationOutcome(OperationOutcome),
    Organization(Organization),
    Patient(Patient),
    Practitioner(Practitioner),
    Task(Task),
}

impl Resource {
    /// Every `resourceType` value with a model here, in the enum's order.
    pub const TYPE_NAMES: &'static [&'static str] = &[
        "Bundle",
        "Medication",
        "Observation",
        "OperationOutcome",
        "Organization",
        "Patient",
        "Practitioner",
        "Task",
    ];

    /// The `resourceType` discriminator of this resource.
    pub fn resource_type(&self) -> &'static str {
        match self {
            Resource::Bundle(_) => "Bundle",
            Resource::Medication(_) => "Medication",
            Resource::Observation(_) => "Observation",
            Resource::OperationOutcome(_) => "OperationOutcome",
            Resource::Organization(_) => "Organization",
            Resource::Patient(_) => "Patient",
            Resource::Practitioner(_) => "Practitioner",
            Resource::Task(_) => "Task",
        }
    }
}

// A derived PartialEq here participates in a huge MIR inlining cycle
// through Bundle -> Resource -> Bundle; keeping the comparison out of line
// sidesteps it.
impl PartialEq for Resource {
    #[inline(never)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Resource::Bundle(a), Resource::Bundle(b)) => a == b,
            (Resource::Medication(a), Resource::Medication(b)) => a == b,
            (Resource::Observation(a), Resource::Observation(b)) => a == b,
            (Resource::OperationOutcome(a), Resource::OperationOutcome(b)) => a == b,
            (Resource::Organization(a), Resource::Organization(b)) => a == b,
            (Resource::Patient(a), Resource::Patient(b)) => a == b,
            (Resource::Practitioner(a), Resource::Practitioner(b)) => a == b,
            (Resource::Task(a), Resource::Task(b)) => a == b,
            _ => false,
        }
    }
}
