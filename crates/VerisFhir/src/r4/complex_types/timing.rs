use veris_macros::FhirSerde;

use crate::r4::complex_types::{CodeableConcept, Duration, Extension, Period, Range};
use crate::r4::primitives::{Code, DateTime, Decimal, PositiveInt, Time, UnsignedInt};

/// Outer limit on the repeat schedule: a duration, a range, or a period.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "bounds")]
pub enum TimingRepeatBounds {
    #[fhir_serde(rename = "boundsDuration")]
    Duration(Duration),
    #[fhir_serde(rename = "boundsRange")]
    Range(Range),
    #[fhir_serde(rename = "boundsPeriod")]
    Period(Period),
}

/// The recurrence rule portion of a [`Timing`].
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct TimingRepeat {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(flatten)]
    pub bounds: Option<TimingRepeatBounds>,
    pub count: Option<PositiveInt>,
    pub count_max: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub duration_max: Option<Decimal>,
    pub duration_unit: Option<Code>,
    pub frequency: Option<PositiveInt>,
    pub frequency_max: Option<PositiveInt>,
    pub period: Option<Decimal>,
    pub period_max: Option<Decimal>,
    pub period_unit: Option<Code>,
    pub day_of_week: Option<Vec<Code>>,
    pub time_of_day: Option<Vec<Time>>,
    pub when: Option<Vec<Code>>,
    pub offset: Option<UnsignedInt>,
}

/// When an event should happen: explicit timestamps, a recurrence rule,
/// and/or a coded schedule such as BID.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Timing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
}
