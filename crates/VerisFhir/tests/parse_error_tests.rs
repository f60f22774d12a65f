//! Decoding failures: each malformed document must map to the right
//! error variant, and near-miss values must not decode loosely.

use veris_fhir_lib::r4::{Observation, Resource};
use veris_fhir_lib::{ParseError, decode, decode_resource};

#[test]
fn test_truncated_document_is_syntax_error() {
    let result = decode_resource(r#"{"resourceType": "Patient", "active": tru"#);
    assert!(matches!(result, Err(ParseError::Syntax(_))));
}

#[test]
fn test_unknown_resource_type() {
    let result = decode_resource(r#"{"resourceType": "Starship", "name": "Heart of Gold"}"#);
    match result {
        Err(ParseError::UnknownType(name)) => assert_eq!(name, "Starship"),
        other => panic!("expected UnknownType, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_code_outside_value_set_is_rejected() {
    let json = r#"{
        "resourceType": "Task",
        "status": "in_progress",
        "intent": "order"
    }"#;
    let result = decode_resource(json);
    match result {
        Err(ParseError::Structure { target, message }) => {
            assert_eq!(target, "Task");
            assert!(message.contains("in_progress"), "message: {}", message);
        }
        other => panic!("expected Structure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_required_field() {
    // Observation.status is mandatory.
    let json = r#"{
        "resourceType": "Observation",
        "code": {"text": "weight"}
    }"#;
    assert!(matches!(
        decode_resource(json),
        Err(ParseError::Structure { .. })
    ));
}

#[test]
fn test_conflicting_choice_keys_are_rejected() {
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "note"},
        "valueString": "high",
        "valueQuantity": {"value": 7.2}
    }"#;
    let result = decode_resource(json);
    match result {
        Err(ParseError::Structure { message, .. }) => {
            assert!(message.contains("conflicting"), "message: {}", message);
        }
        other => panic!("expected Structure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_wrong_value_type_is_structure_error() {
    let json = r#"{
        "resourceType": "Organization",
        "name": {"unexpected": "object"}
    }"#;
    assert!(matches!(
        decode_resource(json),
        Err(ParseError::Structure { .. })
    ));
}

#[test]
fn test_decode_typed_reports_target_type() {
    let result = decode::<Observation>(r#"{"code": {"text": "weight"}}"#);
    match result {
        Err(ParseError::Structure { target, .. }) => assert_eq!(target, "Observation"),
        other => panic!("expected Structure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    // Forward compatibility: unrecognized properties do not fail the
    // decode (they are dropped, so this document does not round-trip).
    let json = r#"{
        "resourceType": "Organization",
        "name": "Acme",
        "futureProperty": {"anything": [1, 2, 3]}
    }"#;
    let resource = decode_resource(json).unwrap();
    let Resource::Organization(org) = resource else {
        panic!("expected an Organization");
    };
    assert_eq!(org.name.as_ref().and_then(|n| n.value.as_deref()), Some("Acme"));
}

#[test]
fn test_unknown_choice_stem_key_is_ignored() {
    // valueAttachment is a real key in later releases but not part of
    // this Observation value choice; it is treated like any other
    // unknown key rather than failing the choice.
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "note"},
        "valueAttachment": {"contentType": "application/pdf"}
    }"#;
    let resource = decode_resource(json).unwrap();
    let Resource::Observation(obs) = resource else {
        panic!("expected an Observation");
    };
    assert!(obs.value.is_none());
}

#[test]
fn test_malformed_date_is_rejected() {
    let json = r#"{
        "resourceType": "Patient",
        "birthDate": "25-12-1974"
    }"#;
    assert!(matches!(
        decode_resource(json),
        Err(ParseError::Structure { .. })
    ));
}

#[test]
fn test_choice_exclusivity_accepts_single_key() {
    let json = r#"{
        "resourceType": "Patient",
        "deceasedBoolean": false
    }"#;
    let resource = decode_resource(json).unwrap();
    let Resource::Patient(patient) = resource else {
        panic!("expected a Patient");
    };
    assert!(patient.deceased.is_some());
    assert!(patient.multiple_birth.is_none());
}
