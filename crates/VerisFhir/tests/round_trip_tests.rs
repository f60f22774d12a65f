//! Whole-document round trips: decode a JSON document, re-encode it, and
//! require JSON equality (key order aside, array order significant).

use veris_fhir_lib::r4::{
    MedicationIngredientItem, ObservationValue, Resource, TaskStatus, TaskValue,
};
use veris_fhir_lib::{decode_resource, encode};

/// Decodes `json`, re-encodes, and asserts the output is JSON-equal to the
/// input. Returns the decoded resource for further assertions.
fn assert_round_trip(json: &str) -> Resource {
    let resource = decode_resource(json).unwrap();
    let encoded = encode(&resource).unwrap();
    let input: serde_json::Value = serde_json::from_str(json).unwrap();
    let output: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(input, output, "re-encoded document differs from input");
    resource
}

#[test]
fn test_organization_example_round_trip() {
    let json = r#"{
        "resourceType": "Organization",
        "id": "hl7",
        "name": "Health Level Seven International",
        "alias": ["HL7 International"],
        "telecom": [
            {"system": "phone", "value": "(+1) 734-677-7777"},
            {"system": "email", "value": "hq@HL7.org"}
        ],
        "address": [
            {
                "line": ["3300 Washtenaw Avenue, Suite 227"],
                "city": "Ann Arbor",
                "state": "MI",
                "postalCode": "48104",
                "country": "USA"
            }
        ],
        "endpoint": [{"reference": "Endpoint/example"}]
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Organization(org) = resource else {
        panic!("expected an Organization");
    };
    assert_eq!(
        org.name.as_ref().and_then(|n| n.value.as_deref()),
        Some("Health Level Seven International")
    );
    // Optional fields absent in the document stay absent in the model.
    assert!(org.active.is_none());
    assert!(org.part_of.is_none());
    assert!(org.text.is_none());
}

#[test]
fn test_transaction_bundle_preserves_entry_order() {
    let json = r#"{
        "resourceType": "Bundle",
        "id": "bundle-transaction",
        "type": "transaction",
        "entry": [
            {
                "fullUrl": "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a",
                "resource": {
                    "resourceType": "Patient",
                    "name": [{"family": "Chalmers", "given": ["Peter", "James"]}],
                    "gender": "male",
                    "birthDate": "1974-12-25"
                },
                "request": {"method": "POST", "url": "Patient"}
            },
            {
                "fullUrl": "urn:uuid:88f151c0-a954-468a-88bd-5ae15c08e059",
                "resource": {
                    "resourceType": "Organization",
                    "id": "1",
                    "name": "Acme Healthcare"
                },
                "request": {"method": "PUT", "url": "Organization/1"}
            },
            {
                "request": {"method": "DELETE", "url": "Patient/old"}
            }
        ]
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Bundle(bundle) = resource else {
        panic!("expected a Bundle");
    };
    let entries = bundle.entry.as_ref().unwrap();
    assert_eq!(entries.len(), 3);
    // Entry order is load-bearing in a transaction and must survive.
    assert!(matches!(entries[0].resource, Some(Resource::Patient(_))));
    assert!(matches!(entries[1].resource, Some(Resource::Organization(_))));
    assert!(entries[2].resource.is_none());
    let urls: Vec<_> = entries
        .iter()
        .map(|e| {
            e.request
                .as_ref()
                .and_then(|r| r.url.value.clone())
                .unwrap()
        })
        .collect();
    assert_eq!(urls, ["Patient", "Organization/1", "Patient/old"]);
}

#[test]
fn test_observation_value_quantity_keeps_decimal_text() {
    let json = r#"{
        "resourceType": "Observation",
        "id": "bmd",
        "status": "final",
        "code": {
            "coding": [
                {
                    "system": "http://loinc.org",
                    "code": "24701-5",
                    "display": "Femur DXA Bone density"
                }
            ],
            "text": "BMD - Left Femur"
        },
        "subject": {"reference": "Patient/pat2"},
        "valueQuantity": {
            "value": 0.887,
            "unit": "g/cm²",
            "system": "http://unitsofmeasure.org",
            "code": "g/cm-2"
        }
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Observation(obs) = resource else {
        panic!("expected an Observation");
    };
    let Some(ObservationValue::Quantity(quantity)) = &obs.value else {
        panic!("expected valueQuantity, got {:?}", obs.value);
    };
    let value = quantity.value.as_ref().unwrap().value.as_ref().unwrap();
    assert_eq!(value.original_string(), "0.887");
    assert_eq!(
        quantity.unit.as_ref().and_then(|u| u.value.as_deref()),
        Some("g/cm²")
    );
    assert!(obs.effective.is_none());
    assert!(obs.component.is_none());
}

#[test]
fn test_task_round_trip_with_io() {
    let json = r#"{
        "resourceType": "Task",
        "id": "example-in-progress",
        "status": "in-progress",
        "intent": "order",
        "priority": "routine",
        "code": {"text": "Refill Request"},
        "for": {"reference": "Patient/f001"},
        "authoredOn": "2016-03-10T22:39:32-04:00",
        "owner": {"reference": "Practitioner/example"},
        "input": [
            {
                "type": {"text": "billing-ref"},
                "valueString": "ABC12345G"
            }
        ],
        "output": [
            {
                "type": {"text": "collected-quantity"},
                "valueQuantity": {"value": 120.5, "unit": "mL"}
            }
        ]
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Task(task) = resource else {
        panic!("expected a Task");
    };
    assert_eq!(task.status.value, Some(TaskStatus::InProgress));
    assert_eq!(
        task.for_.as_ref().and_then(|r| r.reference.as_ref()).and_then(|r| r.value.as_deref()),
        Some("Patient/f001")
    );
    let input = &task.input.as_ref().unwrap()[0];
    assert!(matches!(&input.value, TaskValue::String(s) if s.value.as_deref() == Some("ABC12345G")));
    let output = &task.output.as_ref().unwrap()[0];
    assert!(matches!(output.value, TaskValue::Quantity(_)));
}

#[test]
fn test_medication_keeps_contained_resources() {
    // r## delimiters: the fixture itself contains `"#` in the local
    // reference "#org3".
    let json = r##"{
        "resourceType": "Medication",
        "id": "med0311",
        "contained": [
            {
                "resourceType": "Organization",
                "id": "org3",
                "name": "Sanofi"
            }
        ],
        "code": {
            "coding": [
                {
                    "system": "http://snomed.info/sct",
                    "code": "373994007",
                    "display": "Prednisone 5mg tablet"
                }
            ]
        },
        "status": "active",
        "manufacturer": {"reference": "#org3"},
        "ingredient": [
            {
                "itemCodeableConcept": {
                    "coding": [
                        {
                            "system": "http://snomed.info/sct",
                            "code": "116602009",
                            "display": "Prednisone"
                        }
                    ]
                },
                "isActive": true
            }
        ]
    }"##;

    let resource = assert_round_trip(json);
    let Resource::Medication(med) = resource else {
        panic!("expected a Medication");
    };
    // The contained organization is carried as-is and the local reference
    // is not dereferenced.
    let contained = med.contained.as_ref().unwrap();
    assert_eq!(contained.len(), 1);
    let Resource::Organization(org) = &contained[0] else {
        panic!("expected a contained Organization");
    };
    assert_eq!(org.id.as_ref().and_then(|i| i.value.as_deref()), Some("org3"));
    assert_eq!(
        med.manufacturer
            .as_ref()
            .and_then(|r| r.reference.as_ref())
            .and_then(|r| r.value.as_deref()),
        Some("#org3")
    );
    let ingredient = &med.ingredient.as_ref().unwrap()[0];
    assert!(matches!(
        ingredient.item,
        MedicationIngredientItem::CodeableConcept(_)
    ));
}

#[test]
fn test_backbone_element_id_stays_a_plain_string() {
    // Backbone element ids are bare JSON strings, never the
    // value/underscore-companion pair primitives use.
    let json = r#"{
        "resourceType": "Bundle",
        "type": "batch",
        "entry": [
            {
                "id": "e1",
                "request": {"id": "req-1", "method": "GET", "url": "Patient/1"}
            }
        ]
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Bundle(bundle) = resource else {
        panic!("expected a Bundle");
    };
    let entry = &bundle.entry.as_ref().unwrap()[0];
    assert_eq!(entry.id.as_deref(), Some("e1"));
    assert_eq!(entry.request.as_ref().unwrap().id.as_deref(), Some("req-1"));
}

#[test]
fn test_primitive_extensions_split_and_merge() {
    let json = r#"{
        "resourceType": "Patient",
        "id": "example",
        "birthDate": "1974-12-25",
        "_birthDate": {
            "id": "314159",
            "extension": [
                {
                    "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
                    "valueDateTime": "1974-12-25T14:35:45-05:00"
                }
            ]
        },
        "name": [
            {
                "family": "Chalmers",
                "given": ["Peter", "James"],
                "_given": [null, {"id": "middle-name"}]
            }
        ]
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Patient(patient) = resource else {
        panic!("expected a Patient");
    };
    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(
        birth_date.value.as_ref().map(|d| d.original_string()),
        Some("1974-12-25")
    );
    assert_eq!(birth_date.id.as_deref(), Some("314159"));
    assert_eq!(birth_date.extension.as_ref().map(Vec::len), Some(1));

    let name = &patient.name.as_ref().unwrap()[0];
    let given = name.given.as_ref().unwrap();
    assert_eq!(given.len(), 2);
    assert_eq!(given[0].value.as_deref(), Some("Peter"));
    assert!(given[0].id.is_none());
    assert_eq!(given[1].value.as_deref(), Some("James"));
    assert_eq!(given[1].id.as_deref(), Some("middle-name"));
}

#[test]
fn test_extension_only_primitive_has_no_value() {
    // A document may carry only the underscore companion; the value stays
    // absent and the companion key round-trips.
    let json = r#"{
        "resourceType": "Patient",
        "_birthDate": {
            "extension": [
                {
                    "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                    "valueCode": "unknown"
                }
            ]
        }
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Patient(patient) = resource else {
        panic!("expected a Patient");
    };
    let birth_date = patient.birth_date.as_ref().unwrap();
    assert!(birth_date.value.is_none());
    assert!(birth_date.extension.is_some());
}

#[test]
fn test_trailing_zero_decimals_survive() {
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "weight"},
        "valueQuantity": {"value": 72.50, "unit": "kg"}
    }"#;

    let resource = assert_round_trip(json);
    let Resource::Observation(obs) = resource else {
        panic!("expected an Observation");
    };
    let Some(ObservationValue::Quantity(q)) = &obs.value else {
        panic!("expected valueQuantity");
    };
    assert_eq!(
        q.value.as_ref().unwrap().value.as_ref().unwrap().original_string(),
        "72.50"
    );
}
