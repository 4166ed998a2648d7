use serde_json::json;
use threecircle_core::{
    classify, export_participants, import_participants, CoercedField, Locale, Participant,
    ParticipantId, PersistError, Region, SequentialIdGenerator,
};

#[test]
fn missing_owner_defaults_to_false_and_classifies() {
    let text = json!([{ "id": "a1", "name": "A", "family": true, "mgmt": true }]).to_string();
    let mut ids = SequentialIdGenerator::new("gen");

    let report = import_participants(&text, &mut ids, Locale::En).unwrap();

    assert_eq!(report.participants.len(), 1);
    let imported = &report.participants[0];
    assert!(!imported.is_owner);
    assert_eq!(imported.id, ParticipantId::new("a1"));
    assert_eq!(report.coercions.len(), 1);
    assert_eq!(report.coercions[0].field, CoercedField::Owner);

    let set = classify(&report.participants);
    assert_eq!(set.names(Region::FamilyManagement), vec!["A"]);
}

#[test]
fn malformed_records_are_coerced_not_rejected() {
    let text = json!([
        null,
        42,
        { "name": "   ", "family": 1, "owner": "yes", "mgmt": 0 },
        { "id": 7, "name": 12345, "family": false, "owner": false, "mgmt": "" }
    ])
    .to_string();
    let mut ids = SequentialIdGenerator::new("gen");

    let report = import_participants(&text, &mut ids, Locale::Ja).unwrap();
    let people = &report.participants;

    assert_eq!(people.len(), 4);
    assert_eq!(people[0].name, "名無し");
    assert_eq!(people[0].id, ParticipantId::new("gen-1"));
    assert_eq!(people[0].attribute_count(), 0);
    assert_eq!(people[1].id, ParticipantId::new("gen-2"));

    assert_eq!(people[2].name, "名無し");
    assert!(people[2].in_family && people[2].is_owner && !people[2].in_management);

    assert_eq!(people[3].id, ParticipantId::new("7"));
    assert_eq!(people[3].name, "12345");
    assert_eq!(people[3].attribute_count(), 0);

    assert!(report
        .coercions
        .iter()
        .any(|c| c.index == 0 && c.field == CoercedField::Record));
    assert!(report
        .coercions
        .iter()
        .any(|c| c.index == 2 && c.field == CoercedField::Name));
}

#[test]
fn duplicate_ids_get_fresh_ids() {
    let text = json!([
        { "id": "x", "name": "First", "family": true, "owner": false, "mgmt": false },
        { "id": "x", "name": "Second", "family": true, "owner": false, "mgmt": false }
    ])
    .to_string();
    let mut ids = SequentialIdGenerator::new("gen");

    let report = import_participants(&text, &mut ids, Locale::En).unwrap();

    assert_eq!(report.participants[0].id, ParticipantId::new("x"));
    assert_eq!(report.participants[1].id, ParticipantId::new("gen-1"));
    assert_eq!(report.coercions.len(), 1);
    assert_eq!(report.coercions[0].index, 1);
    assert_eq!(report.coercions[0].field, CoercedField::DuplicateId);
}

#[test]
fn whole_document_failures_are_errors() {
    let mut ids = SequentialIdGenerator::default();

    let err = import_participants("{ broken", &mut ids, Locale::En).unwrap_err();
    assert!(matches!(err, PersistError::Parse(_)));

    let err = import_participants(r#"{"id": "a"}"#, &mut ids, Locale::En).unwrap_err();
    assert!(matches!(err, PersistError::NotAnArray { found: "object" }));
    assert!(err.to_string().contains("found object"));
}

#[test]
fn export_uses_wire_field_names_and_reimports_cleanly() {
    let people = vec![
        Participant::new(ParticipantId::new("id_1"), "創業者（父）", true, true, true),
        Participant::new(ParticipantId::new("id_2"), "CFO", false, false, true),
    ];

    let text = export_participants(&people).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value[0],
        json!({ "id": "id_1", "name": "創業者（父）", "family": true, "owner": true, "mgmt": true })
    );
    assert!(text.contains("\n  {"), "expected two-space indentation");

    let mut ids = SequentialIdGenerator::default();
    let report = import_participants(&text, &mut ids, Locale::Ja).unwrap();
    assert_eq!(report.participants, people);
    assert!(report.coercions.is_empty());
}

#[test]
fn import_from_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("three-circle-data.json");
    std::fs::write(
        &path,
        r#"[{"id":"f","name":"Spouse","family":true,"owner":true,"mgmt":false}]"#,
    )
    .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut ids = SequentialIdGenerator::default();
    let report = import_participants(&text, &mut ids, Locale::En).unwrap();
    assert_eq!(
        classify(&report.participants).names(Region::FamilyOwnership),
        vec!["Spouse"]
    );
}
