use threecircle_core::{
    InputError, LayoutConfig, Locale, ParticipantDraft, ParticipantId, PersistError, Region,
    RosterService, SequentialIdGenerator,
};

fn service() -> RosterService<SequentialIdGenerator> {
    RosterService::new(
        SequentialIdGenerator::new("p"),
        LayoutConfig::with_locale(Locale::En),
    )
}

#[test]
fn new_service_starts_empty_with_locale_title() {
    let service = service();
    assert!(service.roster().is_empty());
    assert_eq!(
        service.title(),
        "Three-circle diagram (Family / Ownership / Management)"
    );

    let view = service.view();
    assert!(view.buckets.is_empty());
    assert_eq!(view.advisories.len(), 1);
    assert_eq!(view.footer, None);
}

#[test]
fn add_normalizes_name_and_assigns_sequential_ids() {
    let mut service = service();
    let first = service
        .add(ParticipantDraft::new("  Yamada   Taro ", true, false, false))
        .unwrap();
    let second = service
        .add(ParticipantDraft::new("CFO", false, false, true))
        .unwrap();

    assert_eq!(first, ParticipantId::new("p-1"));
    assert_eq!(second, ParticipantId::new("p-2"));
    assert_eq!(service.roster().get(&first).unwrap().name, "Yamada Taro");

    let view = service.view();
    assert_eq!(view.buckets.names(Region::Family), vec!["Yamada Taro"]);
    assert_eq!(view.buckets.names(Region::Management), vec!["CFO"]);
    assert_eq!(view.diagram.region(Region::Management).unwrap().names, vec!["CFO"]);
}

#[test]
fn invalid_drafts_are_rejected_without_consuming_ids() {
    let mut service = service();

    let err = service
        .add(ParticipantDraft::new("   ", true, true, true))
        .unwrap_err();
    assert_eq!(err, InputError::EmptyName);

    let err = service
        .add(ParticipantDraft::new("Nobody", false, false, false))
        .unwrap_err();
    assert_eq!(err, InputError::NoAttributes);
    assert!(service.roster().is_empty());

    let id = service
        .add(ParticipantDraft::new("Somebody", false, true, false))
        .unwrap();
    assert_eq!(id, ParticipantId::new("p-1"));
}

#[test]
fn remove_drops_participant_and_ids_are_not_recycled() {
    let mut service = service();
    let a = service.add(ParticipantDraft::new("A", true, true, true)).unwrap();
    service.add(ParticipantDraft::new("B", true, true, false)).unwrap();

    let removed = service.remove(&a).expect("A should be present");
    assert_eq!(removed.name, "A");
    assert!(service.remove(&a).is_none());
    assert!(service.view().buckets.get(Region::All).is_empty());

    let c = service.add(ParticipantDraft::new("C", true, false, false)).unwrap();
    assert_eq!(c, ParticipantId::new("p-3"));
}

#[test]
fn failed_import_keeps_current_roster() {
    let mut service = service();
    service.load_sample();
    let before = service.roster().clone();

    let err = service.import_json("\"just a string\"").unwrap_err();
    assert!(matches!(err, PersistError::NotAnArray { found: "string" }));
    assert_eq!(service.roster(), &before);
}

#[test]
fn import_replaces_roster_and_reports_coercions() {
    let mut service = service();
    service.load_sample();

    let summary = service
        .import_json(r#"[{"name":"Heir","family":true,"mgmt":true},{"family":false}]"#)
        .unwrap();

    assert_eq!(summary.imported, 2);
    assert!(!summary.coercions.is_empty());
    assert_eq!(service.roster().len(), 2);

    let view = service.view();
    assert_eq!(view.buckets.names(Region::FamilyManagement), vec!["Heir"]);
    assert_eq!(view.buckets.placed_count(), 1);
    assert_eq!(service.roster().participants()[1].name, "Unnamed");
}

#[test]
fn sample_view_matches_family_business_layout() {
    let mut service = service();
    service.load_sample();
    let view = service.view();

    assert_eq!(view.buckets.names(Region::All), vec!["Founder (father)"]);
    assert_eq!(
        view.buckets.names(Region::FamilyManagement),
        vec!["Successor candidate (eldest son)"]
    );
    assert_eq!(
        view.buckets.names(Region::FamilyOwnership),
        vec!["Spouse", "Dormant shareholder (uncle)"]
    );
    assert_eq!(
        view.buckets.names(Region::Management),
        vec!["Outside director A", "CFO"]
    );

    let regions: Vec<Option<Region>> = view.advisories.iter().map(|a| a.region).collect();
    assert_eq!(
        regions,
        vec![
            Some(Region::All),
            Some(Region::FamilyManagement),
            Some(Region::FamilyOwnership),
            Some(Region::Management),
        ]
    );
    assert!(view.footer.is_some());
}

#[test]
fn export_then_import_round_trips_roster() {
    let mut source = service();
    source.load_sample();
    let text = source.export_json().unwrap();

    let mut target = RosterService::new(
        SequentialIdGenerator::new("other"),
        LayoutConfig::with_locale(Locale::En),
    );
    let summary = target.import_json(&text).unwrap();

    assert!(summary.coercions.is_empty());
    assert_eq!(target.roster(), source.roster());
}

#[test]
fn title_flows_into_diagram_and_svg() {
    let mut service = service();
    service.set_title("Board review");
    service.add(ParticipantDraft::new("A", true, false, false)).unwrap();

    assert_eq!(service.view().diagram.title.text, "Board review");
    let svg = service.svg();
    assert!(svg.contains(">Board review</text>"));
    assert!(svg.contains("• A</text>"));
}

#[test]
fn add_after_import_skips_ids_already_in_roster() {
    let mut service = service();
    service
        .import_json(
            r#"[{"id":"p-1","name":"Imported","family":true,"owner":false,"mgmt":false},
                {"id":"p-2","name":"Also imported","family":false,"owner":true,"mgmt":false}]"#,
        )
        .unwrap();

    let added = service
        .add(ParticipantDraft::new("Added", false, false, true))
        .unwrap();
    assert_eq!(added, ParticipantId::new("p-3"));
    let with_id = service.roster().iter().filter(|p| p.id == added).count();
    assert_eq!(with_id, 1);

    let removed = service.remove(&added).expect("added participant present");
    assert_eq!(removed.name, "Added");
    assert_eq!(service.roster().len(), 2);
    assert_eq!(
        service.roster().get(&ParticipantId::new("p-1")).unwrap().name,
        "Imported"
    );
}

#[test]
fn svg_omits_control_characters_from_imported_names() {
    let mut service = service();
    service
        .import_json(r#"[{"id":"c","name":"a\u0001b","family":true,"owner":false,"mgmt":false}]"#)
        .unwrap();

    let svg = service.svg();
    assert!(!svg.contains('\u{1}'));
    assert!(svg.contains("• ab</text>"));
}
