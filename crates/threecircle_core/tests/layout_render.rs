use threecircle_core::{
    classify, render, render_svg, Circle, DiagramGeometry, LayoutConfig, Locale, Participant,
    ParticipantId, Region,
};

fn person(id: &str, name: &str, family: bool, owner: bool, mgmt: bool) -> Participant {
    Participant::new(ParticipantId::new(id), name, family, owner, mgmt)
}

fn en_config() -> LayoutConfig {
    LayoutConfig::with_locale(Locale::En)
}

#[test]
fn render_places_three_circles_and_seven_regions() {
    let diagram = render("Title", &classify(&[]), &en_config());

    assert_eq!((diagram.width, diagram.height), (900.0, 720.0));
    assert_eq!((diagram.title.x, diagram.title.y), (450.0, 40.0));
    assert_eq!(diagram.circles.len(), 3);
    assert_eq!(diagram.captions.len(), 3);
    assert_eq!(diagram.regions.len(), 7);

    let management = &diagram.circles[Circle::Management.index()];
    assert_eq!((management.cx, management.cy, management.r), (410.0, 440.0, 210.0));
    assert_eq!(diagram.captions[0].text, "Family");

    let order: Vec<Region> = diagram.regions.iter().map(|r| r.region).collect();
    assert_eq!(order, Region::ALL.to_vec());
    assert!(diagram.regions.iter().all(|r| r.names.is_empty()));
}

#[test]
fn geometry_does_not_depend_on_bucket_contents() {
    let config = en_config();
    let empty = render("T", &classify(&[]), &config);
    let crowded_people: Vec<Participant> = (0..50)
        .map(|idx| {
            person(
                &idx.to_string(),
                &"very long participant name ".repeat(idx % 5 + 1),
                idx % 2 == 0,
                idx % 3 == 0,
                true,
            )
        })
        .collect();
    let crowded = render("T", &classify(&crowded_people), &config);

    assert_eq!(empty.circles, crowded.circles);
    assert_eq!(empty.captions, crowded.captions);
    assert_eq!(empty.legend, crowded.legend);
    for (a, b) in empty.regions.iter().zip(&crowded.regions) {
        assert_eq!((a.x, a.y, a.width, a.height), (b.x, b.y, b.width, b.height));
    }
    let placed: usize = crowded.regions.iter().map(|r| r.names.len()).sum();
    assert_eq!(placed, 50);
}

#[test]
fn render_is_deterministic() {
    let people = vec![
        person("1", "A", true, false, false),
        person("2", "B", true, true, false),
    ];
    let config = LayoutConfig::default();
    let buckets = classify(&people);
    assert_eq!(
        render("same", &buckets, &config),
        render("same", &buckets, &config)
    );
}

#[test]
fn region_boxes_carry_names_in_bucket_order() {
    let people = vec![
        person("1", "second-in-fo", true, true, false),
        person("2", "solo", false, true, false),
        person("3", "third-in-fo", true, true, false),
    ];
    let diagram = render("t", &classify(&people), &en_config());
    let fo = diagram.region(Region::FamilyOwnership).unwrap();
    assert_eq!(fo.names, vec!["second-in-fo", "third-in-fo"]);
    assert_eq!((fo.x, fo.y, fo.width, fo.height), (320.0, 200.0, 180.0, 100.0));
    assert_eq!(diagram.region(Region::Ownership).unwrap().names, vec!["solo"]);
}

#[test]
fn custom_geometry_moves_only_configured_boxes() {
    let mut config = en_config();
    config.geometry.regions.all.y = 330.0;
    config.validate().expect("shifted box stays inside the canvas");

    let diagram = render("t", &classify(&[]), &config);
    assert_eq!(diagram.region(Region::All).unwrap().y, 330.0);
    assert_eq!(
        diagram.region(Region::Family).unwrap().y,
        DiagramGeometry::standard().regions.family.y
    );
}

#[test]
fn svg_contains_primitives_and_escapes_names() {
    let people = vec![person("1", "Tom & <Jerry>", true, true, true)];
    let config = en_config();
    let diagram = render("Board \"2026\"", &classify(&people), &config);
    let svg = render_svg(&diagram, &config.style);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"900\" height=\"720\""));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert_eq!(svg.matches("<clipPath ").count(), 7);
    assert!(svg.contains("<circle cx=\"320\" cy=\"320\" r=\"210\""));
    assert!(svg.contains("• Tom &amp; &lt;Jerry&gt;"));
    assert!(svg.contains("Board &quot;2026&quot;"));
    assert!(!svg.contains("<Jerry>"));
    // six empty regions show the placeholder glyph
    assert_eq!(svg.matches(">—</text>").count(), 6);
}

#[test]
fn svg_is_stable_across_calls() {
    let config = LayoutConfig::default();
    let diagram = render("t", &classify(&[person("1", "A", true, false, true)]), &config);
    assert_eq!(render_svg(&diagram, &config.style), render_svg(&diagram, &config.style));
}

#[test]
fn scene_graph_serializes_region_names() {
    let diagram = render(
        "t",
        &classify(&[person("1", "A", false, true, true)]),
        &en_config(),
    );
    let value: serde_json::Value =
        serde_json::from_str(&diagram.to_json_pretty().unwrap()).unwrap();
    let region = &value["regions"][Region::OwnershipManagement.index()];
    assert_eq!(region["region"], "ownership_management");
    assert_eq!(region["names"], serde_json::json!(["A"]));
    assert_eq!(region["x"], 480.0);
}
