// Host-side tests for the scene model, its wire format and zone ids.

use std::collections::HashSet;
use tactics_core::constants::{AWAY_FORMATION, HOME_FORMATION};
use tactics_core::*;

#[test]
fn initial_scene_has_both_elevens() {
    let scene = Scene::initial();
    assert_eq!(scene.markers.len(), 22);
    let home = scene.markers.iter().filter(|m| m.team == Team::Home).count();
    let away = scene.markers.iter().filter(|m| m.team == Team::Away).count();
    assert_eq!((home, away), (11, 11));

    let ids: HashSet<&str> = scene.markers.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), 22, "marker ids must be unique");
    assert!(scene.markers.iter().all(|m| !m.highlighted));
    assert!(scene.zones.is_empty());
    assert_eq!(scene.ball, Position::new(50.0, 50.0));
}

#[test]
fn initial_scene_matches_formation_tables() {
    let scene = Scene::initial();
    for (id, at) in HOME_FORMATION.iter().chain(AWAY_FORMATION.iter()) {
        let m = scene.marker(id).unwrap_or_else(|| panic!("missing {id}"));
        assert_eq!(m.position, Position::from(*at));
    }
    assert_eq!(scene.marker("h1").unwrap().position, Position::new(50.0, 90.0));
    assert_eq!(scene.marker("a11").unwrap().position, Position::new(50.0, 65.0));
    assert_eq!(scene.markers[0].id, "h1");
    assert_eq!(scene.markers[11].id, "a1");
}

#[test]
fn marker_mutations_report_unknown_ids() {
    let mut scene = Scene::initial();
    assert!(scene.move_marker("h7", Position::new(1.0, 2.0)));
    assert_eq!(scene.marker("h7").unwrap().position, Position::new(1.0, 2.0));
    assert!(!scene.move_marker("x99", Position::new(1.0, 2.0)));

    assert!(scene.toggle_highlight("a3"));
    assert!(scene.marker("a3").unwrap().highlighted);
    assert!(scene.toggle_highlight("a3"));
    assert!(!scene.marker("a3").unwrap().highlighted);
    assert!(!scene.toggle_highlight("x99"));
}

#[test]
fn clear_highlights_resets_every_marker() {
    let mut scene = Scene::initial();
    scene.toggle_highlight("h2");
    scene.toggle_highlight("a9");
    scene.clear_highlights();
    assert!(scene.markers.iter().all(|m| !m.highlighted));
}

#[test]
fn remove_zone_returns_the_zone() {
    let mut scene = Scene::initial();
    scene.zones.push(Zone {
        id: "a".into(),
        start: Position::new(0.0, 0.0),
        end: Position::new(1.0, 1.0),
    });
    scene.zones.push(Zone {
        id: "b".into(),
        start: Position::new(2.0, 2.0),
        end: Position::new(3.0, 3.0),
    });
    let removed = scene.remove_zone("a").unwrap();
    assert_eq!(removed.id, "a");
    assert_eq!(scene.zones.len(), 1);
    assert_eq!(scene.zones[0].id, "b");
    assert!(scene.remove_zone("a").is_none());
}

#[test]
fn scene_serializes_with_saved_layout_field_names() {
    let mut scene = Scene::initial();
    scene.toggle_highlight("h1");
    let v = serde_json::to_value(&scene).unwrap();
    assert!(v.get("tokens").is_some());
    assert!(v.get("markers").is_none());
    assert_eq!(v["ball"]["x"], 50.0);
    assert_eq!(v["tokens"][0]["id"], "h1");
    assert_eq!(v["tokens"][0]["team"], "home");
    assert_eq!(v["tokens"][0]["isHighlighted"], true);
    assert_eq!(v["tokens"][11]["team"], "away");
    assert_eq!(v["zones"], serde_json::json!([]));
}

#[test]
fn missing_highlight_flag_defaults_to_false() {
    let json = r#"{
        "tokens": [{"id": "h1", "position": {"x": 1.5, "y": 2}, "team": "home"}],
        "ball": {"x": 50, "y": 50},
        "zones": [{"id": "z1", "start": {"x": 60, "y": 60}, "end": {"x": 10, "y": 5}}]
    }"#;
    let scene: Scene = serde_json::from_str(json).unwrap();
    assert_eq!(scene.markers.len(), 1);
    assert!(!scene.markers[0].highlighted);
    assert_eq!(scene.markers[0].position, Position::new(1.5, 2.0));
    assert_eq!(scene.zones[0].end, Position::new(10.0, 5.0));
}

#[test]
fn seeded_zone_ids_are_repeatable_and_unique() {
    let mut a = ZoneIds::seeded(42);
    let mut b = ZoneIds::seeded(42);
    let first: Vec<String> = (0..16).map(|_| a.next_id()).collect();
    let second: Vec<String> = (0..16).map(|_| b.next_id()).collect();
    assert_eq!(first, second);

    let unique: HashSet<&String> = first.iter().collect();
    assert_eq!(unique.len(), first.len());
}

#[test]
fn zone_ids_are_v4_uuids() {
    let mut ids = ZoneIds::seeded(1);
    let id = ids.next_id();
    let parsed = uuid::Uuid::parse_str(&id).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
}
