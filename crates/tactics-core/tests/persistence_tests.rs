// Host-side tests for the saved-layout gateway.

use tactics_core::constants::STORAGE_KEY;
use tactics_core::*;

fn stored(saved: &SavedStates<MemoryStore>) -> Option<String> {
    saved.store().get(STORAGE_KEY).unwrap()
}

fn stored_names(saved: &SavedStates<MemoryStore>) -> Vec<String> {
    let json = stored(saved).expect("nothing written");
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    v.as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

fn scene_with_ball(x: f64, y: f64) -> Scene {
    let mut s = Scene::initial();
    s.ball = Position::new(x, y);
    s
}

/// Store whose writes always fail, to check the in-memory list still updates.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota exceeded".into(),
        })
    }
}

/// Store that cannot be read at all.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}

#[test]
fn missing_key_opens_empty() {
    let saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    assert!(saved.is_empty());
    assert_eq!(stored(&saved), None);
}

#[test]
fn malformed_data_opens_empty() {
    for junk in ["not json", "{\"name\": 1}", "[{\"name\": \"x\"}]", ""] {
        let saved = SavedStates::open(MemoryStore::with_entry(STORAGE_KEY, junk), STORAGE_KEY);
        assert!(saved.is_empty(), "expected empty for {junk:?}");
    }
}

#[test]
fn unreadable_store_opens_empty() {
    let saved = SavedStates::open(BrokenStore, STORAGE_KEY);
    assert!(saved.is_empty());
}

#[test]
fn reads_existing_layouts() {
    let json = r#"[{"name":"Press","state":{"tokens":[{"id":"h1","position":{"x":50,"y":80},"team":"home","isHighlighted":true}],"ball":{"x":40,"y":40},"zones":[]}}]"#;
    let saved = SavedStates::open(MemoryStore::with_entry(STORAGE_KEY, json), STORAGE_KEY);
    assert_eq!(saved.len(), 1);
    let first = saved.load(0).unwrap();
    assert_eq!(first.name, "Press");
    assert!(first.scene.markers[0].highlighted);
    assert_eq!(first.scene.ball, Position::new(40.0, 40.0));
}

#[test]
fn blank_names_are_rejected_without_writing() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    assert!(!saved.save("", &Scene::initial()));
    assert!(!saved.save("   \t", &Scene::initial()));
    assert!(saved.is_empty());
    assert_eq!(stored(&saved), None);

    assert!(saved.save("Plan A", &Scene::initial()));
    let before = stored(&saved);
    assert!(!saved.save("", &Scene::initial()));
    assert_eq!(saved.len(), 1);
    assert_eq!(stored(&saved), before);
}

#[test]
fn save_appends_and_rewrites_whole_collection() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    assert!(saved.save("One", &scene_with_ball(1.0, 1.0)));
    assert!(saved.save("Two", &scene_with_ball(2.0, 2.0)));
    assert_eq!(stored_names(&saved), vec!["One", "Two"]);

    // names are kept as typed
    assert!(saved.save("  Three ", &scene_with_ball(3.0, 3.0)));
    assert_eq!(saved.list()[2].name, "  Three ");
}

#[test]
fn saved_collection_survives_reopen() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    let mut scene = scene_with_ball(12.5, 80.25);
    scene.toggle_highlight("a4");
    scene.zones.push(Zone {
        id: "zone-1".into(),
        start: Position::new(60.0, 10.0),
        end: Position::new(20.0, 30.0),
    });
    saved.save("Low block", &scene);

    let store = saved.store().clone();
    let reopened = SavedStates::open(store, STORAGE_KEY);
    assert_eq!(reopened.list(), saved.list());
    assert_eq!(reopened.load(0).unwrap().scene, scene);
}

#[test]
fn delete_shifts_later_entries_down() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
        saved.save(name, &scene_with_ball(i as f64, 0.0));
    }
    let removed = saved.delete(1).unwrap();
    assert_eq!(removed.name, "B");
    assert_eq!(saved.load(1).unwrap().name, "C");
    assert_eq!(saved.load(1).unwrap().scene.ball, Position::new(2.0, 0.0));
    assert_eq!(stored_names(&saved), vec!["A", "C", "D"]);
}

#[test]
fn delete_out_of_range_is_ignored() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    saved.save("A", &Scene::initial());
    let before = stored(&saved);
    assert!(saved.delete(5).is_none());
    assert_eq!(saved.len(), 1);
    assert_eq!(stored(&saved), before);
}

#[test]
fn failed_writes_keep_the_session_copy() {
    let mut saved = SavedStates::open(ReadOnlyStore, STORAGE_KEY);
    assert!(saved.save("Kept", &Scene::initial()));
    assert_eq!(saved.len(), 1);
    assert!(saved.delete(0).is_some());
    assert!(saved.is_empty());
}

#[test]
fn load_is_a_pure_read() {
    let mut saved = SavedStates::open(MemoryStore::new(), STORAGE_KEY);
    saved.save("A", &Scene::initial());
    let before = stored(&saved);
    assert!(saved.load(0).is_some());
    assert!(saved.load(1).is_none());
    assert_eq!(saved.len(), 1);
    assert_eq!(stored(&saved), before);
}

#[test]
fn encoding_failures_report_as_writes() {
    let cause = serde_json::from_str::<u8>("not json").unwrap_err();
    match StoreError::write(STORAGE_KEY, cause) {
        StoreError::Write { key, reason } => {
            assert_eq!(key, STORAGE_KEY);
            assert!(!reason.is_empty());
        }
        other => panic!("expected a write error, got {other:?}"),
    }
    let shown = StoreError::write("k", "quota exceeded").to_string();
    assert_eq!(shown, "writing `k` failed: quota exceeded");
}
