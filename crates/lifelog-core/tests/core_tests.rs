//! Tests for lifelog-core: modifiers, facts, the store, and the JSON round-trip

use lifelog_core::*;

// ===========================================================================
// Modifier
// ===========================================================================

#[test]
fn modifier_serde_roundtrip() {
    let modifier = Modifier::new("at", "7am");
    let json = serde_json::to_string(&modifier).unwrap();
    assert_eq!(json, r#"{"tag":"at","value":"7am"}"#);
    let back: Modifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, modifier);
    assert_eq!(back.tag(), "at");
    assert_eq!(back.value(), "7am");
}

#[test]
fn modifier_missing_tag_is_malformed() {
    let result = serde_json::from_str::<Modifier>(r#"{"value":"7am"}"#);
    assert!(result.is_err());
}

#[test]
fn modifier_missing_value_is_malformed() {
    let result = serde_json::from_str::<Modifier>(r#"{"tag":"at"}"#);
    assert!(result.is_err());
}

// ===========================================================================
// Fact
// ===========================================================================

#[test]
fn fact_serializes_wire_shape() {
    let fact = Fact::new("Alice", "woke up", vec![Modifier::new("at", "7am")]);
    let json = serde_json::to_string(&fact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["subject"], "Alice");
    assert_eq!(value["verb"], "woke up");
    assert_eq!(value["mods"][0]["tag"], "at");
    assert_eq!(value["mods"][0]["value"], "7am");
    assert_eq!(value["uuid"], fact.id().to_string());
}

#[test]
fn fact_restores_stored_id() {
    let json = r#"{"subject":"Alice","verb":"woke up","mods":[],
                   "uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}"#;
    let fact: Fact = serde_json::from_str(json).unwrap();
    assert_eq!(
        fact.id().to_string(),
        "8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"
    );
}

#[test]
fn fact_missing_subject_is_malformed() {
    let json = r#"{"verb":"woke up","mods":[],"uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}"#;
    assert!(serde_json::from_str::<Fact>(json).is_err());
}

#[test]
fn fact_missing_verb_is_malformed() {
    let json = r#"{"subject":"Alice","mods":[],"uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}"#;
    assert!(serde_json::from_str::<Fact>(json).is_err());
}

#[test]
fn fact_missing_mods_is_malformed() {
    let json = r#"{"subject":"Alice","verb":"woke up","uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}"#;
    assert!(serde_json::from_str::<Fact>(json).is_err());
}

#[test]
fn fact_missing_uuid_is_malformed() {
    let json = r#"{"subject":"Alice","verb":"woke up","mods":[]}"#;
    assert!(serde_json::from_str::<Fact>(json).is_err());
}

#[test]
fn fact_mods_not_a_sequence_is_malformed() {
    let json = r#"{"subject":"Alice","verb":"woke up","mods":"at 7am",
                   "uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}"#;
    assert!(serde_json::from_str::<Fact>(json).is_err());
}

#[test]
fn fact_renders_with_single_trailing_period() {
    let fact = Fact::new("Alice", "woke up", vec![Modifier::new("at", "7am")]);
    assert_eq!(fact.to_string(), "Alice woke up at 7am.");

    let bare = Fact::new("Bob", "left", vec![]);
    assert_eq!(bare.to_string(), "Bob left.");
}

// ===========================================================================
// FactStore — mutation
// ===========================================================================

#[test]
fn add_appends_in_order() {
    let mut store = FactStore::new();
    store.add("Alice", "woke up", vec![Modifier::new("at", "7am")]);
    store.add("Bob", "left", vec![]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.facts()[0].subject(), "Alice");
    assert_eq!(store.facts()[1].subject(), "Bob");
}

#[test]
fn add_generates_pairwise_distinct_ids() {
    let mut store = FactStore::new();
    for _ in 0..32 {
        store.add("Alice", "blinked", vec![]);
    }

    let mut ids: Vec<_> = store.facts().iter().map(|f| f.id()).collect();
    ids.sort_by_key(|id| id.to_string());
    ids.dedup();
    assert_eq!(ids.len(), 32);
}

#[test]
fn duplicates_are_permitted() {
    let mut store = FactStore::new();
    store.add("Alice", "sneezed", vec![]);
    store.add("Alice", "sneezed", vec![]);
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_keeps_survivor_order_stable() {
    let mut store = FactStore::new();
    store.add("first", "happened", vec![]);
    let middle = store.add("second", "happened", vec![]);
    store.add("third", "happened", vec![]);

    store.remove(&middle);

    assert_eq!(store.len(), 2);
    assert_eq!(store.facts()[0].subject(), "first");
    assert_eq!(store.facts()[1].subject(), "third");
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut store = FactStore::new();
    store.add("Alice", "woke up", vec![]);
    let before = store.to_json().unwrap();

    store.remove(&FactId::new());

    assert_eq!(store.to_json().unwrap(), before);
}

#[test]
fn remove_already_removed_id_is_a_noop() {
    let mut store = FactStore::new();
    let id = store.add("Bob", "left", vec![]);
    store.remove(&id);
    store.remove(&id);
    assert!(store.is_empty());
}

#[test]
fn add_then_remove_serializes_to_empty_array() {
    let mut store = FactStore::new();
    let id = store.add("Bob", "left", vec![]);
    store.remove(&id);
    assert_eq!(store.to_json().unwrap(), "[]");
}

// ===========================================================================
// FactStore — serialization round-trip
// ===========================================================================

#[test]
fn empty_store_serializes_to_empty_array() {
    assert_eq!(FactStore::new().to_json().unwrap(), "[]");
}

#[test]
fn roundtrip_preserves_order_ids_and_mods() {
    let mut store = FactStore::new();
    store.add(
        "Alice",
        "woke up",
        vec![Modifier::new("at", "7am"), Modifier::new("", "slowly")],
    );
    store.add("Bob", "left", vec![Modifier::new("for", "work")]);

    let json = store.to_json().unwrap();
    let restored = FactStore::from_json(&json).unwrap();

    assert_eq!(restored.len(), store.len());
    for (original, back) in store.facts().iter().zip(restored.facts()) {
        assert_eq!(back.id(), original.id());
        assert_eq!(back.subject(), original.subject());
        assert_eq!(back.verb(), original.verb());
        assert_eq!(back.mods(), original.mods());
    }

    // And the restored store serializes to the same bytes.
    assert_eq!(restored.to_json().unwrap(), json);
}

#[test]
fn one_bad_record_rejects_the_whole_batch() {
    let json = r#"[
        {"subject":"Alice","verb":"woke up","mods":[],
         "uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"},
        {"subject":"Bob","mods":[],
         "uuid":"9d6f3a1b-19cb-4c7d-8e2b-2e3f4a5b6c7d"}
    ]"#;
    match FactStore::from_json(json) {
        Err(Error::MalformedRecord(_)) => {}
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn duplicate_ids_reject_the_whole_batch() {
    let json = r#"[
        {"subject":"Alice","verb":"woke up","mods":[],
         "uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"},
        {"subject":"Bob","verb":"left","mods":[],
         "uuid":"8c5e2f0a-08ba-4b6c-9f3a-1d2e3f4a5b6c"}
    ]"#;
    match FactStore::from_json(json) {
        Err(Error::MalformedRecord(reason)) => assert!(reason.contains("duplicate")),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn non_array_payload_is_malformed() {
    assert!(matches!(
        FactStore::from_json(r#"{"subject":"Alice"}"#),
        Err(Error::MalformedRecord(_))
    ));
}

// ===========================================================================
// FactStore — rendering
// ===========================================================================

#[test]
fn render_text_joins_facts_with_newlines() {
    let mut store = FactStore::new();
    store.add("Alice", "woke up", vec![Modifier::new("at", "7am")]);
    store.add("Bob", "left", vec![]);

    assert_eq!(store.render_text(), "Alice woke up at 7am.\nBob left.");
}

#[test]
fn render_text_of_empty_store_is_empty() {
    assert_eq!(FactStore::new().render_text(), "");
}
