use confreg_form::{ActivityCatalog, ActivitySelection};

fn catalog() -> ActivityCatalog {
    ActivityCatalog::load_from_static()
}

#[test]
fn checking_one_activity_blocks_its_slot_peers_without_unchecking() {
    let catalog = catalog();
    let mut sel = ActivitySelection::new();

    assert!(sel.set_checked(&catalog, "async-rust", true));
    assert!(sel.is_blocked(&catalog, "api-design"), "same Tuesday morning");
    assert!(!sel.is_checked("api-design"), "peer is disabled, not unchecked");
    assert!(
        !sel.is_blocked(&catalog, "wasm-frontends"),
        "Tuesday afternoon is a different slot"
    );
    assert!(
        !sel.is_blocked(&catalog, "main-conference"),
        "slotless activities never conflict"
    );
}

#[test]
fn unchecking_reenables_the_blocked_peer() {
    let catalog = catalog();
    let mut sel = ActivitySelection::new();

    assert!(sel.set_checked(&catalog, "async-rust", true));
    assert!(sel.is_blocked(&catalog, "api-design"));
    assert!(sel.set_checked(&catalog, "async-rust", false));
    assert!(!sel.is_blocked(&catalog, "api-design"));
}

#[test]
fn blocked_state_is_derived_from_the_full_checked_set() {
    // Three activities in one slot; slot keys match across case and
    // whitespace differences.
    let catalog = ActivityCatalog::from_json(
        r#"{
            "activities": [
                {"id": "a", "name": "A", "cost_cents": 100,
                 "slot": {"day": "Friday", "time": "9am-12pm"}},
                {"id": "b", "name": "B", "cost_cents": 100,
                 "slot": {"day": "Friday", "time": "9am-12pm"}},
                {"id": "c", "name": "C", "cost_cents": 100,
                 "slot": {"day": "friday", "time": "9AM-12PM"}}
            ]
        }"#,
    )
    .unwrap();

    let mut sel = ActivitySelection::new();
    assert!(sel.set_checked(&catalog, "a", true));
    assert!(sel.is_blocked(&catalog, "b"));
    assert!(sel.is_blocked(&catalog, "c"));

    // Re-enabling is not a toggle keyed to the activity that changed: "b"
    // only unblocks when NO checked activity occupies the slot, whichever
    // peer that is.
    assert!(sel.set_checked(&catalog, "a", false));
    assert!(!sel.is_blocked(&catalog, "b"));
    assert!(sel.set_checked(&catalog, "c", true));
    assert!(sel.is_blocked(&catalog, "b"), "a different peer now blocks b");
    assert!(sel.set_checked(&catalog, "c", false));
    assert!(!sel.is_blocked(&catalog, "b"));
}

#[test]
fn running_total_tracks_toggles_incrementally() {
    let catalog = ActivityCatalog::from_json(
        r#"{
            "activities": [
                {"id": "cheap", "name": "Cheap", "cost_cents": 10000},
                {"id": "dear", "name": "Dear", "cost_cents": 20000}
            ]
        }"#,
    )
    .unwrap();

    let mut sel = ActivitySelection::new();
    assert_eq!(sel.total_dollars(), 0);
    assert!(sel.set_checked(&catalog, "cheap", true));
    assert!(sel.set_checked(&catalog, "dear", true));
    assert_eq!(sel.total_dollars(), 300);
    assert!(sel.set_checked(&catalog, "cheap", false));
    assert_eq!(sel.total_dollars(), 200);
}
