use notifier_core::Dedup;

#[test]
fn fresh_state_allows_any_text() {
    let dedup = Dedup::new();
    assert!(dedup.should_send("anything"));
    assert_eq!(dedup.last_sent(), None);
}

#[test]
fn repeated_text_is_suppressed_after_send() {
    let mut dedup = Dedup::new();
    dedup.mark_sent("status changed");

    assert!(!dedup.should_send("status changed"));
    assert!(dedup.should_send("different text"));
}

#[test]
fn newer_send_replaces_older_one() {
    let mut dedup = Dedup::new();
    dedup.mark_sent("first");
    dedup.mark_sent("second");

    assert!(dedup.should_send("first"));
    assert!(!dedup.should_send("second"));
    assert_eq!(dedup.last_sent(), Some("second"));
}
