//! Unit tests for message domain types and their JSON shape.

use super::fixtures::DEMO_MESSAGES;
use crate::message::domain::{
    ActionButton, Message, MessageCollection, MessageFilter, MessageId, MessageType, Priority,
};
use rstest::rstest;
use serde_json::json;

fn parse_message(value: serde_json::Value) -> Result<Message, serde_json::Error> {
    serde_json::from_value(value)
}

// ============================================================================
// Message parsing
// ============================================================================

#[rstest]
fn minimal_message_leaves_optional_fields_absent() {
    let message = parse_message(json!({ "id": "a", "title": "A" })).expect("minimal message");

    assert_eq!(message.id().as_str(), "a");
    assert_eq!(message.title(), "A");
    assert!(message.title_short().is_none());
    assert!(message.description().is_none());
    assert!(message.message_type().is_none());
    assert!(message.priority().is_none());
    assert!(message.action_button().is_none());
    assert!(message.filter().is_none());
}

#[rstest]
fn title_short_is_kept_as_authored() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A rather long title",
        "titleShort": "Short",
    }))
    .expect("message with short title");

    assert_eq!(message.title_short(), Some("Short"));
    assert_eq!(message.short_title_or_title(), "Short");
}

#[rstest]
fn display_short_title_falls_back_to_title() {
    let message = Message::new("a", "Only a title");

    assert!(message.title_short().is_none());
    assert_eq!(message.short_title_or_title(), "Only a title");
}

#[rstest]
fn unknown_fields_are_ignored() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A",
        "moreInfoButton": { "label": "More", "url": "https://example.edu" },
        "audience": 42,
    }))
    .expect("unknown fields are ignored");

    assert_eq!(message, Message::new("a", "A"));
}

#[rstest]
fn null_optional_fields_are_absent() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A",
        "titleShort": null,
        "priority": null,
        "filter": null,
    }))
    .expect("nulls are accepted for optional fields");

    assert!(message.title_short().is_none());
    assert!(message.priority().is_none());
    assert!(message.filter().is_none());
}

#[rstest]
fn empty_filter_is_distinct_from_missing_filter() {
    let with_empty = parse_message(json!({ "id": "a", "title": "A", "filter": {} }))
        .expect("empty filter parses");

    let filter = with_empty.filter().expect("empty filter is present");
    assert_eq!(filter, &MessageFilter::new());
    assert!(!filter.has_group_restriction());
}

#[rstest]
fn groups_are_a_set_with_literal_everyone() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A",
        "filter": { "groups": ["Staff", "Everyone", "Staff"] },
    }))
    .expect("groups parse");

    let groups = message.filter().expect("filter present").groups();
    assert_eq!(groups.len(), 2);
    assert!(groups.contains("Everyone"));
    assert!(groups.contains("Staff"));
}

#[rstest]
fn tags_keep_unrecognised_values() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A",
        "messageType": "announcement",
        "priority": "HIGH",
    }))
    .expect("tags parse");

    let message_type = message.message_type().expect("type present");
    assert_eq!(message_type.as_str(), "announcement");
    assert!(!message_type.is_notification());
    assert!(message.priority().is_some_and(Priority::is_high));
}

#[rstest]
#[case::ordinal(json!(1), Priority::ordinal(1))]
#[case::tag(json!("low"), Priority::tag("low"))]
fn priority_accepts_rank_or_tag(#[case] raw: serde_json::Value, #[case] expected: Priority) {
    let message = parse_message(json!({ "id": "a", "title": "A", "priority": raw.clone() }))
        .expect("priority parses");

    assert_eq!(message.priority(), Some(&expected));
    assert!(!expected.is_high());
    assert_eq!(
        serde_json::to_value(message.priority()).expect("serialize priority"),
        raw
    );
}

#[rstest]
fn null_groups_are_treated_as_empty() {
    let message = parse_message(json!({
        "id": "a",
        "title": "A",
        "filter": { "goLiveDate": null, "expireDate": null, "groups": null },
    }))
    .expect("null groups parse");

    let filter = message.filter().expect("filter present");
    assert!(filter.groups().is_empty());
    assert!(!filter.has_group_restriction());
}

// ============================================================================
// Serialization
// ============================================================================

#[rstest]
fn serialization_uses_document_shape_and_omits_absent_fields() {
    let message = Message::new("welcome", "Welcome")
        .with_title_short("Hi")
        .with_message_type(MessageType::new(MessageType::NOTIFICATION))
        .with_action_button(ActionButton::new("Go", "https://example.edu"))
        .with_filter(
            MessageFilter::new()
                .with_go_live_date("2016-07-04")
                .with_groups(["Everyone"]),
        );

    let value = serde_json::to_value(&message).expect("serialize message");

    assert_eq!(
        value,
        json!({
            "id": "welcome",
            "title": "Welcome",
            "titleShort": "Hi",
            "messageType": "notification",
            "actionButton": { "label": "Go", "url": "https://example.edu" },
            "filter": { "goLiveDate": "2016-07-04", "groups": ["Everyone"] },
        })
    );
}

#[rstest]
fn demo_document_survives_reserialization() {
    let parsed: MessageCollection = serde_json::from_str(DEMO_MESSAGES).expect("demo parses");
    let text = serde_json::to_string(&parsed).expect("serialize collection");
    let reparsed: MessageCollection = serde_json::from_str(&text).expect("reparse collection");

    assert_eq!(parsed, reparsed);
    assert_eq!(reparsed.len(), 7);
}

// ============================================================================
// Collection
// ============================================================================

#[rstest]
fn collection_requires_messages_field() {
    let result: Result<MessageCollection, _> = serde_json::from_value(json!({ "notMessages": [] }));
    let err = result.expect_err("messages field is required");
    assert!(err.to_string().contains("missing field `messages`"));
}

#[rstest]
fn collection_preserves_order_and_duplicates() {
    let collection = MessageCollection::new(vec![
        Message::new("b", "B"),
        Message::new("a", "A"),
        Message::new("b", "B again"),
    ]);

    assert_eq!(collection.len(), 3);
    assert!(!collection.is_empty());
    let ids: Vec<_> = collection
        .into_messages()
        .into_iter()
        .map(|m| m.id().clone().into_inner())
        .collect();
    assert_eq!(ids, vec!["b", "a", "b"]);
}

#[rstest]
fn message_id_displays_authored_value() {
    let id = MessageId::new("expired-the-day-Elvis-died");
    assert_eq!(id.to_string(), "expired-the-day-Elvis-died");
    assert_eq!(id.as_ref(), "expired-the-day-Elvis-died");
}
