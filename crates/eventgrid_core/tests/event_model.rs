use eventgrid_core::{Event, EventError, FieldMap, FieldValue, Zone};
use chrono::NaiveDate;
use serde_json::json;

fn fields(value: serde_json::Value) -> FieldMap {
    serde_json::from_value(value).expect("test input should be a JSON object")
}

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

#[test]
fn date_only_start_without_end_is_all_day() {
    let event = Event::from_fields(&fields(json!({"title": "A", "start": "2020-01-01"})), None)
        .expect("event should build");

    assert!(event.is_all_day());
    assert_eq!(event.title(), "A");
    assert!(event.end().is_none());
}

#[test]
fn timed_start_is_not_all_day_even_with_date_only_end() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "start": "2020-01-01T10:00:00", "end": "2020-01-02"})),
        None,
    )
    .expect("event should build");

    assert!(!event.is_all_day());
}

#[test]
fn explicit_all_day_false_overrides_date_shape() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "allDay": false, "start": "2020-01-01"})),
        None,
    )
    .expect("event should build");

    assert!(!event.is_all_day());
    assert_eq!(event.to_fields()["start"], FieldValue::from("2020-01-01 00:00:00"));
}

#[test]
fn string_all_day_flags_use_truthy_rule() {
    let off = Event::from_fields(
        &fields(json!({"title": "A", "allDay": "0", "start": "2020-01-01"})),
        None,
    )
    .expect("event should build");
    assert!(!off.is_all_day());

    for raw in ["1", "false", " ", " 0 "] {
        let on = Event::from_fields(
            &fields(json!({"title": "A", "allDay": raw, "start": "2020-01-01T10:00:00"})),
            None,
        )
        .expect("event should build");
        assert!(on.is_all_day(), "allDay {raw:?} should be truthy");
        assert_eq!(on.to_fields()["start"], FieldValue::from("2020-01-01"));
    }
}

#[test]
fn date_with_trailing_newline_is_all_day() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "start": "2020-01-01\n"})),
        None,
    )
    .expect("event should build");

    assert!(event.is_all_day());
    assert_eq!(event.to_fields()["start"], FieldValue::from("2020-01-01"));
}

#[test]
fn day_range_intersection_uses_half_open_caller_range() {
    let event = Event::from_fields(
        &fields(json!({
            "title": "Offsite",
            "start": "2020-01-10",
            "end": "2020-01-12",
            "allDay": true
        })),
        None,
    )
    .expect("event should build");

    assert!(event.is_within_day_range(day("2020-01-12"), day("2020-01-15")));
    assert!(!event.is_within_day_range(day("2020-01-13"), day("2020-01-15")));
    assert!(event.is_within_day_range(day("2020-01-01"), day("2020-01-11")));
    assert!(!event.is_within_day_range(day("2020-01-01"), day("2020-01-10")));
}

#[test]
fn zero_duration_event_occupies_its_start_day() {
    let event = Event::from_fields(
        &fields(json!({"title": "Call", "start": "2020-01-10T16:00:00"})),
        None,
    )
    .expect("event should build");

    assert!(event.is_within_day_range(day("2020-01-10"), day("2020-01-11")));
    assert!(!event.is_within_day_range(day("2020-01-11"), day("2020-01-12")));
}

#[test]
fn day_matching_uses_the_parse_zone_calendar() {
    let tokyo: Zone = "+09:00".parse().expect("valid offset");
    let event = Event::from_fields(
        &fields(json!({"title": "Late", "start": "2020-01-10T23:30:00"})),
        Some(tokyo),
    )
    .expect("event should build");

    // Already 01-10 14:30 UTC, but the wall clock day is what counts.
    assert!(event.is_within_day_range(day("2020-01-10"), day("2020-01-11")));
    assert_eq!(event.to_fields()["start"], FieldValue::from("2020-01-10 23:30:00"));
}

#[test]
fn inverted_event_is_accepted_and_evaluated_as_given() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "start": "2020-01-12", "end": "2020-01-10"})),
        None,
    )
    .expect("inverted window should not be rejected");

    assert!(event.end().expect("end is set").instant() < event.start().instant());
    assert!(event.is_within_day_range(day("2020-01-09"), day("2020-01-13")));
    assert!(!event.is_within_day_range(day("2020-01-11"), day("2020-01-12")));
}

#[test]
fn all_day_round_trip_without_extra_fields() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "allDay": true, "start": "2020-01-01"})),
        None,
    )
    .expect("event should build");

    assert_eq!(
        event.to_json_value(),
        json!({"title": "A", "start": "2020-01-01"})
    );
}

#[test]
fn extra_properties_pass_through_untouched() {
    let event = Event::from_fields(
        &fields(json!({
            "title": "A",
            "start": "2020-01-01",
            "allDay": true,
            "color": "red",
            "id": 7,
            "editable": false,
            "meta": {"tags": ["x", 1.5]}
        })),
        None,
    )
    .expect("event should build");

    assert_eq!(event.property("color"), Some(&FieldValue::from("red")));
    assert!(event.property("allDay").is_none());
    assert_eq!(event.properties().len(), 4);

    let out = event.to_json_value();
    assert_eq!(out["color"], "red");
    assert_eq!(out["id"], 7);
    assert_eq!(out["editable"], false);
    assert_eq!(out["meta"], json!({"tags": ["x", 1.5]}));
    assert!(out.get("allDay").is_none());
}

#[test]
fn timed_round_trip_keeps_wall_clock_but_not_zone() {
    let zone: Zone = "+08:00".parse().expect("valid offset");
    let event = Event::from_fields(
        &fields(json!({
            "title": "Standup",
            "start": "2020-03-01T09:00:00",
            "end": "2020-03-01T09:15:00"
        })),
        Some(zone),
    )
    .expect("event should build");

    let out = event.to_fields();
    assert_eq!(out["start"], FieldValue::from("2020-03-01 09:00:00"));
    assert_eq!(out["end"], FieldValue::from("2020-03-01 09:15:00"));

    let reparsed = Event::from_fields(&out, None).expect("serialized form should rebuild");
    assert_eq!(reparsed.to_fields(), out);
    assert!(!reparsed.is_all_day());
    assert_eq!(reparsed.start().zone(), Zone::Neutral);
    assert_ne!(reparsed.start().instant(), event.start().instant());
}

#[test]
fn missing_title_or_start_fails() {
    let err = Event::from_fields(&fields(json!({"start": "2020-01-01"})), None)
        .expect_err("title is required");
    assert_eq!(err, EventError::MissingField("title"));

    let err = Event::from_fields(&fields(json!({"title": "A"})), None)
        .expect_err("start is required");
    assert_eq!(err, EventError::MissingField("start"));
}

#[test]
fn unparseable_dates_fail_with_invalid_date() {
    let err = Event::from_fields(
        &fields(json!({"title": "A", "start": "2020-01-01", "end": "next week"})),
        None,
    )
    .expect_err("bad end must fail");
    assert_eq!(err, EventError::InvalidDate("next week".to_string()));
}

#[test]
fn from_json_decodes_objects_and_rejects_other_documents() {
    let event = Event::from_json(r#"{"title": "A", "start": "2020-01-01"}"#, None)
        .expect("object should decode");
    assert!(event.is_all_day());

    let err = Event::from_json("[1, 2]", None).expect_err("arrays are not events");
    assert!(matches!(err, EventError::Decode(_)));
}

#[test]
fn serialize_matches_to_fields() {
    let event = Event::from_fields(
        &fields(json!({"title": "A", "start": "2020-01-01", "color": "red"})),
        None,
    )
    .expect("event should build");

    let json = serde_json::to_value(&event).expect("event should serialize");
    assert_eq!(json, event.to_json_value());
}
