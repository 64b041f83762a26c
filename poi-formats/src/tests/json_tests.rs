use super::*;

fn parse(content: &str) -> Vec<PoiRecord> {
    read_json(content.as_bytes())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_parse_array() {
    let records = parse(
        r#"[
            {"id": "J-1", "name": "JSON Place", "coordinates": [10.5, -20.25],
             "category": "Cafe", "ratings": [5, 4, 5], "description": "from json"},
            {"id": "J-2", "name": "JSON Park", "coordinates": [0.0, 0.0],
             "category": "Park", "ratings": 4.6}
        ]"#,
    );
    assert_eq!(records.len(), 2);

    let p1 = &records[0];
    assert_eq!(p1.external_id, "J-1");
    assert_eq!(p1.name, "JSON Place");
    assert_eq!(p1.category, "Cafe");
    assert_eq!(p1.latitude, Some(10.5));
    assert_eq!(p1.longitude, Some(-20.25));
    assert!((p1.avg_rating.unwrap() - 14.0 / 3.0).abs() < 1e-6);
    assert_eq!(p1.description, "from json");

    let p2 = &records[1];
    assert_eq!(p2.latitude, Some(0.0));
    assert_eq!(p2.avg_rating, Some(4.6));
    assert_eq!(p2.description, "");
}

#[test]
fn test_parse_single_object() {
    let records = parse(r#"{"id": "S-1", "name": "Solo", "category": "Bar"}"#);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].external_id, "S-1");
    assert_eq!(records[0].latitude, None);
    assert_eq!(records[0].avg_rating, None);
}

#[test]
fn test_empty_array() {
    assert!(parse("[]").is_empty());
}

#[test]
fn test_partial_coordinates() {
    let records = parse(r#"[{"id": "C", "coordinates": [1.5]}, {"id": "D", "coordinates": []}]"#);
    assert_eq!(records[0].latitude, Some(1.5));
    assert_eq!(records[0].longitude, None);
    assert_eq!(records[1].latitude, None);
}

#[test]
fn test_coordinates_as_strings_and_garbage() {
    let records = parse(
        r#"[{"coordinates": ["12.5", "abc"]}, {"coordinates": "10,20"}, {"coordinates": null}]"#,
    );
    assert_eq!(records[0].latitude, Some(12.5));
    assert_eq!(records[0].longitude, None);
    assert_eq!(records[1].latitude, None);
    assert_eq!(records[2].longitude, None);
}

#[test]
fn test_ratings_shapes() {
    let records = parse(
        r#"[{"ratings": "3.5"}, {"ratings": ["5", "x", 3]}, {"ratings": ["bad"]},
            {"ratings": null}, {"ratings": true}]"#,
    );
    assert_eq!(records[0].avg_rating, Some(3.5));
    assert_eq!(records[1].avg_rating, Some(4.0));
    assert_eq!(records[2].avg_rating, None);
    assert_eq!(records[3].avg_rating, None);
    assert_eq!(records[4].avg_rating, None);
}

#[test]
fn test_numeric_id_is_stringified() {
    let records = parse(r#"[{"id": 42, "name": "Answer", "category": "Misc"}]"#);
    assert_eq!(records[0].external_id, "42");
}

#[test]
fn test_null_and_empty_description() {
    let records = parse(r#"[{"description": null}, {"description": ""}, {}]"#);
    assert!(records.iter().all(|r| r.description.is_empty()));
}

#[test]
fn test_zero_description_is_empty_but_other_numbers_are_kept() {
    let records = parse(r#"[{"description": 0}, {"description": 0.0}, {"description": 7}]"#);
    assert_eq!(records[0].description, "");
    assert_eq!(records[1].description, "");
    assert_eq!(records[2].description, "7");
}

#[test]
fn test_non_object_items_yield_empty_records() {
    let records = parse(r#"[1, "two", null]"#);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.external_id.is_empty()));
}

#[test]
fn test_malformed_document_is_an_error() {
    assert!(matches!(
        read_json("[{\"id\": ".as_bytes()),
        Err(FormatError::Json(_))
    ));
}
