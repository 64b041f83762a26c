use poi_core::types::*;
use poi_db::*;

fn record(id: &str, name: &str) -> PoiRecord {
    PoiRecord {
        external_id: id.to_string(),
        name: name.to_string(),
        category: "Cafe".to_string(),
        latitude: Some(1.0),
        longitude: Some(2.0),
        avg_rating: Some(4.0),
        description: "first".to_string(),
    }
}

fn count(conn: &rusqlite::Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM pois", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn upsert_creates_new_poi() {
    let conn = open_memory().unwrap();
    let (poi, created) = upsert_poi(&conn, &record("IDEMP-1", "Original")).unwrap();

    assert!(created);
    assert!(poi.id > 0);
    assert_eq!(poi.external_id, "IDEMP-1");
    assert_eq!(poi.name, "Original");
    assert_eq!(poi.avg_rating, Some(4.0));
    assert_eq!(poi.created_at, poi.updated_at);
    assert_eq!(count(&conn), 1);
}

#[test]
fn upsert_replaces_all_fields() {
    let conn = open_memory().unwrap();
    let (first, _) = upsert_poi(&conn, &record("IDEMP-1", "Original")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));

    let update = PoiRecord {
        external_id: "IDEMP-1".to_string(),
        name: "Updated".to_string(),
        category: "Park".to_string(),
        latitude: None,
        longitude: Some(6.0),
        avg_rating: None,
        description: String::new(),
    };
    let (second, created) = upsert_poi(&conn, &update).unwrap();

    assert!(!created);
    assert_eq!(count(&conn), 1);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
    // Full replacement: absent values clear what was there before
    assert_eq!(second.to_record(), update);
}

#[test]
fn upsert_keeps_distinct_keys_apart() {
    let conn = open_memory().unwrap();
    let (a, _) = upsert_poi(&conn, &record("A", "Alpha")).unwrap();
    let (b, _) = upsert_poi(&conn, &record("B", "Beta")).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(count(&conn), 2);
}

#[test]
fn store_trait_on_connection() {
    let conn = open_memory().unwrap();
    let store: &dyn PoiStore = &conn;

    let (_, created) = store.upsert_poi(&record("S-1", "Via Trait")).unwrap();
    assert!(created);
    let (_, created) = store.upsert_poi(&record("S-1", "Via Trait Again")).unwrap();
    assert!(!created);

    store
        .record_import(&ImportLog {
            id: 0,
            source_format: "csv".to_string(),
            source_path: "a.csv".to_string(),
            imported_at: now_timestamp(),
            records_created: 1,
            records_updated: 1,
            records_skipped: 0,
        })
        .unwrap();
    assert_eq!(list_import_logs(&conn, 10).unwrap().len(), 1);
}

#[test]
fn insert_import_log_returns_id() {
    let conn = open_memory().unwrap();
    let entry = ImportLog {
        id: 0,
        source_format: "json".to_string(),
        source_path: "/tmp/b.json".to_string(),
        imported_at: now_timestamp(),
        records_created: 2,
        records_updated: 0,
        records_skipped: 1,
    };
    let first = insert_import_log(&conn, &entry).unwrap();
    let second = insert_import_log(&conn, &entry).unwrap();
    assert!(second > first);
}

#[test]
fn concurrent_writers_on_same_key_both_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.db");
    drop(open_database(&path).unwrap());

    let writers: Vec<_> = ["left", "right"]
        .into_iter()
        .map(|name| {
            let path = path.clone();
            std::thread::spawn(move || {
                let conn = open_database(&path).unwrap();
                let mut errors = 0;
                for _ in 0..200 {
                    if upsert_poi(&conn, &record("RACE", name)).is_err() {
                        errors += 1;
                    }
                }
                errors
            })
        })
        .collect();

    let errors: usize = writers.into_iter().map(|w| w.join().unwrap()).sum();
    assert_eq!(errors, 0);

    let conn = open_database(&path).unwrap();
    assert_eq!(count(&conn), 1);
    let poi = find_poi_by_external_id(&conn, "RACE").unwrap().unwrap();
    assert!(poi.name == "left" || poi.name == "right");
}
