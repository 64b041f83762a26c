use poi_core::types::*;
use poi_db::*;

fn seed(conn: &rusqlite::Connection) -> (Poi, Poi, Poi) {
    let mk = |id: &str, name: &str, category: &str, rating: f64| PoiRecord {
        external_id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        latitude: Some(1.0),
        longitude: Some(1.0),
        avg_rating: Some(rating),
        description: String::new(),
    };
    let (a, _) = upsert_poi(conn, &mk("EXT-1", "Alpha", "Cafe", 4.2)).unwrap();
    let (b, _) = upsert_poi(conn, &mk("EXT-2", "Beta", "Park", 4.6)).unwrap();
    let (c, _) = upsert_poi(conn, &mk("EXT-3", "Gamma", "Cafe", 4.0)).unwrap();
    (a, b, c)
}

fn external_ids(pois: &[Poi]) -> Vec<&str> {
    pois.iter().map(|p| p.external_id.as_str()).collect()
}

#[test]
fn find_by_external_and_internal_id() {
    let conn = open_memory().unwrap();
    let (a, b, _) = seed(&conn);

    assert_eq!(find_poi_by_external_id(&conn, "EXT-1").unwrap(), Some(a));
    assert_eq!(find_poi_by_id(&conn, b.id).unwrap().unwrap().name, "Beta");
    assert!(find_poi_by_external_id(&conn, "nope").unwrap().is_none());
    assert!(find_poi_by_id(&conn, 9999).unwrap().is_none());
}

#[test]
fn list_orders_by_id_and_filters_category() {
    let conn = open_memory().unwrap();
    seed(&conn);

    assert_eq!(external_ids(&list_pois(&conn, None).unwrap()), vec!["EXT-1", "EXT-2", "EXT-3"]);
    assert_eq!(external_ids(&list_pois(&conn, Some("Cafe")).unwrap()), vec!["EXT-1", "EXT-3"]);
    assert!(list_pois(&conn, Some("cafe")).unwrap().is_empty());
}

#[test]
fn search_by_external_id() {
    let conn = open_memory().unwrap();
    seed(&conn);

    assert_eq!(external_ids(&search_pois(&conn, "EXT-1").unwrap()), vec!["EXT-1"]);
    assert_eq!(external_ids(&search_pois(&conn, "ext-2").unwrap()), vec!["EXT-2"]);
    assert_eq!(search_pois(&conn, "EXT").unwrap().len(), 3);
    assert_eq!(search_pois(&conn, "").unwrap().len(), 3);
}

#[test]
fn search_by_internal_id() {
    let conn = open_memory().unwrap();
    let (_, _, c) = seed(&conn);
    // Push ids past the digits used in external ids
    conn.execute("UPDATE pois SET id = id + 100", []).unwrap();

    let found = search_pois(&conn, &(c.id + 100).to_string()).unwrap();
    assert_eq!(external_ids(&found), vec!["EXT-3"]);
}

#[test]
fn search_terms_must_all_match() {
    let conn = open_memory().unwrap();
    seed(&conn);
    assert_eq!(external_ids(&search_pois(&conn, "EXT 2").unwrap()), vec!["EXT-2"]);
    assert!(search_pois(&conn, "EXT-1 EXT-2").unwrap().is_empty());
}

#[test]
fn search_treats_like_wildcards_literally() {
    let conn = open_memory().unwrap();
    seed(&conn);
    assert!(search_pois(&conn, "%").unwrap().is_empty());
    assert!(search_pois(&conn, "EXT_1").unwrap().is_empty());
}

#[test]
fn stats_and_category_counts() {
    let conn = open_memory().unwrap();
    seed(&conn);
    upsert_poi(
        &conn,
        &PoiRecord {
            external_id: "EXT-4".to_string(),
            name: "Delta".to_string(),
            category: "Museum".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let stats = poi_stats(&conn).unwrap();
    assert_eq!(stats.pois, 4);
    assert_eq!(stats.categories, 3);
    assert_eq!(stats.rated, 3);
    assert_eq!(stats.located, 3);
    assert_eq!(stats.imports, 0);

    let counts = category_counts(&conn).unwrap();
    assert_eq!(counts[0], ("Cafe".to_string(), 2));
    assert_eq!(counts.len(), 3);
}

#[test]
fn import_logs_newest_first() {
    let conn = open_memory().unwrap();
    for path in ["a.csv", "b.json", "c.xml"] {
        insert_import_log(
            &conn,
            &ImportLog {
                id: 0,
                source_format: path.rsplit('.').next().unwrap().to_string(),
                source_path: path.to_string(),
                imported_at: now_timestamp(),
                records_created: 1,
                records_updated: 0,
                records_skipped: 0,
            },
        )
        .unwrap();
    }

    let logs = list_import_logs(&conn, 2).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].source_path, "c.xml");
    assert_eq!(logs[1].source_format, "json");
}
