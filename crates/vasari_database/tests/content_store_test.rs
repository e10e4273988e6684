//! Tests for the SQLite content store.

use diesel::prelude::*;
use tempfile::TempDir;
use vasari_core::{ContentType, NewContent, Page, Payload};
use vasari_database::{SqliteContentStore, build_pool};
use vasari_interface::ContentStore;

fn temp_store() -> (SqliteContentStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = dir.path().join("content.db");
    let store = SqliteContentStore::connect(url.to_str().unwrap()).unwrap();
    (store, dir)
}

fn text_content(name: &str, body: &str) -> NewContent {
    NewContent::new(
        ContentType::Text,
        name.to_string(),
        Payload::Text(body.to_string()),
        None,
    )
}

#[tokio::test]
async fn test_save_assigns_increasing_ids() {
    let (store, _dir) = temp_store();

    let first = store
        .save_content(text_content("a.txt", "one"))
        .await
        .unwrap();
    let second = store
        .save_content(text_content("b.txt", "two"))
        .await
        .unwrap();
    let third = store
        .save_content(text_content("c.txt", "three"))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_round_trip_binary_payload() {
    let (store, _dir) = temp_store();

    let bytes: Vec<u8> = (0..=255).collect();
    let id = store
        .save_content(NewContent::new(
            ContentType::Image,
            "photo.png".to_string(),
            Payload::Binary(bytes.clone()),
            Some("Uploaded Image".to_string()),
        ))
        .await
        .unwrap();

    let records = store.get_content(None).await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id, id);
    assert_eq!(record.content_type, ContentType::Image);
    assert_eq!(record.original_path, "photo.png");
    assert_eq!(record.payload, Payload::Binary(bytes));
    assert_eq!(record.metadata.as_deref(), Some("Uploaded Image"));
}

#[tokio::test]
async fn test_round_trip_text_payload() {
    let (store, _dir) = temp_store();

    store
        .save_content(text_content("notes.md", "# héllo wörld"))
        .await
        .unwrap();

    let records = store.get_content(None).await.unwrap();
    assert_eq!(
        records[0].payload,
        Payload::Text("# héllo wörld".to_string())
    );
}

#[tokio::test]
async fn test_get_content_returns_all_in_insert_order() {
    let (store, _dir) = temp_store();

    for i in 0..5 {
        store
            .save_content(text_content(&format!("file{i}.txt"), "body"))
            .await
            .unwrap();
    }

    let records = store.get_content(None).await.unwrap();
    assert_eq!(records.len(), 5);

    // created_at ascending with id as tiebreak; all five share a second.
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    for pair in records.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_pagination_partitions_in_order() {
    let (store, _dir) = temp_store();

    for i in 0..4 {
        store
            .save_content(text_content(&format!("file{i}.txt"), "body"))
            .await
            .unwrap();
    }

    let first = store.get_content(Some(Page::new(1, 2))).await.unwrap();
    let second = store.get_content(Some(Page::new(2, 2))).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(first[0].original_path, "file0.txt");
    assert_eq!(first[1].original_path, "file1.txt");
    assert_eq!(second[0].original_path, "file2.txt");
    assert_eq!(second[1].original_path, "file3.txt");
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let (store, _dir) = temp_store();

    store
        .save_content(text_content("only.txt", "body"))
        .await
        .unwrap();

    let records = store.get_content(Some(Page::new(5, 10))).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_connect_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let url = dir.path().join("content.db");
    let url = url.to_str().unwrap();

    let store = SqliteContentStore::connect(url).unwrap();
    store
        .save_content(text_content("kept.txt", "still here"))
        .await
        .unwrap();

    // Second connect against the same file must not disturb the schema or
    // the data.
    let reopened = SqliteContentStore::connect(url).unwrap();
    let records = reopened.get_content(None).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original_path, "kept.txt");
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_ids() {
    let (store, _dir) = temp_store();

    let (a, b, c, d) = tokio::join!(
        store.save_content(text_content("a.txt", "a")),
        store.save_content(text_content("b.txt", "b")),
        store.save_content(text_content("c.txt", "c")),
        store.save_content(text_content("d.txt", "d")),
    );

    let mut ids = vec![a.unwrap(), b.unwrap(), c.unwrap(), d.unwrap()];
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_record_interaction_appends() {
    let (store, dir) = temp_store();

    let content_id = store
        .save_content(text_content("seen.txt", "body"))
        .await
        .unwrap();

    let first = store.record_interaction(content_id, "view").await.unwrap();
    let second = store.record_interaction(content_id, "like").await.unwrap();
    assert!(first < second);

    // Check the rows landed, straight through diesel.
    let url = dir.path().join("content.db");
    let pool = build_pool(url.to_str().unwrap()).unwrap();
    let mut conn = pool.get().unwrap();

    use vasari_database::schema::interactions::dsl;
    let kinds: Vec<String> = dsl::interactions
        .filter(dsl::content_id.eq(content_id))
        .order(dsl::id.asc())
        .select(dsl::interaction_type)
        .load(&mut conn)
        .unwrap();
    assert_eq!(kinds, vec!["view".to_string(), "like".to_string()]);
}
