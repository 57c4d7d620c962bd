use storage::repository::{KeyValueStore, Storage, StoreKey};
use storage::sqlite::SqliteStore;

#[tokio::test]
async fn sqlite_round_trips_values() {
    let store = SqliteStore::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    let key = StoreKey::Notes.as_str();
    assert_eq!(store.get(key).await.unwrap(), None);

    store.set(key, "Remember to follow up.").await.unwrap();
    assert_eq!(
        store.get(key).await.unwrap().as_deref(),
        Some("Remember to follow up.")
    );

    store.set(key, "Second draft").await.unwrap();
    assert_eq!(store.get(key).await.unwrap().as_deref(), Some("Second draft"));
}

#[tokio::test]
async fn sqlite_remove_makes_key_absent() {
    let store = SqliteStore::connect("sqlite:file:memdb_remove?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    let key = StoreKey::Sessions.as_str();
    store.set(key, "[]").await.unwrap();
    store.remove(key).await.unwrap();
    assert_eq!(store.get(key).await.unwrap(), None);

    // Removing again is not an error.
    store.remove(key).await.unwrap();
}

#[tokio::test]
async fn sqlite_keeps_empty_string_distinct_from_absent() {
    let store = SqliteStore::connect("sqlite:file:memdb_empty?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.set(StoreKey::Notes.as_str(), "").await.unwrap();
    assert_eq!(
        store.get(StoreKey::Notes.as_str()).await.unwrap(),
        Some(String::new())
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let store = SqliteStore::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("first migrate");
    store.set(StoreKey::Progress.as_str(), "72").await.unwrap();
    store.migrate().await.expect("second migrate");

    assert_eq!(
        store.get(StoreKey::Progress.as_str()).await.unwrap().as_deref(),
        Some("72")
    );
}

#[tokio::test]
async fn storage_sqlite_builds_a_migrated_store() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .store
        .set(StoreKey::Progress.as_str(), "40")
        .await
        .unwrap();
    assert_eq!(
        storage
            .store
            .get(StoreKey::Progress.as_str())
            .await
            .unwrap()
            .as_deref(),
        Some("40")
    );
}
