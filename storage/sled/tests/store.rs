mod common;
use keepsake_storage::Store;
use keepsake_storage_sled::SledStore;

#[test]
fn test_read_write_remove() -> Result<(), anyhow::Error> {
    let store = SledStore::new_test()?;
    assert_eq!(store.read("theme")?, None);

    store.write("theme", "\"dark\"")?;
    store.write("theme", "\"light\"")?;
    store.write("Unicode: 你好", "{}")?;
    assert_eq!(store.read("theme")?.as_deref(), Some("\"light\""));
    assert_eq!(store.read("Unicode: 你好")?.as_deref(), Some("{}"));

    let mut keys = store.keys()?;
    keys.sort();
    assert_eq!(keys, vec!["Unicode: 你好".to_string(), "theme".to_string()]);

    store.remove("theme")?;
    store.remove("theme")?;
    assert_eq!(store.read("theme")?, None);
    Ok(())
}

#[test]
fn test_survives_reopen() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    {
        let store = common::open_at(&dir)?;
        store.write("counter", "5")?;
        store.flush()?;
    }

    let store = common::open_at(&dir)?;
    assert_eq!(store.read("counter")?.as_deref(), Some("5"));
    assert!(store.database.tree_names().iter().any(|name| &name[..] == &b"signals"[..]));
    Ok(())
}

#[test]
fn test_repeated_reopen() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    for round in 0..10 {
        let store = common::open_at(&dir)?;
        if round > 0 {
            assert_eq!(store.read("round")?, Some((round - 1).to_string()));
        }
        store.write("round", &round.to_string())?;
        store.flush()?;
    }
    Ok(())
}

#[test]
fn test_non_utf8_payload_is_an_error() -> Result<(), anyhow::Error> {
    let store = SledStore::new_test()?;
    store.database.db.open_tree("signals")?.insert("bad", &[0xff, 0xfe][..])?;
    assert!(matches!(store.read("bad"), Err(keepsake_storage::StorageError::Utf8(_))));
    Ok(())
}
