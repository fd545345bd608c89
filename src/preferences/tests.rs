use super::*;

fn store(dir: &tempfile::TempDir) -> PreferencesStore {
    PreferencesStore::new(dir.path().join("nested").join(FILE_NAME))
}

#[test]
fn defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(store(&dir).load(), Preferences { has_swiped: false });
}

#[test]
fn saves_and_loads() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    store.save(&Preferences { has_swiped: true }).unwrap();
    assert!(store.load().has_swiped);
}

#[test]
fn mark_swiped_persists() {
    let dir = tempfile::tempdir().unwrap();
    let preferences = store(&dir).mark_swiped().unwrap();
    assert!(preferences.has_swiped);
    assert!(store(&dir).load().has_swiped);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "not json").unwrap();
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn tolerates_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{}").unwrap();
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    fs::create_dir_all(store.path()).unwrap();
    assert_eq!(store.load(), Preferences::default());
}
