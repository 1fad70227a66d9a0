#![cfg(feature = "file-store")]

mod common;

use taskdeck_core::storage::FilePreferenceStore;
use taskdeck_core::theme::ThemeResolution;
use taskdeck_core::{
  DashboardConfig,
  PreferenceStore,
  Theme,
  ThemeStore
};
use tempfile::tempdir;

#[test]
fn dark_choice_survives_a_reload_without_a_light_frame(
) {
  common::init_tracing();
  let temp = tempdir().expect("tempdir");
  let key = DashboardConfig::default()
    .theme
    .storage_key;

  {
    let store =
      FilePreferenceStore::open(temp.path())
        .expect("open store");
    let mut theme =
      ThemeStore::new(store, key.clone());
    assert_eq!(
      theme.hydrate(false),
      Theme::Light
    );
    theme.set_theme(Theme::Dark);
  }

  let reopened =
    FilePreferenceStore::open(temp.path())
      .expect("reopen store");
  assert_eq!(
    reopened
      .load(&key)
      .expect("load")
      .as_deref(),
    Some("dark")
  );

  let mut theme =
    ThemeStore::new(reopened, key);
  assert_eq!(
    theme.resolution(),
    ThemeResolution::Pending
  );
  assert_eq!(theme.theme(), None);

  assert_eq!(
    theme.hydrate(false),
    Theme::Dark
  );
  assert_eq!(
    theme.theme(),
    Some(Theme::Dark)
  );
}

#[test]
fn following_the_system_again_removes_the_entry(
) {
  common::init_tracing();
  let temp = tempdir().expect("tempdir");
  let store =
    FilePreferenceStore::open(temp.path())
      .expect("open store");
  let mut theme =
    ThemeStore::new(store, "taskdeck.theme");
  theme.hydrate(true);
  theme.set_theme(Theme::Light);
  theme.follow_system();

  let reopened =
    FilePreferenceStore::open(temp.path())
      .expect("reopen store");
  let mut theme =
    ThemeStore::new(reopened, "taskdeck.theme");
  assert_eq!(
    theme.hydrate(true),
    Theme::Dark
  );
  assert_eq!(
    theme.stored_preference(),
    None
  );
}
