use std::collections::BTreeMap;
#[cfg(feature = "file-store")]
use std::fs;
#[cfg(feature = "file-store")]
use std::io::Write;
#[cfg(feature = "file-store")]
use std::path::{
  Path,
  PathBuf
};

#[cfg(feature = "file-store")]
use anyhow::{
  Context,
  anyhow
};
#[cfg(feature = "file-store")]
use tempfile::NamedTempFile;
#[cfg(feature = "file-store")]
use tracing::{
  debug,
  warn
};

/// Small key/value store for user preferences that survive a reload.
pub trait PreferenceStore {
  fn load(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn save(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()>;
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct MemoryPreferenceStore {
  entries: BTreeMap<String, String>
}

impl MemoryPreferenceStore {
  pub fn with_entry(
    key: &str,
    value: &str
  ) -> Self {
    let mut entries = BTreeMap::new();
    entries.insert(
      key.to_string(),
      value.to_string()
    );
    Self { entries }
  }
}

impl PreferenceStore
  for MemoryPreferenceStore
{
  fn load(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn save(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.entries.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    self.entries.remove(key);
    Ok(())
  }
}

/// Preferences kept in one TOML table of strings, rewritten atomically on
/// every change.
#[cfg(feature = "file-store")]
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
  path: PathBuf
}

#[cfg(feature = "file-store")]
impl FilePreferenceStore {
  #[tracing::instrument(skip(dir))]
  pub fn open(
    dir: &Path
  ) -> anyhow::Result<Self> {
    fs::create_dir_all(dir)
      .with_context(|| {
        format!(
          "failed to create {}",
          dir.display()
        )
      })?;
    Ok(Self {
      path: dir
        .join("preferences.toml")
    })
  }

  /// Opens the store under the platform config directory.
  pub fn open_default()
  -> anyhow::Result<Self> {
    let dir =
      crate::config::resolve_config_dir(
      )?;
    Self::open(&dir)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn read_text(
    &self
  ) -> anyhow::Result<Option<String>> {
    if !self.path.exists() {
      return Ok(None);
    }
    fs::read_to_string(&self.path)
      .map(Some)
      .with_context(|| {
        format!(
          "failed to read {}",
          self.path.display()
        )
      })
  }

  fn parse_entries(
    &self,
    text: &str
  ) -> anyhow::Result<BTreeMap<String, String>>
  {
    toml::from_str(text).map_err(
      |error| {
        anyhow!(
          "failed parsing {}: {error}",
          self.path.display()
        )
      }
    )
  }

  fn read_entries(
    &self
  ) -> anyhow::Result<BTreeMap<String, String>>
  {
    match self.read_text()? {
      | Some(text) => {
        self.parse_entries(&text)
      }
      | None => Ok(BTreeMap::new())
    }
  }

  /// Starting point for a rewrite. A file that no longer parses is
  /// replaced wholesale so later writes still land.
  fn entries_for_rewrite(
    &self
  ) -> anyhow::Result<BTreeMap<String, String>>
  {
    let Some(text) = self.read_text()?
    else {
      return Ok(BTreeMap::new());
    };
    match self.parse_entries(&text) {
      | Ok(entries) => Ok(entries),
      | Err(error) => {
        warn!(
          %error,
          file = %self.path.display(),
          "discarding unreadable \
           preferences"
        );
        Ok(BTreeMap::new())
      }
    }
  }

  fn write_entries(
    &self,
    entries: &BTreeMap<String, String>
  ) -> anyhow::Result<()> {
    debug!(
      file = %self.path.display(),
      count = entries.len(),
      "saving preferences atomically"
    );
    let text = toml::to_string(entries)
      .context(
        "failed to encode preferences"
      )?;
    let dir = self
      .path
      .parent()
      .unwrap_or_else(|| Path::new("."));
    let mut temp =
      NamedTempFile::new_in(dir)?;
    temp.write_all(text.as_bytes())?;
    temp.flush()?;
    temp.persist(&self.path).map_err(
      |error| {
        anyhow!(
          "failed to persist {}: {}",
          self.path.display(),
          error
        )
      }
    )?;
    Ok(())
  }
}

#[cfg(feature = "file-store")]
impl PreferenceStore
  for FilePreferenceStore
{
  fn load(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(
      self
        .read_entries()?
        .remove(key)
    )
  }

  fn save(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let mut entries =
      self.entries_for_rewrite()?;
    entries.insert(
      key.to_string(),
      value.to_string()
    );
    self.write_entries(&entries)
  }

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    if !self.path.exists() {
      return Ok(());
    }
    let mut entries =
      self.entries_for_rewrite()?;
    entries.remove(key);
    self.write_entries(&entries)
  }
}

#[cfg(all(
  test,
  feature = "file-store"
))]
mod tests {
  use tempfile::tempdir;

  use super::*;
  use crate::theme::{
    Theme,
    ThemeStore
  };

  const KEY: &str = "taskdeck.theme";

  #[test]
  fn file_store_keeps_other_keys() {
    let temp = tempdir().expect("tempdir");
    let mut store =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("open store");

    store
      .save("a", "1")
      .expect("save a");
    store
      .save("b", "2")
      .expect("save b");
    store.remove("a").expect("remove a");

    let reopened =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("reopen store");
    assert_eq!(
      reopened.load("a").expect("load a"),
      None
    );
    assert_eq!(
      reopened
        .load("b")
        .expect("load b")
        .as_deref(),
      Some("2")
    );
  }

  #[test]
  fn missing_file_reads_as_empty() {
    let temp = tempdir().expect("tempdir");
    let store =
      FilePreferenceStore::open(
        &temp.path().join("nested")
      )
      .expect("open store");
    assert_eq!(
      store
        .load("taskdeck.theme")
        .expect("load"),
      None
    );
  }

  #[test]
  fn corrupt_file_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let store =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("open store");
    fs::write(store.path(), "= nope")
      .expect("write garbage");
    assert!(store.load("x").is_err());
  }

  #[test]
  fn theme_choice_replaces_a_corrupt_file(
  ) {
    let temp = tempdir().expect("tempdir");
    let store =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("open store");
    fs::write(store.path(), "= nope")
      .expect("write garbage");

    let mut theme =
      ThemeStore::new(store, KEY);
    assert_eq!(
      theme.hydrate(false),
      Theme::Light
    );
    theme.set_theme(Theme::Dark);

    let reopened =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("reopen store");
    assert_eq!(
      reopened
        .load(KEY)
        .expect("load after rewrite")
        .as_deref(),
      Some("dark")
    );
    let mut reloaded =
      ThemeStore::new(reopened, KEY);
    assert_eq!(
      reloaded.hydrate(false),
      Theme::Dark
    );
  }

  #[test]
  fn remove_over_a_corrupt_file_leaves_it_readable(
  ) {
    let temp = tempdir().expect("tempdir");
    let mut store =
      FilePreferenceStore::open(
        temp.path()
      )
      .expect("open store");
    fs::write(store.path(), "= nope")
      .expect("write garbage");

    store
      .remove(KEY)
      .expect("remove over garbage");
    assert_eq!(
      store.load(KEY).expect("load"),
      None
    );
  }
}
