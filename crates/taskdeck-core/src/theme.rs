use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  error,
  warn
};

use crate::storage::PreferenceStore;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  Light,
  Dark
}

impl Theme {
  pub fn from_system(
    prefers_dark: bool
  ) -> Self {
    if prefers_dark {
      Self::Dark
    } else {
      Self::Light
    }
  }

  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Anything other than "light" or "dark" means "follow the system".
  pub fn from_storage_value(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "light" => Some(Self::Light),
      | "dark" => Some(Self::Dark),
      | _ => None
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn is_dark(self) -> bool {
    matches!(self, Self::Dark)
  }
}

impl fmt::Display for Theme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.storage_value())
  }
}

/// Whether the theme is known yet. Nothing theme-dependent renders while
/// pending.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum ThemeResolution {
  #[default]
  Pending,
  Resolved(Theme)
}

/// Process-wide light/dark preference backed by a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
  store:               S,
  key:                 String,
  explicit:            Option<Theme>,
  system_prefers_dark: bool,
  resolution:          ThemeResolution
}

impl<S: PreferenceStore> ThemeStore<S> {
  pub fn new(
    store: S,
    key: impl Into<String>
  ) -> Self {
    Self {
      store,
      key: key.into(),
      explicit: None,
      system_prefers_dark: false,
      resolution: ThemeResolution::Pending
    }
  }

  /// Reconciles the stored choice with the system preference. A store
  /// that cannot be read counts as "no explicit choice".
  pub fn hydrate(
    &mut self,
    system_prefers_dark: bool
  ) -> Theme {
    self.system_prefers_dark =
      system_prefers_dark;
    self.explicit = match self
      .store
      .load(&self.key)
    {
      | Ok(raw) => raw
        .as_deref()
        .and_then(
          Theme::from_storage_value
        ),
      | Err(error) => {
        error!(
          %error,
          key = %self.key,
          "failed reading stored theme; \
           following system preference"
        );
        None
      }
    };
    let theme = self.recompute();
    debug!(
      %theme,
      explicit = ?self.explicit,
      system_prefers_dark,
      "hydrated theme"
    );
    theme
  }

  /// `None` until [`ThemeStore::hydrate`] or an explicit choice resolves
  /// the theme.
  pub fn theme(&self) -> Option<Theme> {
    match self.resolution {
      | ThemeResolution::Pending => None,
      | ThemeResolution::Resolved(
        theme
      ) => Some(theme)
    }
  }

  pub fn resolution(
    &self
  ) -> ThemeResolution {
    self.resolution
  }

  pub fn is_resolved(&self) -> bool {
    self.theme().is_some()
  }

  pub fn stored_preference(
    &self
  ) -> Option<Theme> {
    self.explicit
  }

  /// Applies `theme` immediately and persists it. A failed write is logged;
  /// the in-memory choice still holds for this session.
  pub fn set_theme(
    &mut self,
    theme: Theme
  ) -> Theme {
    self.explicit = Some(theme);
    if let Err(error) = self.store.save(
      &self.key,
      theme.storage_value()
    ) {
      warn!(
        %error,
        key = %self.key,
        "failed persisting theme"
      );
    }
    debug!(%theme, "set theme");
    self.recompute()
  }

  pub fn toggle(&mut self) -> Theme {
    let current = self
      .theme()
      .unwrap_or(Theme::from_system(
        self.system_prefers_dark
      ));
    self.set_theme(current.toggled())
  }

  /// Forgets the explicit choice.
  pub fn follow_system(
    &mut self
  ) -> Theme {
    self.explicit = None;
    if let Err(error) =
      self.store.remove(&self.key)
    {
      warn!(
        %error,
        key = %self.key,
        "failed clearing stored theme"
      );
    }
    self.recompute()
  }

  /// The system preference changed while running. Only matters when the
  /// user never chose explicitly.
  pub fn set_system_preference(
    &mut self,
    prefers_dark: bool
  ) -> Option<Theme> {
    self.system_prefers_dark =
      prefers_dark;
    if self.is_resolved() {
      Some(self.recompute())
    } else {
      None
    }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  fn recompute(&mut self) -> Theme {
    let theme =
      self.explicit.unwrap_or_else(|| {
        Theme::from_system(
          self.system_prefers_dark
        )
      });
    self.resolution =
      ThemeResolution::Resolved(theme);
    theme
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::*;
  use crate::storage::MemoryPreferenceStore;

  const KEY: &str = "taskdeck.theme";

  struct BrokenStore;

  impl PreferenceStore for BrokenStore {
    fn load(
      &self,
      _key: &str
    ) -> anyhow::Result<Option<String>>
    {
      Err(anyhow!("storage disabled"))
    }

    fn save(
      &mut self,
      _key: &str,
      _value: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("storage disabled"))
    }

    fn remove(
      &mut self,
      _key: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("storage disabled"))
    }
  }

  #[test]
  fn nothing_is_resolved_before_hydration(
  ) {
    let store = ThemeStore::new(
      MemoryPreferenceStore::default(),
      KEY
    );
    assert_eq!(store.theme(), None);
    assert_eq!(
      store.resolution(),
      ThemeResolution::Pending
    );
  }

  #[test]
  fn first_load_follows_the_system() {
    let mut store = ThemeStore::new(
      MemoryPreferenceStore::default(),
      KEY
    );
    assert_eq!(
      store.hydrate(true),
      Theme::Dark
    );
    assert_eq!(
      store.stored_preference(),
      None
    );
  }

  #[test]
  fn explicit_choice_beats_the_system() {
    let mut store = ThemeStore::new(
      MemoryPreferenceStore::with_entry(
        KEY, "light"
      ),
      KEY
    );
    assert_eq!(
      store.hydrate(true),
      Theme::Light
    );
    assert_eq!(
      store.set_system_preference(false),
      Some(Theme::Light)
    );
  }

  #[test]
  fn unrecognised_value_means_system() {
    let mut store = ThemeStore::new(
      MemoryPreferenceStore::with_entry(
        KEY, "sepia"
      ),
      KEY
    );
    assert_eq!(
      store.hydrate(false),
      Theme::Light
    );
    assert_eq!(
      store.set_system_preference(true),
      Some(Theme::Dark)
    );
  }

  #[test]
  fn set_theme_persists_the_choice() {
    let mut store = ThemeStore::new(
      MemoryPreferenceStore::default(),
      KEY
    );
    store.hydrate(false);
    store.set_theme(Theme::Dark);

    assert_eq!(
      store
        .store()
        .load(KEY)
        .expect("load")
        .as_deref(),
      Some("dark")
    );
    assert_eq!(
      store.toggle(),
      Theme::Light
    );
  }

  #[test]
  fn follow_system_clears_the_stored_key(
  ) {
    let mut store = ThemeStore::new(
      MemoryPreferenceStore::with_entry(
        KEY, "dark"
      ),
      KEY
    );
    store.hydrate(false);
    assert_eq!(
      store.follow_system(),
      Theme::Light
    );
    assert_eq!(
      store.store().load(KEY).expect("load"),
      None
    );
  }

  #[test]
  fn broken_storage_never_blocks_resolution(
  ) {
    let mut store =
      ThemeStore::new(BrokenStore, KEY);
    assert_eq!(
      store.hydrate(true),
      Theme::Dark
    );
    assert_eq!(
      store.set_theme(Theme::Light),
      Theme::Light
    );
    assert_eq!(
      store.theme(),
      Some(Theme::Light)
    );
  }
}
