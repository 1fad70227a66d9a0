use anyhow::anyhow;
use gloo::events::EventListener;
use taskdeck_core::PreferenceStore;
use web_sys::{
  MediaQueryList,
  Storage
};
use yew::Callback;

const DARK_SCHEME_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// Browser `localStorage`. Private browsing or a disabled store surfaces
/// as an error on every call.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct LocalPreferenceStore;

fn local_storage()
-> anyhow::Result<Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(|err| {
      anyhow!(
        "localStorage unavailable: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!("localStorage disabled")
    })
}

impl PreferenceStore
  for LocalPreferenceStore
{
  fn load(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "failed reading {key}: {err:?}"
        )
      })
  }

  fn save(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "failed writing {key}: {err:?}"
        )
      })
  }

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .remove_item(key)
      .map_err(|err| {
        anyhow!(
          "failed removing {key}: {err:?}"
        )
      })
  }
}

fn dark_scheme_query()
-> Option<MediaQueryList> {
  web_sys::window()?
    .match_media(DARK_SCHEME_QUERY)
    .ok()
    .flatten()
}

pub fn system_prefers_dark() -> bool {
  dark_scheme_query()
    .is_some_and(|query| query.matches())
}

/// Reports OS-level light/dark switches until the listener is dropped.
pub fn watch_system_theme(
  on_change: Callback<bool>
) -> Option<EventListener> {
  let query = dark_scheme_query()?;
  let watched = query.clone();
  Some(EventListener::new(
    &query,
    "change",
    move |_| {
      on_change.emit(watched.matches())
    }
  ))
}
