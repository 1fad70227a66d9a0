use std::fs;
#[cfg(feature = "file-store")]
use std::path::PathBuf;
use std::path::Path;

use anyhow::{
  Context,
  anyhow,
  bail
};
use chrono::NaiveDate;
use serde::{
  Deserialize,
  Deserializer
};
use tracing::{
  debug,
  info
};

use crate::route::{
  MenuGroup,
  Route
};

const DEFAULT_DASHBOARD_TOML: &str =
  include_str!(
    "../assets/dashboard.toml"
  );

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct DashboardConfig {
  #[serde(default)]
  pub version:    u32,
  #[serde(default)]
  pub profile:    ProfileConfig,
  #[serde(default)]
  pub typewriter: TypewriterConfig,
  #[serde(default)]
  pub sidebar:    SidebarConfig,
  #[serde(default)]
  pub navigation: NavigationConfig,
  #[serde(default)]
  pub theme:      ThemeConfig,
  #[serde(default)]
  pub schedule:   ScheduleConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ProfileConfig {
  #[serde(
    default = "default_profile_name"
  )]
  pub name:               String,
  #[serde(
    default = "default_profile_title"
  )]
  pub title:              String,
  #[serde(
    default = "default_search_placeholder"
  )]
  pub search_placeholder: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TypewriterConfig {
  #[serde(
    default = "default_typewriter_speed_ms"
  )]
  pub speed_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SidebarConfig {
  #[serde(
    default = "default_expanded_width"
  )]
  pub expanded_width:  u32,
  #[serde(
    default = "default_collapsed_width"
  )]
  pub collapsed_width: u32,
  #[serde(
    default = "default_initially_open"
  )]
  pub initially_open:  bool,
  #[serde(
    default = "default_initial_group",
    deserialize_with = "deserialize_group_setting"
  )]
  pub initial_group:   Option<MenuGroup>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct NavigationConfig {
  /// `"none"` starts with no active section.
  #[serde(
    default = "default_initial_route",
    deserialize_with = "deserialize_route_setting"
  )]
  pub initial_route: Option<Route>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ThemeConfig {
  #[serde(
    default = "default_theme_storage_key"
  )]
  pub storage_key: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ScheduleConfig {
  #[serde(
    default = "default_schedule_date"
  )]
  pub date: NaiveDate
}

impl ScheduleConfig {
  /// Sidebar label, e.g. "June, 28, 2023".
  pub fn label(&self) -> String {
    self
      .date
      .format("%B, %d, %Y")
      .to_string()
  }
}

impl DashboardConfig {
  /// The configuration compiled into the binary.
  pub fn builtin() -> anyhow::Result<Self>
  {
    Self::from_toml_str(
      DEFAULT_DASHBOARD_TOML
    )
    .context(
      "built-in dashboard config is \
       invalid"
    )
  }

  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let config: Self =
      toml::from_str(raw).map_err(
        |error| {
          anyhow!(
            "failed parsing dashboard \
             config: {error}"
          )
        }
      )?;
    config.validate()?;
    debug!(
      version = config.version,
      initial_route = ?config.navigation.initial_route,
      "parsed dashboard config"
    );
    Ok(config)
  }

  #[tracing::instrument]
  pub fn load(
    path: &Path
  ) -> anyhow::Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    let config =
      Self::from_toml_str(&text)
        .with_context(|| {
          format!(
            "invalid dashboard config \
             in {}",
            path.display()
          )
        })?;
    info!(path = %path.display(), "loaded dashboard config");
    Ok(config)
  }

  fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.typewriter.speed_ms == 0 {
      bail!(
        "typewriter.speed_ms must be \
         greater than zero"
      );
    }
    if self.sidebar.collapsed_width == 0
    {
      bail!(
        "sidebar.collapsed_width must \
         be greater than zero"
      );
    }
    if self.sidebar.collapsed_width
      >= self.sidebar.expanded_width
    {
      bail!(
        "sidebar.collapsed_width ({}) \
         must be less than \
         sidebar.expanded_width ({})",
        self.sidebar.collapsed_width,
        self.sidebar.expanded_width
      );
    }
    if self
      .theme
      .storage_key
      .trim()
      .is_empty()
    {
      bail!(
        "theme.storage_key must not be \
         empty"
      );
    }
    Ok(())
  }
}

/// Directory a native host reads `dashboard.toml` overrides from.
#[cfg(feature = "file-store")]
pub fn resolve_config_dir()
-> anyhow::Result<PathBuf> {
  dirs::config_dir()
    .map(|dir| dir.join("taskdeck"))
    .ok_or_else(|| {
      anyhow!(
        "no config directory available \
         on this platform"
      )
    })
}

fn deserialize_group_setting<'de, D>(
  deserializer: D
) -> Result<Option<MenuGroup>, D::Error>
where
  D: Deserializer<'de>
{
  let raw =
    String::deserialize(deserializer)?;
  let raw = raw.trim();
  if raw.is_empty() || raw == "none" {
    return Ok(None);
  }
  MenuGroup::from_slug(raw)
    .map(Some)
    .ok_or_else(|| {
      serde::de::Error::custom(format!(
        "unknown menu group `{raw}`"
      ))
    })
}

fn deserialize_route_setting<'de, D>(
  deserializer: D
) -> Result<Option<Route>, D::Error>
where
  D: Deserializer<'de>
{
  let raw =
    String::deserialize(deserializer)?;
  let raw = raw.trim();
  if raw.is_empty() || raw == "none" {
    return Ok(None);
  }
  Route::from_slug(raw)
    .map(Some)
    .ok_or_else(|| {
      serde::de::Error::custom(format!(
        "unknown route `{raw}`"
      ))
    })
}

fn default_profile_name() -> String {
  "Walter".to_string()
}

fn default_profile_title() -> String {
  "Designer Pro+".to_string()
}

fn default_search_placeholder() -> String
{
  "Redesign App".to_string()
}

fn default_typewriter_speed_ms() -> u32 {
  150
}

fn default_expanded_width() -> u32 {
  300
}

fn default_collapsed_width() -> u32 {
  80
}

fn default_initially_open() -> bool {
  true
}

fn default_initial_group()
-> Option<MenuGroup> {
  Some(MenuGroup::TaskBoard)
}

fn default_initial_route() -> Option<Route>
{
  Some(Route::TaskBoard)
}

fn default_theme_storage_key() -> String {
  "taskdeck.theme".to_string()
}

fn default_schedule_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2023, 6, 28)
    .unwrap_or_default()
}

impl Default for ProfileConfig {
  fn default() -> Self {
    Self {
      name:               default_profile_name(
      ),
      title:              default_profile_title(
      ),
      search_placeholder:
        default_search_placeholder()
    }
  }
}

impl Default for TypewriterConfig {
  fn default() -> Self {
    Self {
      speed_ms:
        default_typewriter_speed_ms()
    }
  }
}

impl Default for SidebarConfig {
  fn default() -> Self {
    Self {
      expanded_width:  default_expanded_width(
      ),
      collapsed_width:
        default_collapsed_width(),
      initially_open:  default_initially_open(
      ),
      initial_group:   default_initial_group(
      )
    }
  }
}

impl Default for NavigationConfig {
  fn default() -> Self {
    Self {
      initial_route:
        default_initial_route()
    }
  }
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      storage_key:
        default_theme_storage_key()
    }
  }
}

impl Default for ScheduleConfig {
  fn default() -> Self {
    Self {
      date: default_schedule_date()
    }
  }
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      version:    1,
      profile:    ProfileConfig::default(),
      typewriter:
        TypewriterConfig::default(),
      sidebar:    SidebarConfig::default(),
      navigation:
        NavigationConfig::default(),
      theme:      ThemeConfig::default(),
      schedule:   ScheduleConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_matches_code_defaults() {
    let builtin =
      DashboardConfig::builtin()
        .expect("builtin config");
    assert_eq!(
      builtin,
      DashboardConfig::default()
    );
    assert_eq!(
      builtin.schedule.label(),
      "June, 28, 2023"
    );
  }

  #[test]
  fn missing_sections_fall_back_to_defaults(
  ) {
    let config =
      DashboardConfig::from_toml_str(
        "[profile]\nname = \"Ada\"\n"
      )
      .expect("partial config");
    assert_eq!(config.profile.name, "Ada");
    assert_eq!(
      config.profile.title,
      "Designer Pro+"
    );
    assert_eq!(
      config.sidebar.expanded_width,
      300
    );
  }

  #[test]
  fn group_setting_accepts_none() {
    let config =
      DashboardConfig::from_toml_str(
        "[sidebar]\ninitial_group = \
         \"none\"\n"
      )
      .expect("config");
    assert_eq!(
      config.sidebar.initial_group,
      None
    );
  }

  #[test]
  fn unknown_slugs_are_rejected() {
    let group_error =
      DashboardConfig::from_toml_str(
        "[sidebar]\ninitial_group = \
         \"inbox\"\n"
      )
      .expect_err("inbox is not a group");
    assert!(
      group_error
        .to_string()
        .contains("inbox")
    );

    assert!(
      DashboardConfig::from_toml_str(
        "[navigation]\ninitial_route = \
         \"settings\"\n"
      )
      .is_err()
    );
  }

  #[test]
  fn collapsed_width_must_stay_below_expanded(
  ) {
    let error =
      DashboardConfig::from_toml_str(
        "[sidebar]\nexpanded_width = \
         80\ncollapsed_width = 80\n"
      )
      .expect_err("widths overlap");
    assert!(
      error
        .to_string()
        .contains("collapsed_width")
    );
  }

  #[test]
  fn zero_speed_is_rejected() {
    assert!(
      DashboardConfig::from_toml_str(
        "[typewriter]\nspeed_ms = 0\n"
      )
      .is_err()
    );
  }

  #[test]
  fn route_setting_accepts_none() {
    let config =
      DashboardConfig::from_toml_str(
        "[navigation]\ninitial_route = \
         \"none\"\n"
      )
      .expect("config");
    assert_eq!(
      config.navigation.initial_route,
      None
    );
    assert_eq!(
      crate::NavigationState::from_config(
        &config
      )
      .active_route(),
      None
    );

    let error =
      DashboardConfig::from_toml_str(
        "[navigation]\ninitial_route = \
         \"settings\"\n"
      )
      .expect_err("unknown route");
    assert!(
      error
        .to_string()
        .contains("settings")
    );
  }

  #[test]
  fn load_reads_an_override_file() {
    let temp = tempfile::tempdir()
      .expect("tempdir");
    let path =
      temp.path().join("dashboard.toml");
    fs::write(
      &path,
      "[profile]\nname = \"Ada\"\n\n\
       [typewriter]\nspeed_ms = 40\n"
    )
    .expect("write override");

    let config =
      DashboardConfig::load(&path)
        .expect("load override");
    assert_eq!(config.profile.name, "Ada");
    assert_eq!(
      config.typewriter.speed_ms,
      40
    );
    assert_eq!(
      config.theme.storage_key,
      "taskdeck.theme"
    );
  }

  #[test]
  fn load_reports_a_missing_file() {
    let temp = tempfile::tempdir()
      .expect("tempdir");
    let error = DashboardConfig::load(
      &temp.path().join("absent.toml")
    )
    .expect_err("file is missing");
    assert!(
      error
        .to_string()
        .contains("failed to read")
    );
  }

  #[test]
  fn load_names_the_path_of_an_invalid_file(
  ) {
    let temp = tempfile::tempdir()
      .expect("tempdir");
    let path =
      temp.path().join("dashboard.toml");
    fs::write(
      &path,
      "[typewriter]\nspeed_ms = 0\n"
    )
    .expect("write override");

    let error =
      DashboardConfig::load(&path)
        .expect_err("zero speed");
    let message = error.to_string();
    assert!(message.contains(
      &path.display().to_string()
    ));
    assert!(
      format!("{error:#}")
        .contains("speed_ms")
    );
  }

  #[cfg(feature = "file-store")]
  #[test]
  fn config_dir_is_namespaced() {
    if let Ok(dir) = resolve_config_dir()
    {
      assert!(dir.ends_with("taskdeck"));
    }
  }
}
