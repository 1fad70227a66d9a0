//! Static content the dashboard panels render. Nothing here is computed;
//! panels are pure functions of these slices and the resolved theme.

use anyhow::{
  anyhow,
  bail
};
use serde::Deserialize;
use tracing::debug;

use crate::route::Route;

const DEFAULT_CATALOG_TOML: &str =
  include_str!("../assets/catalog.toml");

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Catalog {
  #[serde(default)]
  pub version:         u32,
  pub header:          HeaderInfo,
  #[serde(default)]
  pub project_board:   Vec<BoardItem>,
  #[serde(default)]
  pub task_board:      Vec<SubMenuItem>,
  #[serde(default)]
  pub stats:           Vec<StatCard>,
  #[serde(default)]
  pub recent_activity: Vec<ActivityRow>,
  #[serde(default)]
  pub weekly_activity: Vec<WeeklyBar>,
  #[serde(default)]
  pub templates:       Vec<TemplateEntry>,
  pub calendar:        CalendarMock,
  pub timeline:        TimelineMock,
  pub insights:        TeamInsights,
  pub filters:         FiltersMock,
  pub last_project:    LastProject
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct HeaderInfo {
  pub project:             String,
  #[serde(default)]
  pub breadcrumb:          Vec<String>,
  #[serde(default)]
  pub collaborators:       Vec<String>,
  #[serde(default)]
  pub extra_collaborators: u32,
  #[serde(default)]
  pub inbox_unread:        u32
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BoardMarker {
  Square,
  Ring,
  RingAmber,
  Triangle
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct BoardItem {
  pub name:     String,
  pub marker:   BoardMarker,
  pub badge:    Option<u32>,
  #[serde(default)]
  pub children: Vec<String>
}

impl BoardItem {
  pub fn is_tree(&self) -> bool {
    !self.children.is_empty()
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SubMenuItem {
  pub name:   String,
  pub route:  Option<Route>,
  pub accent: String,
  pub count:  Option<u32>
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct StatCard {
  pub label:  String,
  pub value:  String,
  pub change: String,
  pub trend:  Trend,
  pub accent: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
  InProgress,
  Completed,
  Delayed
}

impl ActivityStatus {
  pub fn label(self) -> &'static str {
    match self {
      | Self::InProgress => "In Progress",
      | Self::Completed => "Completed",
      | Self::Delayed => "Delayed"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ActivityRow {
  pub project: String,
  pub task:    String,
  pub status:  ActivityStatus,
  pub time:    String,
  pub user:    String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct WeeklyBar {
  pub day:     String,
  pub percent: u8
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
  Project,
  Task
}

impl TemplateKind {
  pub fn label(self) -> &'static str {
    match self {
      | Self::Project => "Project",
      | Self::Task => "Task"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TemplateEntry {
  pub id:          u32,
  pub name:        String,
  pub description: String,
  pub kind:        TemplateKind,
  pub users:       u32,
  pub rating:      f32,
  pub accent:      String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarDay {
  pub name: String,
  pub date: String,
  pub full: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarEvent {
  pub day:      usize,
  pub slot:     usize,
  pub span:     usize,
  pub title:    String,
  pub accent:   String,
  pub progress: Option<u8>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarMock {
  pub month:      String,
  pub range:      String,
  pub views:      Vec<String>,
  pub edited_ago: String,
  pub edited_by:  String,
  pub time_slots: Vec<String>,
  pub days:       Vec<CalendarDay>,
  #[serde(default)]
  pub events:     Vec<CalendarEvent>
}

impl CalendarMock {
  pub fn events_on(
    &self,
    day: usize
  ) -> impl Iterator<Item = &CalendarEvent>
  {
    self
      .events
      .iter()
      .filter(move |event| event.day == day)
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TimelineDay {
  pub name: String,
  pub date: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TagTone {
  Default,
  Green,
  Yellow,
  Pink
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TimelineTag {
  pub label: String,
  pub tone:  TagTone
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TimelineTask {
  pub id:     String,
  pub title:  String,
  pub date:   String,
  pub start:  String,
  pub end:    String,
  #[serde(default)]
  pub tags:   Vec<TimelineTag>,
  pub column: usize,
  pub row:    usize
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TimelineMock {
  pub days:  Vec<TimelineDay>,
  #[serde(default)]
  pub tasks: Vec<TimelineTask>
}

impl TimelineMock {
  pub fn row_count(&self) -> usize {
    self
      .tasks
      .iter()
      .map(|task| task.row + 1)
      .max()
      .unwrap_or(0)
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct LegendEntry {
  pub label:  String,
  pub count:  u32,
  pub accent: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TeamInsights {
  pub trend:      String,
  pub time_spent: String,
  pub time_share: u8,
  pub tasks:      u32,
  pub task_share: u8,
  pub completion: u8,
  #[serde(default)]
  pub legend:     Vec<LegendEntry>
}

impl TeamInsights {
  pub fn legend_total(&self) -> u32 {
    self
      .legend
      .iter()
      .map(|entry| entry.count)
      .sum()
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct FiltersMock {
  pub active:  u32,
  #[serde(default)]
  pub colors:  Vec<String>,
  pub deleted: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct LastProject {
  pub name:        String,
  pub members:     u32,
  pub figma_label: String,
  #[serde(default)]
  pub cursors:     Vec<String>,
  #[serde(default)]
  pub flow_nodes:  Vec<String>
}

impl Catalog {
  /// The catalog compiled into the binary.
  pub fn builtin() -> anyhow::Result<Self>
  {
    Self::from_toml_str(
      DEFAULT_CATALOG_TOML
    )
  }

  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let catalog: Self =
      toml::from_str(raw).map_err(
        |error| {
          anyhow!(
            "failed parsing catalog: \
             {error}"
          )
        }
      )?;
    catalog.validate()?;
    debug!(
      templates = catalog.templates.len(),
      timeline_tasks =
        catalog.timeline.tasks.len(),
      "parsed catalog"
    );
    Ok(catalog)
  }

  /// Case-insensitive match on template name or description. A blank
  /// query returns everything.
  pub fn templates_matching(
    &self,
    query: &str
  ) -> Vec<&TemplateEntry> {
    let needle =
      query.trim().to_lowercase();
    self
      .templates
      .iter()
      .filter(|entry| {
        needle.is_empty()
          || entry
            .name
            .to_lowercase()
            .contains(&needle)
          || entry
            .description
            .to_lowercase()
            .contains(&needle)
      })
      .collect()
  }

  fn validate(
    &self
  ) -> anyhow::Result<()> {
    let day_count =
      self.calendar.days.len();
    let slot_count =
      self.calendar.time_slots.len();
    for event in &self.calendar.events {
      if event.day >= day_count {
        bail!(
          "calendar event `{}` is on day \
           {} but only {} days exist",
          event.title,
          event.day,
          day_count
        );
      }
      if event.span == 0
        || event.slot + event.span
          > slot_count
      {
        bail!(
          "calendar event `{}` does not \
           fit in {} time slots",
          event.title,
          slot_count
        );
      }
    }

    let column_count =
      self.timeline.days.len();
    for task in &self.timeline.tasks {
      if task.column >= column_count {
        bail!(
          "timeline task `{}` is in \
           column {} but only {} days \
           exist",
          task.title,
          task.column,
          column_count
        );
      }
    }

    for entry in &self.templates {
      if !(0.0..=5.0)
        .contains(&entry.rating)
      {
        bail!(
          "template `{}` has rating {} \
           outside 0..=5",
          entry.name,
          entry.rating
        );
      }
    }

    if let Some(bar) = self
      .weekly_activity
      .iter()
      .find(|bar| bar.percent > 100)
    {
      bail!(
        "weekly activity for `{}` \
         exceeds 100%",
        bar.day
      );
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn builtin() -> Catalog {
    Catalog::builtin()
      .expect("builtin catalog")
  }

  #[test]
  fn builtin_catalog_is_consistent() {
    let catalog = builtin();
    assert_eq!(catalog.stats.len(), 4);
    assert_eq!(
      catalog.calendar.days.len(),
      4
    );
    assert_eq!(
      catalog.timeline.days.len(),
      7
    );
    assert_eq!(
      catalog.timeline.row_count(),
      4
    );
    assert_eq!(
      catalog.insights.legend_total(),
      catalog.insights.tasks
    );
  }

  #[test]
  fn task_board_items_link_to_routes() {
    let catalog = builtin();
    let linked: Vec<_> = catalog
      .task_board
      .iter()
      .filter_map(|item| item.route)
      .collect();
    assert_eq!(linked, vec![
      Route::Template,
      Route::MarketPlaces
    ]);
  }

  #[test]
  fn template_search_is_case_insensitive(
  ) {
    let catalog = builtin();
    let hits =
      catalog.templates_matching("KANBAN");
    assert_eq!(hits.len(), 1);
    assert_eq!(
      hits[0].name,
      "Marketing Campaign Planner"
    );
    assert_eq!(
      catalog
        .templates_matching("   ")
        .len(),
      catalog.templates.len()
    );
  }

  #[test]
  fn events_outside_the_grid_are_rejected(
  ) {
    let raw = DEFAULT_CATALOG_TOML
      .replace(
        "day = 3\nslot = 2",
        "day = 9\nslot = 2"
      );
    let error =
      Catalog::from_toml_str(&raw)
        .expect_err("day 9 is out of range");
    assert!(
      error
        .to_string()
        .contains("Landing page polish")
    );
  }

  #[test]
  fn events_per_day_are_filtered() {
    let catalog = builtin();
    let titles: Vec<_> = catalog
      .calendar
      .events_on(1)
      .map(|event| event.title.as_str())
      .collect();
    assert_eq!(titles, vec![
      "Wireframe review"
    ]);
  }
}
