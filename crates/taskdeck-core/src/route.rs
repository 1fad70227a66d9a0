use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Top-level dashboard section. Exactly one is active at a time, or none
/// when the host location does not name a known section.
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
#[serde(rename_all = "kebab-case")]
pub enum Route {
  Dashboard,
  ProjectBoard,
  TaskBoard,
  Schedule,
  Activities,
  Inbox,
  Template,
  MarketPlaces
}

/// Sidebar entry that owns a collapsible list of sub-items.
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
#[serde(rename_all = "kebab-case")]
pub enum MenuGroup {
  ProjectBoard,
  TaskBoard
}

impl Route {
  pub fn all() -> &'static [Route] {
    &[
      Route::Dashboard,
      Route::ProjectBoard,
      Route::TaskBoard,
      Route::Schedule,
      Route::Activities,
      Route::Inbox,
      Route::Template,
      Route::MarketPlaces
    ]
  }

  pub fn path(self) -> &'static str {
    match self {
      | Self::Dashboard => "/",
      | Self::ProjectBoard => {
        "/project-board"
      }
      | Self::TaskBoard => "/task-board",
      | Self::Schedule => "/schedule",
      | Self::Activities => "/activities",
      | Self::Inbox => "/inbox",
      | Self::Template => "/template",
      | Self::MarketPlaces => {
        "/market-places"
      }
    }
  }

  /// Resolves a host location. Query strings and fragments are ignored and
  /// a single trailing slash is tolerated.
  pub fn from_path(
    path: &str
  ) -> Option<Self> {
    let path = path
      .split(['?', '#'])
      .next()
      .unwrap_or_default()
      .trim();
    let normalized = match path
      .strip_suffix('/')
    {
      | Some("") | None => path,
      | Some(stripped) => stripped
    };
    if normalized.is_empty() {
      return Some(Self::Dashboard);
    }

    Self::all()
      .iter()
      .copied()
      .find(|route| {
        route.path() == normalized
      })
  }

  pub fn slug(self) -> &'static str {
    match self {
      | Self::Dashboard => "dashboard",
      | Self::ProjectBoard => {
        "project-board"
      }
      | Self::TaskBoard => "task-board",
      | Self::Schedule => "schedule",
      | Self::Activities => "activities",
      | Self::Inbox => "inbox",
      | Self::Template => "template",
      | Self::MarketPlaces => {
        "market-places"
      }
    }
  }

  pub fn from_slug(
    slug: &str
  ) -> Option<Self> {
    let slug = slug.trim();
    Self::all()
      .iter()
      .copied()
      .find(|route| route.slug() == slug)
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Dashboard => "Dashboard",
      | Self::ProjectBoard => {
        "Project Board"
      }
      | Self::TaskBoard => "Task Board",
      | Self::Schedule => "Schedule",
      | Self::Activities => "Activities",
      | Self::Inbox => "Inbox",
      | Self::Template => "Template",
      | Self::MarketPlaces => {
        "Market Places"
      }
    }
  }

  /// The group whose header row this route is.
  pub fn header_group(
    self
  ) -> Option<MenuGroup> {
    match self {
      | Self::ProjectBoard => {
        Some(MenuGroup::ProjectBoard)
      }
      | Self::TaskBoard => {
        Some(MenuGroup::TaskBoard)
      }
      | _ => None
    }
  }

  /// The group that lists this route as one of its sub-items.
  pub fn parent_group(
    self
  ) -> Option<MenuGroup> {
    match self {
      | Self::Template
      | Self::MarketPlaces => {
        Some(MenuGroup::TaskBoard)
      }
      | _ => None
    }
  }
}

impl fmt::Display for Route {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.path())
  }
}

impl MenuGroup {
  pub fn all() -> &'static [MenuGroup] {
    &[
      MenuGroup::ProjectBoard,
      MenuGroup::TaskBoard
    ]
  }

  pub fn header_route(self) -> Route {
    match self {
      | Self::ProjectBoard => {
        Route::ProjectBoard
      }
      | Self::TaskBoard => {
        Route::TaskBoard
      }
    }
  }

  pub fn slug(self) -> &'static str {
    self.header_route().slug()
  }

  pub fn from_slug(
    slug: &str
  ) -> Option<Self> {
    Route::from_slug(slug)
      .and_then(Route::header_group)
  }

  pub fn label(self) -> &'static str {
    self.header_route().label()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_route_resolves_from_its_own_path(
  ) {
    for route in Route::all() {
      assert_eq!(
        Route::from_path(route.path()),
        Some(*route)
      );
    }
  }

  #[test]
  fn location_noise_is_ignored() {
    assert_eq!(
      Route::from_path(
        "/task-board/"
      ),
      Some(Route::TaskBoard)
    );
    assert_eq!(
      Route::from_path(
        "/inbox?unread=1#top"
      ),
      Some(Route::Inbox)
    );
    assert_eq!(
      Route::from_path(""),
      Some(Route::Dashboard)
    );
    assert_eq!(
      Route::from_path("/settings"),
      None
    );
  }

  #[test]
  fn only_board_routes_head_a_group() {
    let heads: Vec<_> = Route::all()
      .iter()
      .filter_map(|route| {
        route.header_group()
      })
      .collect();
    assert_eq!(heads, MenuGroup::all());
    assert_eq!(
      Route::Template.parent_group(),
      Some(MenuGroup::TaskBoard)
    );
    assert_eq!(
      Route::Inbox.parent_group(),
      None
    );
  }

  #[test]
  fn group_slugs_match_header_routes() {
    assert_eq!(
      MenuGroup::from_slug(
        "project-board"
      ),
      Some(MenuGroup::ProjectBoard)
    );
    assert_eq!(
      MenuGroup::from_slug("inbox"),
      None
    );
  }

  #[test]
  fn wire_names_are_kebab_case() {
    let json = serde_json::to_string(
      &Route::MarketPlaces
    )
    .expect("serialize route");
    assert_eq!(json, "\"market-places\"");
  }
}
