//! Sidebar navigation state: active route, expanded menu group, sidebar
//! layout, modal overlay and the add-project picker.
//!
//! The axes are independent except for one coupling: selecting a group
//! header route always forces that group open. Only the disclosure chevron
//! (`toggle_group`) can close a group.

use tracing::debug;

use crate::config::{
  DashboardConfig,
  SidebarConfig
};
use crate::modal::{
  ModalOverlay,
  ModalSlot
};
use crate::picker::{
  ProjectKind,
  ProjectTypePicker
};
use crate::route::{
  MenuGroup,
  Route
};

/// Asks the host router to move to `route`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct NavigationRequest {
  pub route: Route
}

impl NavigationRequest {
  pub fn path(self) -> &'static str {
    self.route.path()
  }
}

/// Outcome of applying one action.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Transition {
  pub changed: bool,
  pub request: Option<NavigationRequest>,
  pub chosen:  Option<ProjectKind>
}

impl Transition {
  fn unchanged() -> Self {
    Self::default()
  }

  fn changed(changed: bool) -> Self {
    Self {
      changed,
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
  SelectRoute(Route),
  ToggleGroup(MenuGroup),
  ToggleSidebar,
  OpenModal(ModalOverlay),
  CloseModal,
  ShowProjectTypes,
  HideProjectTypes,
  ChooseProjectType(ProjectKind),
  SyncLocation(String)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
  active_route:   Option<Route>,
  expanded_group: Option<MenuGroup>,
  sidebar_open:   bool,
  modal:          ModalSlot,
  project_types:  ProjectTypePicker
}

impl Default for NavigationState {
  fn default() -> Self {
    Self {
      active_route:   Some(
        Route::Dashboard
      ),
      expanded_group: None,
      sidebar_open:   true,
      modal:          ModalSlot::default(),
      project_types:
        ProjectTypePicker::default()
    }
  }
}

impl NavigationState {
  pub fn from_config(
    config: &DashboardConfig
  ) -> Self {
    Self {
      active_route: config
        .navigation
        .initial_route,
      expanded_group: config
        .sidebar
        .initial_group,
      sidebar_open: config
        .sidebar
        .initially_open,
      ..Self::default()
    }
  }

  pub fn apply(
    &mut self,
    action: NavAction
  ) -> Transition {
    match action {
      | NavAction::SelectRoute(route) => {
        self.select_route(route)
      }
      | NavAction::ToggleGroup(group) => {
        self.toggle_group(group)
      }
      | NavAction::ToggleSidebar => {
        self.toggle_sidebar_open()
      }
      | NavAction::OpenModal(overlay) => {
        self.open_modal(overlay)
      }
      | NavAction::CloseModal => {
        self.close_modal()
      }
      | NavAction::ShowProjectTypes => {
        self.show_project_types()
      }
      | NavAction::HideProjectTypes => {
        self.hide_project_types()
      }
      | NavAction::ChooseProjectType(
        kind
      ) => self.choose_project_type(kind),
      | NavAction::SyncLocation(path) => {
        self.sync_location(&path)
      }
    }
  }

  /// Row click. Group header routes always end up expanded, never
  /// toggled closed.
  pub fn select_route(
    &mut self,
    route: Route
  ) -> Transition {
    let route_changed =
      self.active_route != Some(route);
    self.active_route = Some(route);

    let mut group_changed = false;
    if let Some(group) =
      route.header_group()
      && self.expanded_group
        != Some(group)
    {
      self.expanded_group = Some(group);
      group_changed = true;
    }

    debug!(
      route = %route,
      route_changed,
      group_changed,
      "selected route"
    );

    Transition {
      changed: route_changed
        || group_changed,
      request: route_changed.then_some(
        NavigationRequest { route }
      ),
      chosen: None
    }
  }

  /// Host-facing navigation: yields a request only when `route` is not
  /// already active.
  pub fn navigate(
    &mut self,
    route: Route
  ) -> Option<NavigationRequest> {
    self.select_route(route).request
  }

  /// Chevron click. Collapses the group if it is the expanded one,
  /// otherwise expands it and collapses whatever was open.
  pub fn toggle_group(
    &mut self,
    group: MenuGroup
  ) -> Transition {
    self.expanded_group =
      if self.expanded_group
        == Some(group)
      {
        None
      } else {
        Some(group)
      };
    debug!(
      group = group.slug(),
      expanded = ?self.expanded_group,
      "toggled menu group"
    );
    Transition::changed(true)
  }

  /// Flips the sidebar layout. The expanded group is kept so reopening
  /// restores the same submenu.
  pub fn toggle_sidebar_open(
    &mut self
  ) -> Transition {
    self.sidebar_open =
      !self.sidebar_open;
    debug!(
      open = self.sidebar_open,
      retained_group = ?self.expanded_group,
      "toggled sidebar"
    );
    Transition::changed(true)
  }

  pub fn open_modal(
    &mut self,
    overlay: ModalOverlay
  ) -> Transition {
    Transition::changed(
      self.modal.show(overlay)
    )
  }

  pub fn close_modal(
    &mut self
  ) -> Transition {
    Transition::changed(
      self.modal.hide()
    )
  }

  pub fn show_project_types(
    &mut self
  ) -> Transition {
    self.set_project_types(
      ProjectTypePicker::Options
    )
  }

  pub fn hide_project_types(
    &mut self
  ) -> Transition {
    self.set_project_types(
      ProjectTypePicker::CallToAction
    )
  }

  pub fn choose_project_type(
    &mut self,
    kind: ProjectKind
  ) -> Transition {
    if !self.project_types.is_listing()
    {
      return Transition::unchanged();
    }
    debug!(
      ?kind,
      "chose project type"
    );
    let mut transition = self
      .set_project_types(
        ProjectTypePicker::CallToAction
      );
    transition.chosen = Some(kind);
    transition
  }

  /// Reads the host location. The host is already there, so no request is
  /// produced. A route inside a group reveals that group.
  pub fn sync_location(
    &mut self,
    path: &str
  ) -> Transition {
    let route = Route::from_path(path);
    let mut changed =
      self.active_route != route;
    self.active_route = route;

    let reveal = route.and_then(|route| {
      route
        .header_group()
        .or(route.parent_group())
    });
    if let Some(group) = reveal
      && self.expanded_group
        != Some(group)
    {
      self.expanded_group = Some(group);
      changed = true;
    }

    if route.is_none() {
      debug!(
        path,
        "location names no known \
         section"
      );
    }

    Transition::changed(changed)
  }

  fn set_project_types(
    &mut self,
    next: ProjectTypePicker
  ) -> Transition {
    let changed =
      self.project_types != next;
    self.project_types = next;
    Transition::changed(changed)
  }

  pub fn active_route(
    &self
  ) -> Option<Route> {
    self.active_route
  }

  pub fn expanded_group(
    &self
  ) -> Option<MenuGroup> {
    self.expanded_group
  }

  /// The group whose submenu is rendered. Nothing is rendered while the
  /// sidebar is collapsed.
  pub fn visible_group(
    &self
  ) -> Option<MenuGroup> {
    self
      .sidebar_open
      .then_some(self.expanded_group)
      .flatten()
  }

  pub fn is_group_expanded(
    &self,
    group: MenuGroup
  ) -> bool {
    self.expanded_group == Some(group)
  }

  pub fn is_sidebar_open(&self) -> bool {
    self.sidebar_open
  }

  pub fn sidebar_width(
    &self,
    config: &SidebarConfig
  ) -> u32 {
    if self.sidebar_open {
      config.expanded_width
    } else {
      config.collapsed_width
    }
  }

  pub fn is_active(
    &self,
    route: Route
  ) -> bool {
    self.active_route == Some(route)
  }

  /// A header row is highlighted while one of its sub-items is active.
  pub fn is_highlighted(
    &self,
    route: Route
  ) -> bool {
    match self.active_route {
      | Some(active) => {
        active == route
          || active
            .parent_group()
            .map(MenuGroup::header_route)
            == Some(route)
      }
      | None => false
    }
  }

  pub fn modal(
    &self
  ) -> Option<&ModalOverlay> {
    self.modal.current()
  }

  pub fn project_types(
    &self
  ) -> ProjectTypePicker {
    self.project_types
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::modal::ModalKind;

  fn state() -> NavigationState {
    NavigationState::default()
  }

  #[test]
  fn at_most_one_group_is_ever_expanded(
  ) {
    let mut nav = state();
    let sequence = [
      MenuGroup::ProjectBoard,
      MenuGroup::TaskBoard,
      MenuGroup::TaskBoard,
      MenuGroup::ProjectBoard,
      MenuGroup::ProjectBoard,
      MenuGroup::TaskBoard
    ];

    for group in sequence {
      nav.toggle_group(group);
      let open = MenuGroup::all()
        .iter()
        .filter(|candidate| {
          nav.is_group_expanded(
            **candidate
          )
        })
        .count();
      assert!(open <= 1);
    }
    assert_eq!(
      nav.expanded_group(),
      Some(MenuGroup::TaskBoard)
    );
  }

  #[test]
  fn header_row_keeps_group_open_but_chevron_closes_it(
  ) {
    let mut nav = state();
    nav.toggle_group(
      MenuGroup::ProjectBoard
    );

    nav.select_route(
      Route::ProjectBoard
    );
    assert!(nav.is_group_expanded(
      MenuGroup::ProjectBoard
    ));

    nav.toggle_group(
      MenuGroup::ProjectBoard
    );
    assert_eq!(
      nav.expanded_group(),
      None
    );
  }

  #[test]
  fn chevron_does_not_navigate() {
    let mut nav = state();
    let transition = nav.toggle_group(
      MenuGroup::TaskBoard
    );
    assert_eq!(transition.request, None);
    assert_eq!(
      nav.active_route(),
      Some(Route::Dashboard)
    );
  }

  #[test]
  fn selecting_a_header_collapses_the_other_group(
  ) {
    let mut nav = state();
    nav.toggle_group(
      MenuGroup::ProjectBoard
    );
    nav.select_route(Route::TaskBoard);
    assert_eq!(
      nav.expanded_group(),
      Some(MenuGroup::TaskBoard)
    );
  }

  #[test]
  fn plain_routes_leave_the_expanded_group_alone(
  ) {
    let mut nav = state();
    nav.toggle_group(MenuGroup::TaskBoard);
    nav.select_route(Route::Inbox);
    assert_eq!(
      nav.expanded_group(),
      Some(MenuGroup::TaskBoard)
    );
  }

  #[test]
  fn collapsing_the_sidebar_retains_the_group(
  ) {
    let mut nav = state();
    nav.toggle_group(MenuGroup::TaskBoard);

    nav.toggle_sidebar_open();
    assert!(!nav.is_sidebar_open());
    assert_eq!(nav.visible_group(), None);
    assert_eq!(
      nav.expanded_group(),
      Some(MenuGroup::TaskBoard)
    );

    nav.toggle_sidebar_open();
    assert_eq!(
      nav.visible_group(),
      Some(MenuGroup::TaskBoard)
    );
  }

  #[test]
  fn repeated_selection_is_idempotent() {
    let mut nav = state();
    let first =
      nav.select_route(Route::TaskBoard);
    let snapshot = nav.clone();
    let second =
      nav.select_route(Route::TaskBoard);

    assert!(first.changed);
    assert_eq!(
      first.request.map(|r| r.path()),
      Some("/task-board")
    );
    assert!(!second.changed);
    assert_eq!(second.request, None);
    assert_eq!(nav, snapshot);
  }

  #[test]
  fn navigate_skips_the_current_route() {
    let mut nav = state();
    assert_eq!(
      nav.navigate(Route::Dashboard),
      None
    );
    assert_eq!(
      nav.navigate(Route::Schedule),
      Some(NavigationRequest {
        route: Route::Schedule
      })
    );
  }

  #[test]
  fn sub_item_highlights_its_header() {
    let mut nav = state();
    nav.select_route(Route::Template);
    assert!(nav.is_active(Route::Template));
    assert!(
      nav.is_highlighted(Route::TaskBoard)
    );
    assert!(
      !nav.is_active(Route::TaskBoard)
    );
    assert!(!nav.is_highlighted(
      Route::ProjectBoard
    ));
  }

  #[test]
  fn deep_link_reveals_the_parent_group(
  ) {
    let mut nav = state();
    let transition =
      nav.sync_location("/market-places");
    assert!(transition.changed);
    assert_eq!(transition.request, None);
    assert_eq!(
      nav.active_route(),
      Some(Route::MarketPlaces)
    );
    assert_eq!(
      nav.expanded_group(),
      Some(MenuGroup::TaskBoard)
    );
  }

  #[test]
  fn unknown_location_clears_the_active_route(
  ) {
    let mut nav = state();
    nav.sync_location("/nowhere");
    assert_eq!(nav.active_route(), None);
    assert!(
      !nav.is_highlighted(Route::Dashboard)
    );
  }

  #[test]
  fn width_follows_sidebar_layout() {
    let config = SidebarConfig::default();
    let mut nav = state();
    assert_eq!(
      nav.sidebar_width(&config),
      300
    );
    nav.toggle_sidebar_open();
    assert_eq!(
      nav.sidebar_width(&config),
      80
    );
  }

  #[test]
  fn project_type_choice_returns_to_the_call_to_action(
  ) {
    let mut nav = state();
    assert_eq!(
      nav
        .choose_project_type(
          ProjectKind::Template
        )
        .chosen,
      None
    );

    nav.show_project_types();
    assert!(nav.project_types().is_listing());

    let transition = nav
      .choose_project_type(
        ProjectKind::TaskBoard
      );
    assert_eq!(
      transition.chosen,
      Some(ProjectKind::TaskBoard)
    );
    assert!(
      !nav.project_types().is_listing()
    );
  }

  #[test]
  fn apply_routes_modal_actions() {
    let mut nav = state();
    nav.apply(NavAction::OpenModal(
      ModalOverlay::new(ModalKind::Invite)
    ));
    nav.apply(NavAction::OpenModal(
      ModalOverlay::new(
        ModalKind::SyncStatus
      )
    ));
    assert_eq!(
      nav.modal().map(|m| m.kind),
      Some(ModalKind::SyncStatus)
    );
    assert!(
      nav.apply(NavAction::CloseModal)
        .changed
    );
    assert!(nav.modal().is_none());
  }
}
