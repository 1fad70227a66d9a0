mod common;

use taskdeck_core::modal::ModalKind;
use taskdeck_core::{
  DashboardConfig,
  MenuGroup,
  ModalOverlay,
  NavAction,
  NavigationState,
  ProjectKind,
  Route
};

fn fresh() -> NavigationState {
  common::init_tracing();
  let config = DashboardConfig::builtin()
    .expect("builtin config");
  NavigationState::from_config(&config)
}

#[test]
fn starts_on_the_task_board_with_its_menu_open(
) {
  let nav = fresh();
  assert_eq!(
    nav.active_route(),
    Some(Route::TaskBoard)
  );
  assert_eq!(
    nav.visible_group(),
    Some(MenuGroup::TaskBoard)
  );
}

#[test]
fn row_click_then_chevron_click_on_project_board(
) {
  let mut nav = fresh();
  nav.apply(NavAction::ToggleGroup(
    MenuGroup::ProjectBoard
  ));
  assert_eq!(
    nav.expanded_group(),
    Some(MenuGroup::ProjectBoard)
  );

  let row = nav.apply(
    NavAction::SelectRoute(
      Route::ProjectBoard
    )
  );
  assert_eq!(
    row.request.map(|r| r.route),
    Some(Route::ProjectBoard)
  );
  assert_eq!(
    nav.expanded_group(),
    Some(MenuGroup::ProjectBoard)
  );

  let chevron = nav.apply(
    NavAction::ToggleGroup(
      MenuGroup::ProjectBoard
    )
  );
  assert_eq!(chevron.request, None);
  assert_eq!(nav.expanded_group(), None);
  assert_eq!(
    nav.active_route(),
    Some(Route::ProjectBoard)
  );
}

#[test]
fn sidebar_round_trip_restores_the_submenu(
) {
  let mut nav = fresh();
  nav.apply(NavAction::SelectRoute(
    Route::TaskBoard
  ));
  nav.apply(NavAction::ToggleSidebar);
  assert_eq!(nav.visible_group(), None);
  nav.apply(NavAction::ToggleSidebar);
  assert_eq!(
    nav.visible_group(),
    Some(MenuGroup::TaskBoard)
  );
}

#[test]
fn navigating_twice_yields_one_request() {
  let mut nav = fresh();
  nav.apply(NavAction::SelectRoute(
    Route::Dashboard
  ));

  let requests: Vec<_> = (0..2)
    .filter_map(|_| {
      nav.navigate(Route::TaskBoard)
    })
    .collect();
  assert_eq!(requests.len(), 1);
  assert_eq!(
    requests[0].path(),
    "/task-board"
  );
}

#[test]
fn modals_replace_instead_of_stacking() {
  let mut nav = fresh();
  nav.apply(NavAction::OpenModal(
    ModalOverlay::custom(
      ModalKind::Invite,
      "A",
      "first"
    )
  ));
  nav.apply(NavAction::OpenModal(
    ModalOverlay::custom(
      ModalKind::Settings,
      "B",
      "second"
    )
  ));

  let visible =
    nav.modal().expect("one modal");
  assert_eq!(visible.title, "B");
  assert_eq!(visible.body, "second");

  nav.apply(NavAction::CloseModal);
  assert!(nav.modal().is_none());
}

#[test]
fn host_location_drives_the_highlight() {
  let mut nav = fresh();
  nav.apply(NavAction::SyncLocation(
    "/template".to_string()
  ));
  assert!(nav.is_active(Route::Template));
  assert!(
    nav.is_highlighted(Route::TaskBoard)
  );

  assert_eq!(
    nav.navigate(Route::Template),
    None
  );
}

#[test]
fn add_project_slot_shows_one_thing_at_a_time(
) {
  let mut nav = fresh();
  nav.apply(NavAction::ShowProjectTypes);
  assert!(nav.project_types().is_listing());

  let chosen = nav.apply(
    NavAction::ChooseProjectType(
      ProjectKind::Project
    )
  );
  assert_eq!(
    chosen.chosen,
    Some(ProjectKind::Project)
  );
  assert!(
    !nav.project_types().is_listing()
  );

  nav.apply(NavAction::ShowProjectTypes);
  nav.apply(NavAction::HideProjectTypes);
  assert!(
    !nav.project_types().is_listing()
  );
}
