use std::rc::Rc;

use taskdeck_core::catalog::{
  BoardItem,
  BoardMarker,
  SubMenuItem
};
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use taskdeck_core::{
  Catalog,
  DashboardConfig,
  MenuGroup,
  ModalKind,
  ModalOverlay,
  NavAction,
  NavigationState,
  Route,
  Theme
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  AddProjectCard,
  ThemeToggle,
  Typewriter,
  use_theme
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub nav:             NavigationState,
  pub config:          Rc<DashboardConfig>,
  pub catalog:         Rc<Catalog>,
  pub on_action:       Callback<NavAction>,
  pub on_toggle_theme: Callback<()>
}

const ONBOARDING: [(
  ModalKind,
  &str
); 5] = [
  (ModalKind::Notes, "✎"),
  (ModalKind::Invite, "🔗"),
  (ModalKind::Wallet, "◈"),
  (ModalKind::Bookmarks, "☆"),
  (ModalKind::SyncStatus, "⟳")
];

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let theme = use_theme();
  let nav = &props.nav;
  let open = nav.is_sidebar_open();
  let width = nav
    .sidebar_width(&props.config.sidebar);
  let profile = &props.config.profile;
  let initial = profile
    .name
    .chars()
    .next()
    .map(String::from)
    .unwrap_or_default();

  let emit = |action: NavAction| {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action.emit(action.clone())
      }
    )
  };

  let row = |route: Route,
             icon: &'static str,
             trailing: Html| {
    nav_row(
      nav,
      theme,
      route,
      icon,
      trailing,
      &props.on_action
    )
  };

  let schedule_label = html! {
      <span class={classes!("row-meta", resolve(theme, StyleToken::TextMuted))}>
          { props.config.schedule.label() }
      </span>
  };
  let activities_badge = html! {
      <span class={resolve(theme, StyleToken::WarnBadge)}>{ "New" }</span>
  };
  let unread =
    props.catalog.header.inbox_unread;
  let inbox_badge = if unread > 0 {
    html! {
        <span class={resolve(theme, StyleToken::Badge)}>{ unread }</span>
    }
  } else {
    html! {}
  };

  html! {
      <aside
          class={classes!("sidebar", resolve(theme, StyleToken::Sidebar), resolve(theme, StyleToken::Border), (!open).then_some("collapsed"))}
          style={format!("width:{width}px")}
      >
          <div class="sidebar-profile">
              <div class="avatar">{ initial }</div>
              {
                  if open {
                      html! {
                          <>
                              <div class="profile-text">
                                  <Typewriter
                                      text={profile.name.clone()}
                                      speed_ms={props.config.typewriter.speed_ms}
                                      class={resolve(theme, StyleToken::TextStrong)}
                                  />
                                  <span class={resolve(theme, StyleToken::TextMuted)}>{ profile.title.clone() }</span>
                              </div>
                              <div class="profile-actions">
                                  <button type="button" class="btn icon" title="Add project" onclick={emit(NavAction::ShowProjectTypes)}>
                                      { "+" }
                                  </button>
                                  <button
                                      type="button"
                                      class="btn icon"
                                      title="Settings"
                                      onclick={emit(NavAction::OpenModal(ModalOverlay::new(ModalKind::Settings)))}
                                  >
                                      { "⚙" }
                                  </button>
                              </div>
                          </>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>

          {
              if open {
                  html! {
                      <>
                          <input
                              class={resolve(theme, StyleToken::Input)}
                              type="search"
                              placeholder={profile.search_placeholder.clone()}
                          />
                          <div class={classes!("section-label", resolve(theme, StyleToken::TextMuted))}>
                              { "Overview" }
                          </div>
                      </>
                  }
              } else {
                  html! {}
              }
          }

          <nav class="sidebar-nav">
              { row(Route::Dashboard, "▦", html! {}) }
              { group_row(nav, theme, MenuGroup::ProjectBoard, "▤", &props.on_action) }
              {
                  if nav.visible_group() == Some(MenuGroup::ProjectBoard) {
                      project_tree(theme, &props.catalog.project_board)
                  } else {
                      html! {}
                  }
              }
              { group_row(nav, theme, MenuGroup::TaskBoard, "☑", &props.on_action) }
              {
                  if nav.visible_group() == Some(MenuGroup::TaskBoard) {
                      task_submenu(nav, theme, &props.catalog.task_board, &props.on_action)
                  } else {
                      html! {}
                  }
              }
              { row(Route::Schedule, "◷", schedule_label) }
              { row(Route::Activities, "⚡", activities_badge) }
              { row(Route::Inbox, "✉", inbox_badge) }
          </nav>

          {
              if open {
                  html! {
                      <>
                          <div class={resolve(theme, StyleToken::Divider)}></div>
                          <div class={classes!("section-label", resolve(theme, StyleToken::TextMuted))}>
                              { "Onboarding" }
                          </div>
                          <div class="onboarding">
                              {
                                  for ONBOARDING.iter().map(|(kind, icon)| html! {
                                      <button
                                          type="button"
                                          class={classes!("btn", "icon", resolve(theme, StyleToken::Hover))}
                                          title={kind.default_title()}
                                          onclick={emit(NavAction::OpenModal(ModalOverlay::new(*kind)))}
                                      >
                                          { *icon }
                                      </button>
                                  })
                              }
                          </div>
                          <AddProjectCard
                              picker={nav.project_types()}
                              on_action={props.on_action.clone()}
                          />
                      </>
                  }
              } else {
                  html! {}
              }
          }

          <div class="sidebar-footer">
              <ThemeToggle on_toggle={props.on_toggle_theme.clone()} show_label={open} />
              <button
                  type="button"
                  class={classes!("btn", "icon", "collapse-toggle", resolve(theme, StyleToken::Hover))}
                  aria-label={if open { "Collapse sidebar" } else { "Expand sidebar" }}
                  onclick={emit(NavAction::ToggleSidebar)}
              >
                  { if open { "«" } else { "»" } }
              </button>
          </div>
      </aside>
  }
}

fn nav_row(
  nav: &NavigationState,
  theme: Theme,
  route: Route,
  icon: &'static str,
  trailing: Html,
  on_action: &Callback<NavAction>
) -> Html {
  let open = nav.is_sidebar_open();
  let on_click = {
    let on_action = on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action.emit(
          NavAction::SelectRoute(route)
        )
      }
    )
  };

  html! {
      <div
          class={classes!("nav-row", resolve(theme, StyleToken::Hover), nav.is_highlighted(route).then_some("active"))}
          title={route.label()}
          onclick={on_click}
      >
          <span class="row-icon">{ icon }</span>
          {
              if open {
                  html! {
                      <>
                          <span class={classes!("row-label", resolve(theme, StyleToken::TextStrong))}>{ route.label() }</span>
                          { trailing }
                      </>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

/// Header row of a collapsible group. The chevron toggles the submenu
/// without selecting the route.
fn group_row(
  nav: &NavigationState,
  theme: Theme,
  group: MenuGroup,
  icon: &'static str,
  on_action: &Callback<NavAction>
) -> Html {
  let expanded =
    nav.is_group_expanded(group);
  let on_chevron = {
    let on_action = on_action.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_action.emit(
          NavAction::ToggleGroup(group)
        );
      }
    )
  };
  let chevron = html! {
      <button
          type="button"
          class="chevron"
          aria-expanded={expanded.to_string()}
          aria-label={format!("Toggle {}", group.label())}
          onclick={on_chevron}
      >
          { if expanded { "▾" } else { "▸" } }
      </button>
  };

  nav_row(
    nav,
    theme,
    group.header_route(),
    icon,
    chevron,
    on_action
  )
}

fn marker_class(
  marker: BoardMarker
) -> &'static str {
  match marker {
    | BoardMarker::Square => {
      "marker marker-square"
    }
    | BoardMarker::Ring => {
      "marker marker-ring"
    }
    | BoardMarker::RingAmber => {
      "marker marker-ring amber"
    }
    | BoardMarker::Triangle => {
      "marker marker-triangle"
    }
  }
}

fn project_tree(
  theme: Theme,
  items: &[BoardItem]
) -> Html {
  html! {
      <ul class="submenu project-tree">
          {
              for items.iter().map(|item| html! {
                  <li class={classes!("submenu-item", resolve(theme, StyleToken::Hover))}>
                      <span class={marker_class(item.marker)}></span>
                      <span class={resolve(theme, StyleToken::TextStrong)}>{ item.name.clone() }</span>
                      {
                          match item.badge {
                              | Some(count) => html! {
                                  <span class={resolve(theme, StyleToken::Badge)}>{ count }</span>
                              },
                              | None => html! {}
                          }
                      }
                      {
                          if item.is_tree() {
                              html! {
                                  <ul class="tree-children">
                                      {
                                          for item.children.iter().map(|child| html! {
                                              <li class={resolve(theme, StyleToken::TextMuted)}>{ child.clone() }</li>
                                          })
                                      }
                                  </ul>
                              }
                          } else {
                              html! {}
                          }
                      }
                  </li>
              })
          }
      </ul>
  }
}

fn task_submenu(
  nav: &NavigationState,
  theme: Theme,
  items: &[SubMenuItem],
  on_action: &Callback<NavAction>
) -> Html {
  html! {
      <ul class="submenu task-submenu">
          {
              for items.iter().map(|item| {
                  let onclick = item.route.map(|route| {
                      let on_action = on_action.clone();
                      Callback::from(move |_: MouseEvent| {
                          on_action.emit(NavAction::SelectRoute(route))
                      })
                  });
                  let active = item
                      .route
                      .is_some_and(|route| nav.is_active(route));
                  html! {
                      <li
                          class={classes!("submenu-item", resolve(theme, StyleToken::Hover), active.then_some("active"), item.route.is_none().then_some("static"))}
                          {onclick}
                      >
                          <span class={format!("dot accent-{}", item.accent)}></span>
                          <span class={resolve(theme, StyleToken::TextStrong)}>{ item.name.clone() }</span>
                          {
                              match item.count {
                                  | Some(count) => html! {
                                      <span class={resolve(theme, StyleToken::WarnBadge)}>{ count }</span>
                                  },
                                  | None => html! {}
                              }
                          }
                      </li>
                  }
              })
          }
      </ul>
  }
}
