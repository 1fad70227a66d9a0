mod storage;

use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use taskdeck_core::{
  Catalog,
  DashboardConfig,
  NavAction,
  NavigationRequest,
  NavigationState,
  Route,
  Theme,
  ThemeStore
};
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::{
  Callback,
  ContextProvider,
  Html,
  Reducible,
  classes,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  use_location,
  use_navigator
};

use self::storage::{
  LocalPreferenceStore,
  system_prefers_dark,
  watch_system_theme
};
use crate::components::{
  CalendarView,
  DashboardView,
  FiltersBar,
  Header,
  LastProjects,
  ModalHost,
  PlaceholderPanel,
  RecentActivity,
  Sidebar,
  TeamInsightsCard,
  TemplateGallery,
  TimelineView
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Routable,
)]
enum AppRoute {
  #[at("/")]
  Dashboard,
  #[at("/project-board")]
  ProjectBoard,
  #[at("/task-board")]
  TaskBoard,
  #[at("/schedule")]
  Schedule,
  #[at("/activities")]
  Activities,
  #[at("/inbox")]
  Inbox,
  #[at("/template")]
  Template,
  #[at("/market-places")]
  MarketPlaces,
  #[not_found]
  #[at("/404")]
  NotFound
}

impl From<Route> for AppRoute {
  fn from(route: Route) -> Self {
    match route {
      | Route::Dashboard => Self::Dashboard,
      | Route::ProjectBoard => {
        Self::ProjectBoard
      }
      | Route::TaskBoard => Self::TaskBoard,
      | Route::Schedule => Self::Schedule,
      | Route::Activities => {
        Self::Activities
      }
      | Route::Inbox => Self::Inbox,
      | Route::Template => Self::Template,
      | Route::MarketPlaces => {
        Self::MarketPlaces
      }
    }
  }
}

/// Navigation state plus the last request the router has not seen yet.
/// `requests` bumps on every new request so the push effect re-runs even
/// when two requests name the same route.
#[derive(Debug, Clone, PartialEq)]
struct NavStore {
  state:    NavigationState,
  pending:  Option<NavigationRequest>,
  requests: u64
}

impl NavStore {
  fn new(state: NavigationState) -> Self {
    Self {
      state,
      pending: None,
      requests: 0
    }
  }
}

impl Reducible for NavStore {
  type Action = NavAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    let event = format!("{action:?}");
    let mut transition =
      next.state.apply(action);

    if let Some(kind) = transition.chosen
    {
      ui_debug(
        "picker.choose",
        kind.label()
      );
      let follow_up = next
        .state
        .select_route(kind.destination());
      transition.changed |=
        follow_up.changed;
      transition.request =
        follow_up.request;
    }

    if !transition.changed {
      return self;
    }

    ui_debug("nav.apply", &event);
    if let Some(request) =
      transition.request
    {
      next.pending = Some(request);
      next.requests =
        next.requests.wrapping_add(1);
    }
    Rc::new(next)
  }
}

#[derive(Debug)]
enum ThemeAction {
  Hydrate(bool),
  Toggle,
  FollowSystem,
  SystemChanged(bool)
}

#[derive(Debug, Clone)]
struct ThemeState(
  ThemeStore<LocalPreferenceStore>
);

impl Reducible for ThemeState {
  type Action = ThemeAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut store = self.0.clone();
    match action {
      | ThemeAction::Hydrate(
        prefers_dark
      ) => {
        store.hydrate(prefers_dark);
      }
      | ThemeAction::Toggle => {
        let theme = store.toggle();
        ui_debug(
          "theme.toggle",
          theme.storage_value()
        );
      }
      | ThemeAction::FollowSystem => {
        store.follow_system();
      }
      | ThemeAction::SystemChanged(
        prefers_dark
      ) => {
        if store
          .set_system_preference(
            prefers_dark
          )
          .is_none()
        {
          return self;
        }
      }
    }
    Rc::new(Self(store))
  }
}

fn load_dashboard_config()
-> Rc<DashboardConfig> {
  match DashboardConfig::builtin() {
    | Ok(config) => Rc::new(config),
    | Err(error) => {
      tracing::error!(
        %error,
        "invalid bundled dashboard \
         config; using defaults"
      );
      Rc::new(DashboardConfig::default())
    }
  }
}

fn load_catalog() -> Option<Rc<Catalog>>
{
  match Catalog::builtin() {
    | Ok(catalog) => Some(Rc::new(catalog)),
    | Err(error) => {
      tracing::error!(
        %error,
        "invalid bundled catalog"
      );
      None
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Shell />
      </BrowserRouter>
  }
}

#[function_component(Shell)]
fn shell() -> Html {
  let config =
    use_state(load_dashboard_config);
  let catalog = use_state(load_catalog);
  let nav = {
    let config = (*config).clone();
    use_reducer(move || {
      NavStore::new(
        NavigationState::from_config(
          &config
        )
      )
    })
  };
  let theme = {
    let key = config
      .theme
      .storage_key
      .clone();
    use_reducer(move || {
      ThemeState(ThemeStore::new(
        LocalPreferenceStore,
        key
      ))
    })
  };
  let navigator = use_navigator();
  let location = use_location();

  {
    let theme = theme.clone();
    use_effect_with((), move |_| {
      theme.dispatch(
        ThemeAction::Hydrate(
          system_prefers_dark()
        )
      );
      let dispatcher = theme.dispatcher();
      let listener = watch_system_theme(
        Callback::from(
          move |prefers_dark| {
            dispatcher.dispatch(
              ThemeAction::SystemChanged(
                prefers_dark
              )
            )
          }
        )
      );
      move || drop(listener)
    });
  }

  {
    let dispatcher = nav.dispatcher();
    let path = location
      .map(|location| {
        location.path().to_string()
      })
      .unwrap_or_default();
    use_effect_with(path, move |path| {
      dispatcher.dispatch(
        NavAction::SyncLocation(
          path.clone()
        )
      );
      || ()
    });
  }

  {
    let pending = nav.pending;
    use_effect_with(
      nav.requests,
      move |_| {
        if let (
          Some(request),
          Some(navigator)
        ) = (pending, navigator)
        {
          ui_debug(
            "router.push",
            request.path()
          );
          navigator.push(
            &AppRoute::from(request.route)
          );
        }
        || ()
      }
    );
  }

  {
    let dispatcher = nav.dispatcher();
    let modal_open =
      nav.state.modal().is_some();
    use_effect_with(
      modal_open,
      move |modal_open| {
        let listener = if *modal_open {
          web_sys::window()
            .and_then(|window| {
              window.document()
            })
            .map(|document| {
              EventListener::new(
                &document,
                "keydown",
                move |event| {
                  let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|event| {
                      event.key() == "Escape"
                    });
                  if escape {
                    dispatcher.dispatch(
                      NavAction::CloseModal
                    );
                  }
                }
              )
            })
        } else {
          None
        };
        move || drop(listener)
      }
    );
  }

  let Some(current_theme) =
    theme.0.theme()
  else {
    return html! {
        <div class="shell shell-pending" aria-busy="true"></div>
    };
  };

  let Some(catalog) = (*catalog).clone()
  else {
    return html! {
        <div class="shell shell-error">
            { "The dashboard content could not be loaded." }
        </div>
    };
  };

  let on_action = {
    let nav = nav.clone();
    Callback::from(
      move |action: NavAction| {
        nav.dispatch(action)
      }
    )
  };
  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_: ()| {
      theme.dispatch(ThemeAction::Toggle)
    })
  };
  let on_follow_system = {
    let theme = theme.clone();
    Callback::from(move |_: ()| {
      theme.dispatch(
        ThemeAction::FollowSystem
      )
    })
  };
  let on_close_modal = {
    let nav = nav.clone();
    Callback::from(move |_: ()| {
      nav.dispatch(NavAction::CloseModal)
    })
  };

  let section = render_section(
    nav.state.active_route(),
    &catalog
  );

  html! {
      <ContextProvider<Theme> context={current_theme}>
          <div class={classes!(resolve(current_theme, StyleToken::Shell), current_theme.as_class())}>
              <Sidebar
                  nav={nav.state.clone()}
                  config={(*config).clone()}
                  catalog={catalog.clone()}
                  on_action={on_action.clone()}
                  on_toggle_theme={on_toggle_theme}
              />
              <main class={resolve(current_theme, StyleToken::Content)}>
                  <Header
                      info={catalog.header.clone()}
                      active={nav.state.active_route()}
                      on_action={on_action}
                  />
                  { section }
              </main>
              <ModalHost
                  overlay={nav.state.modal().cloned()}
                  on_close={on_close_modal}
                  on_follow_system={on_follow_system}
              />
          </div>
      </ContextProvider<Theme>>
  }
}

fn render_section(
  route: Option<Route>,
  catalog: &Rc<Catalog>
) -> Html {
  match route {
    | Some(Route::Dashboard) => html! {
        <>
            <DashboardView catalog={catalog.clone()} />
            <div class="panel-grid">
                <LastProjects project={catalog.last_project.clone()} />
                <TeamInsightsCard insights={catalog.insights.clone()} />
            </div>
        </>
    },
    | Some(Route::ProjectBoard) => html! {
        <>
            <CalendarView calendar={catalog.calendar.clone()} />
            <FiltersBar filters={catalog.filters.clone()} />
            <div class="panel-grid">
                <LastProjects project={catalog.last_project.clone()} />
                <TeamInsightsCard insights={catalog.insights.clone()} />
            </div>
        </>
    },
    | Some(Route::TaskBoard) => html! {
        <TimelineView timeline={catalog.timeline.clone()} />
    },
    | Some(Route::Schedule) => html! {
        <CalendarView calendar={catalog.calendar.clone()} />
    },
    | Some(Route::Activities) => html! {
        <RecentActivity rows={catalog.recent_activity.clone()} />
    },
    | Some(Route::Template) => html! {
        <TemplateGallery catalog={catalog.clone()} />
    },
    | Some(
      route @ (Route::Inbox
      | Route::MarketPlaces)
    ) => html! {
        <PlaceholderPanel title={route.label()} />
    },
    | None => html! {
        <PlaceholderPanel title="Not found" />
    }
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
