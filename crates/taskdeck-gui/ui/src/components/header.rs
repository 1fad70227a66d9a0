use taskdeck_core::catalog::HeaderInfo;
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use taskdeck_core::{
  ModalKind,
  ModalOverlay,
  NavAction,
  Route
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

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub info:      HeaderInfo,
  pub active:    Option<Route>,
  pub on_action: Callback<NavAction>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let theme = use_theme();
  let section = props
    .active
    .map(Route::label)
    .unwrap_or("Unknown");
  let emit = |action: NavAction| {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action.emit(action.clone())
      }
    )
  };

  html! {
      <header class={classes!("page-header", resolve(theme, StyleToken::Border))}>
          <div class="page-title">
              <nav class={classes!("breadcrumb", resolve(theme, StyleToken::TextMuted))} aria-label="Breadcrumb">
                  <span>{ section }</span>
                  {
                      for props.info.breadcrumb.iter().map(|crumb| html! {
                          <>
                              <span class="crumb-separator">{ "›" }</span>
                              <span>{ crumb.clone() }</span>
                          </>
                      })
                  }
              </nav>
              <h1 class={resolve(theme, StyleToken::TextStrong)}>{ props.info.project.clone() }</h1>
          </div>
          <div class="page-actions">
              <div class="collaborators">
                  {
                      for props.info.collaborators.iter().map(|color| html! {
                          <span class="collaborator" style={format!("background:{color}")}></span>
                      })
                  }
                  {
                      if props.info.extra_collaborators > 0 {
                          html! {
                              <span class={classes!("collaborator", "more", resolve(theme, StyleToken::TextMuted))}>
                                  { format!("+{}", props.info.extra_collaborators) }
                              </span>
                          }
                      } else {
                          html! {}
                      }
                  }
              </div>
              <button
                  type="button"
                  class={classes!("btn", resolve(theme, StyleToken::Hover))}
                  onclick={emit(NavAction::OpenModal(ModalOverlay::new(ModalKind::Invite)))}
              >
                  { "Share" }
              </button>
              <button
                  type="button"
                  class={classes!("btn", "icon", resolve(theme, StyleToken::Hover))}
                  title="Inbox"
                  onclick={emit(NavAction::SelectRoute(Route::Inbox))}
              >
                  { "✉" }
              </button>
          </div>
      </header>
  }
}
