use taskdeck_core::style::{
  StyleToken,
  resolve
};
use taskdeck_core::{
  NavAction,
  ProjectKind,
  ProjectTypePicker
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
pub struct AddProjectCardProps {
  pub picker:    ProjectTypePicker,
  pub on_action: Callback<NavAction>
}

/// Call-to-action card that swaps itself for the project type list.
#[function_component(AddProjectCard)]
pub fn add_project_card(
  props: &AddProjectCardProps
) -> Html {
  let theme = use_theme();
  let emit = |action: NavAction| {
    let on_action =
      props.on_action.clone();
    Callback::from(move |_: MouseEvent| {
      on_action.emit(action.clone())
    })
  };

  match props.picker {
    | ProjectTypePicker::CallToAction => {
      html! {
          <div class={classes!("add-project", resolve(theme, StyleToken::Card))}>
              <div class={resolve(theme, StyleToken::TextStrong)}>{ "Add new project" }</div>
              <p class={resolve(theme, StyleToken::TextMuted)}>
                  { "Start from scratch or reuse a template." }
              </p>
              <button type="button" class="btn primary" onclick={emit(NavAction::ShowProjectTypes)}>
                  { "+ Add Project" }
              </button>
          </div>
      }
    }
    | ProjectTypePicker::Options => {
      html! {
          <div class={classes!("add-project", "listing", resolve(theme, StyleToken::Card))}>
              <div class="picker-header">
                  <span class={resolve(theme, StyleToken::TextStrong)}>{ "Choose a type" }</span>
                  <button type="button" class="btn icon" aria-label="Back" onclick={emit(NavAction::HideProjectTypes)}>
                      { "×" }
                  </button>
              </div>
              {
                  for ProjectKind::all().iter().map(|kind| html! {
                      <button
                          type="button"
                          class={classes!("picker-option", resolve(theme, StyleToken::Hover))}
                          onclick={emit(NavAction::ChooseProjectType(*kind))}
                      >
                          { kind.label() }
                      </button>
                  })
              }
          </div>
      }
    }
  }
}
