use taskdeck_core::style::{
  StyleToken,
  resolve
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
  pub on_toggle: Callback<()>,
  #[prop_or(true)]
  pub show_label: bool
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(
  props: &ThemeToggleProps
) -> Html {
  let theme = use_theme();
  let on_toggle = props.on_toggle.clone();
  let label = if theme.is_dark() {
    "Dark mode"
  } else {
    "Light mode"
  };

  html! {
      <button
          type="button"
          class={classes!(resolve(theme, StyleToken::Toggle), theme.is_dark().then(|| resolve(theme, StyleToken::ToggleActive)))}
          aria-pressed={theme.is_dark().to_string()}
          title="Toggle theme"
          onclick={move |_| on_toggle.emit(())}
      >
          <span class="toggle-icon">{ if theme.is_dark() { "☾" } else { "☀" } }</span>
          {
              if props.show_label {
                  html! { <span class="toggle-label">{ label }</span> }
              } else {
                  html! {}
              }
          }
      </button>
  }
}
