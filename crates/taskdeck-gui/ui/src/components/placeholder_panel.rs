use taskdeck_core::style::{
  StyleToken,
  resolve
};
use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct PlaceholderPanelProps {
  pub title: AttrValue
}

/// Sections without content of their own yet.
#[function_component(PlaceholderPanel)]
pub fn placeholder_panel(
  props: &PlaceholderPanelProps
) -> Html {
  let theme = use_theme();

  html! {
      <section class={classes!(resolve(theme, StyleToken::Card), "placeholder")}>
          <h2 class={resolve(theme, StyleToken::TextStrong)}>{ props.title.clone() }</h2>
          <p class={resolve(theme, StyleToken::TextMuted)}>{ "Nothing to show here yet." }</p>
      </section>
  }
}
